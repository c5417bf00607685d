//! Pointer interaction handling.
//!
//! Raw device events flow through [`PointerClassifier`], which decides whether
//! the user is tapping or dragging and reports to an [`InteractionSink`]. The
//! host describes its drawing surface through [`PointerSurface`].

mod classifier;
mod classify;
mod resolve;
mod surface;

pub use classifier::{PointerClassifier, PointerTracker};
pub use classify::{InteractionKind, classify_interaction};
pub use resolve::{ResolveStrategy, resolve_release_cell};
pub use surface::{GridLayout, PointerSurface};

use crate::geometry::Position;

/// A single pointer event in surface pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    pub pointer_id: u32,
    pub x: f64,
    pub y: f64,
    /// Cell the host hit-tested the event to, when it can.
    #[cfg_attr(feature = "serde", serde(default))]
    pub target: Option<Position>,
}

impl PointerEvent {
    pub fn new(pointer_id: u32, x: f64, y: f64) -> Self {
        Self {
            pointer_id,
            x,
            y,
            target: None,
        }
    }

    pub fn with_target(mut self, target: Position) -> Self {
        self.target = Some(target);
        self
    }
}

/// Receiver of classified interactions.
///
/// `tap_start` fires on every press that lands on the grid. A confirmed drag
/// adds `drag_start`, then path updates, then `drag_end`. A press released as
/// a tap gets `tap_end` instead, even if `drag_start` already fired.
pub trait InteractionSink {
    fn tap_start(&mut self, pos: Position);

    fn tap_end(&mut self, pos: Position);

    fn drag_start(&mut self, pos: Position);

    /// Full replacement path from the drag start (geometric policy).
    fn drag_move(&mut self, path: &[Position]);

    /// Cell newly under the pointer (incremental policy).
    ///
    /// Returns the length of the selection path after the update. Sinks
    /// that keep no path return 0, so the press stays a tap.
    fn drag_over(&mut self, _pos: Position) -> usize {
        0
    }

    fn drag_end(&mut self);

    fn cancel(&mut self);
}
