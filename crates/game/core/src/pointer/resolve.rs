//! Release-cell resolution for taps.

use super::{PointerEvent, PointerSurface};
use crate::geometry::{Position, is_in_bounds};

/// One way of finding the cell a tap was released on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolveStrategy {
    /// The cell the interaction started on. A tap did not travel, so this is
    /// the most reliable answer.
    StartCell,
    /// The cell under the release coordinates. Skipped when the coordinates
    /// are exactly `(0, 0)`, which some touch platforms report after lift-off.
    PointLookup,
    /// The cell the host attached to the release event.
    EventTarget,
}

impl ResolveStrategy {
    /// Default fallback order; the first strategy that yields a cell wins.
    pub const DEFAULT_ORDER: [ResolveStrategy; 3] = [
        ResolveStrategy::StartCell,
        ResolveStrategy::PointLookup,
        ResolveStrategy::EventTarget,
    ];

    fn resolve<S>(self, start: Option<Position>, event: &PointerEvent, surface: &S) -> Option<Position>
    where
        S: PointerSurface + ?Sized,
    {
        let pos = match self {
            ResolveStrategy::StartCell => start,
            ResolveStrategy::PointLookup if event.x == 0.0 && event.y == 0.0 => None,
            ResolveStrategy::PointLookup => surface.cell_at(event.x, event.y),
            ResolveStrategy::EventTarget => event.target,
        }?;
        is_in_bounds(pos, surface.grid_size()).then_some(pos)
    }
}

/// Tries each strategy in order and returns the first in-bounds cell.
pub fn resolve_release_cell<S>(
    strategies: &[ResolveStrategy],
    start: Option<Position>,
    event: &PointerEvent,
    surface: &S,
) -> Option<Position>
where
    S: PointerSurface + ?Sized,
{
    strategies
        .iter()
        .find_map(|strategy| strategy.resolve(start, event, surface))
}
