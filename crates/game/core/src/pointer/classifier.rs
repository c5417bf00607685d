//! Tap-vs-drag classification of raw pointer events.

use super::{
    InteractionKind, InteractionSink, PointerEvent, PointerSurface, ResolveStrategy,
    classify_interaction, resolve_release_cell,
};
use crate::config::{DragPathPolicy, GameConfig};
use crate::geometry::{
    Direction, Position, get_line_cells, is_in_bounds, project_to_grid_cell, snap_to_direction,
};
use crate::matching::MIN_MATCH_CELLS;

/// State of the single in-flight interaction.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerTracker {
    pub start_x: f64,
    pub start_y: f64,
    pub start_position: Position,
    /// Pointer travelled past the drag threshold at least once.
    pub has_moved: bool,
    /// Fixed when the drag is confirmed; `None` until then.
    pub locked_direction: Option<Direction>,
    pub cell_size: f64,
    /// A path of at least two cells was emitted during this interaction.
    pub has_emitted_drag_path: bool,
    last_over: Option<Position>,
}

/// Turns a stream of pointer events (down, move*, up | cancel) into tap and
/// drag notifications on an [`InteractionSink`].
///
/// At most one interaction is tracked at a time. Events that arrive without a
/// tracker are ignored.
#[derive(Clone, Debug)]
pub struct PointerClassifier {
    drag_threshold: f64,
    drag_policy: DragPathPolicy,
    resolvers: Vec<ResolveStrategy>,
    tracker: Option<PointerTracker>,
}

impl PointerClassifier {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            drag_threshold: config.drag_threshold,
            drag_policy: config.drag_policy,
            resolvers: ResolveStrategy::DEFAULT_ORDER.to_vec(),
            tracker: None,
        }
    }

    /// Replaces the release-cell fallback order.
    pub fn with_resolvers(mut self, resolvers: Vec<ResolveStrategy>) -> Self {
        self.resolvers = resolvers;
        self
    }

    pub fn drag_policy(&self) -> DragPathPolicy {
        self.drag_policy
    }

    pub fn tracker(&self) -> Option<&PointerTracker> {
        self.tracker.as_ref()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracker.is_some()
    }

    /// Drops any in-flight interaction without notifying anyone.
    pub fn reset(&mut self) {
        self.tracker = None;
    }

    /// Starts tracking if the pointer is over a grid cell.
    ///
    /// Emits `tap_start` immediately so the host can give feedback before the
    /// interaction is classified. Returns false (and tracks nothing) when no
    /// cell is under the pointer.
    pub fn pointer_down<S, K>(&mut self, event: &PointerEvent, surface: &S, sink: &mut K) -> bool
    where
        S: PointerSurface + ?Sized,
        K: InteractionSink + ?Sized,
    {
        let grid_size = surface.grid_size();
        let Some(pos) = event
            .target
            .filter(|pos| is_in_bounds(*pos, grid_size))
            .or_else(|| surface.cell_at(event.x, event.y))
        else {
            tracing::trace!(x = event.x, y = event.y, "pointer down outside the grid");
            return false;
        };

        self.tracker = Some(PointerTracker {
            start_x: event.x,
            start_y: event.y,
            start_position: pos,
            has_moved: false,
            locked_direction: None,
            cell_size: surface.cell_size(),
            has_emitted_drag_path: false,
            last_over: None,
        });

        sink.tap_start(pos);
        true
    }

    pub fn pointer_move<S, K>(&mut self, event: &PointerEvent, surface: &mut S, sink: &mut K)
    where
        S: PointerSurface + ?Sized,
        K: InteractionSink + ?Sized,
    {
        let Some(tracker) = self.tracker.as_mut() else {
            return;
        };

        let dx = event.x - tracker.start_x;
        let dy = event.y - tracker.start_y;
        let distance = dx.hypot(dy);

        if !tracker.has_moved && distance > self.drag_threshold {
            let direction = snap_to_direction(dx, dy);
            tracker.has_moved = true;
            tracker.locked_direction = Some(direction);

            if !surface.capture_pointer(event.pointer_id) {
                tracing::trace!(pointer = event.pointer_id, "pointer capture unavailable");
            }

            tracing::debug!(
                start = %tracker.start_position,
                d_row = direction.d_row,
                d_col = direction.d_col,
                "drag confirmed"
            );
            sink.drag_start(tracker.start_position);
        }

        let Some(direction) = tracker.locked_direction else {
            return;
        };

        match self.drag_policy {
            DragPathPolicy::Geometric => {
                let end = project_to_grid_cell(
                    tracker.start_position,
                    dx,
                    dy,
                    direction,
                    tracker.cell_size,
                    surface.grid_size(),
                );
                let path = get_line_cells(tracker.start_position, end);
                if path.is_empty() {
                    return;
                }
                tracing::trace!(end = %end, cells = path.len(), "drag path");
                sink.drag_move(&path);
                if path.len() >= MIN_MATCH_CELLS {
                    tracker.has_emitted_drag_path = true;
                }
            }
            DragPathPolicy::Incremental => {
                let Some(pos) = surface.cell_at(event.x, event.y) else {
                    return;
                };
                if tracker.last_over == Some(pos) {
                    return;
                }
                tracker.last_over = Some(pos);
                if sink.drag_over(pos) >= MIN_MATCH_CELLS {
                    tracker.has_emitted_drag_path = true;
                }
            }
        }
    }

    /// Classifies and ends the interaction. Returns the classification, or
    /// `None` when no interaction was in flight.
    pub fn pointer_up<S, K>(
        &mut self,
        event: &PointerEvent,
        surface: &S,
        sink: &mut K,
    ) -> Option<InteractionKind>
    where
        S: PointerSurface + ?Sized,
        K: InteractionSink + ?Sized,
    {
        let tracker = self.tracker.take()?;
        let kind = classify_interaction(tracker.has_moved, tracker.has_emitted_drag_path);
        tracing::debug!(
            %kind,
            has_moved = tracker.has_moved,
            has_emitted_drag_path = tracker.has_emitted_drag_path,
            "interaction ended"
        );

        match kind {
            InteractionKind::Tap => {
                match resolve_release_cell(
                    &self.resolvers,
                    Some(tracker.start_position),
                    event,
                    surface,
                ) {
                    Some(pos) => sink.tap_end(pos),
                    None => tracing::trace!("tap released with no resolvable cell"),
                }
            }
            InteractionKind::Drag => sink.drag_end(),
        }

        Some(kind)
    }

    /// Device-level cancel. Clears the tracker and emits `cancel`; never a
    /// commit.
    pub fn pointer_cancel<K>(&mut self, sink: &mut K)
    where
        K: InteractionSink + ?Sized,
    {
        if self.tracker.take().is_some() {
            tracing::debug!("interaction cancelled");
            sink.cancel();
        }
    }

    /// Pointer left the active surface. Same effect as a cancel.
    pub fn pointer_leave<K>(&mut self, sink: &mut K)
    where
        K: InteractionSink + ?Sized,
    {
        self.pointer_cancel(sink);
    }
}
