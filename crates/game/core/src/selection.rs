//! In-progress selection tracking.
//!
//! A [`SelectionState`] is either empty (`is_active == false`) or anchored on a
//! start cell with a path of at least one cell. It is reset after every
//! commit or cancellation; there is never more than one selection at a time.

use crate::geometry::{
    Position, find_position_in_path, get_direction, is_adjacent, is_same_direction,
    positions_equal,
};
use crate::matching::MIN_MATCH_CELLS;

/// How the current selection was started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionMode {
    #[default]
    Tap,
    Drag,
}

/// Result of feeding a tap into the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// No selection was active; the tapped cell is now the anchor.
    Anchored,
    /// The anchor itself was tapped again; the selection was cleared.
    Cancelled,
    /// The path is now `[anchor, tapped]` and should be checked.
    Commit,
}

impl TapOutcome {
    pub const fn should_check(self) -> bool {
        matches!(self, TapOutcome::Commit)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionState {
    is_active: bool,
    start_position: Option<Position>,
    current_path: Vec<Position>,
    mode: SelectionMode,
}

impl SelectionState {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh single-cell selection, discarding any previous one.
    pub fn start_selection(pos: Position, mode: SelectionMode) -> Self {
        Self {
            is_active: true,
            start_position: Some(pos),
            current_path: vec![pos],
            mode,
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn start_position(&self) -> Option<Position> {
        self.start_position
    }

    pub fn current_path(&self) -> &[Position] {
        &self.current_path
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn clear_selection(&mut self) {
        *self = Self::new();
    }

    /// Two-tap selection: the first tap anchors, tapping the anchor again
    /// cancels, and any other cell completes a two-point path.
    ///
    /// The committed path is `[start, pos]` and may not be a valid line; the
    /// caller checks it with [`is_valid_line`](crate::geometry::is_valid_line)
    /// before expanding it for matching.
    pub fn handle_tap_selection(&mut self, pos: Position) -> TapOutcome {
        let start = match self.start_position {
            Some(start) if self.is_active => start,
            _ => {
                *self = Self::start_selection(pos, SelectionMode::Tap);
                return TapOutcome::Anchored;
            }
        };

        if positions_equal(start, pos) {
            self.clear_selection();
            return TapOutcome::Cancelled;
        }

        self.current_path = vec![start, pos];
        TapOutcome::Commit
    }

    /// Geometric drag policy: the path is computed elsewhere and replaces the
    /// current one wholesale.
    pub fn replace_path(&mut self, path: &[Position]) {
        if !self.is_active {
            return;
        }
        self.current_path = path.to_vec();
    }

    /// Incremental drag policy: extends or walks back the path by one cell.
    ///
    /// Returns true if the path changed. Revisiting a cell truncates the path
    /// back to it. A new cell must be 8-adjacent to the last one and, once the
    /// path has two cells, continue in the direction established by them.
    pub fn handle_drag_move(&mut self, pos: Position) -> bool {
        if !self.is_active {
            return false;
        }

        if let Some(index) = find_position_in_path(&self.current_path, pos) {
            let before = self.current_path.len();
            self.current_path.truncate(index + 1);
            return self.current_path.len() != before;
        }

        let Some(&last) = self.current_path.last() else {
            self.current_path.push(pos);
            return true;
        };

        if !is_adjacent(last, pos) {
            return false;
        }

        if let [first, second, ..] = self.current_path[..] {
            let established = get_direction(first, second);
            if !is_same_direction(established, get_direction(last, pos)) {
                return false;
            }
        }

        self.current_path.push(pos);
        true
    }

    /// True when the path is long enough to be checked. Does not mutate.
    pub fn complete_drag_selection(&self) -> bool {
        self.current_path.len() >= MIN_MATCH_CELLS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn start_always_resets_to_single_cell() {
        let mut state = SelectionState::start_selection(p(0, 0), SelectionMode::Drag);
        state.replace_path(&[p(0, 0), p(0, 1), p(0, 2)]);

        let state = SelectionState::start_selection(p(3, 3), SelectionMode::Tap);
        assert!(state.is_active());
        assert_eq!(state.start_position(), Some(p(3, 3)));
        assert_eq!(state.current_path(), &[p(3, 3)]);
        assert_eq!(state.mode(), SelectionMode::Tap);
    }

    #[test]
    fn first_tap_anchors() {
        let mut state = SelectionState::new();
        assert_eq!(state.handle_tap_selection(p(1, 1)), TapOutcome::Anchored);
        assert!(state.is_active());
        assert_eq!(state.current_path(), &[p(1, 1)]);
    }

    #[test]
    fn tapping_anchor_again_cancels() {
        let mut state = SelectionState::new();
        state.handle_tap_selection(p(2, 2));
        let outcome = state.handle_tap_selection(p(2, 2));
        assert_eq!(outcome, TapOutcome::Cancelled);
        assert!(!outcome.should_check());
        assert_eq!(state, SelectionState::new());
    }

    #[test]
    fn second_tap_commits_two_point_path() {
        let mut state = SelectionState::new();
        state.handle_tap_selection(p(0, 0));
        let outcome = state.handle_tap_selection(p(0, 4));
        assert!(outcome.should_check());
        assert_eq!(state.current_path(), &[p(0, 0), p(0, 4)]);
    }

    #[test]
    fn replace_path_requires_active_selection() {
        let mut state = SelectionState::new();
        state.replace_path(&[p(0, 0), p(0, 1)]);
        assert!(state.current_path().is_empty());

        let mut state = SelectionState::start_selection(p(0, 0), SelectionMode::Drag);
        state.replace_path(&[p(0, 0), p(1, 1), p(2, 2)]);
        assert_eq!(state.current_path(), &[p(0, 0), p(1, 1), p(2, 2)]);
    }

    #[test]
    fn incremental_drag_extends_collinear_adjacent_cells() {
        let mut state = SelectionState::start_selection(p(0, 0), SelectionMode::Drag);
        assert!(state.handle_drag_move(p(1, 1)));
        assert!(state.handle_drag_move(p(2, 2)));
        assert_eq!(state.current_path(), &[p(0, 0), p(1, 1), p(2, 2)]);
    }

    #[test]
    fn incremental_drag_rejects_gaps_and_turns() {
        let mut state = SelectionState::start_selection(p(0, 0), SelectionMode::Drag);
        assert!(!state.handle_drag_move(p(0, 2)));
        assert!(state.handle_drag_move(p(0, 1)));
        assert!(!state.handle_drag_move(p(1, 2)));
        assert!(!state.handle_drag_move(p(1, 1)));
        assert_eq!(state.current_path(), &[p(0, 0), p(0, 1)]);
    }

    #[test]
    fn incremental_drag_backtracks_over_visited_cells() {
        let mut state = SelectionState::start_selection(p(2, 0), SelectionMode::Drag);
        for col in 1..=4 {
            state.handle_drag_move(p(2, col));
        }
        assert_eq!(state.current_path().len(), 5);

        assert!(state.handle_drag_move(p(2, 2)));
        assert_eq!(state.current_path(), &[p(2, 0), p(2, 1), p(2, 2)]);

        // Back onto the anchor, then a new direction is allowed.
        assert!(state.handle_drag_move(p(2, 0)));
        assert!(state.handle_drag_move(p(1, 0)));
        assert_eq!(state.current_path(), &[p(2, 0), p(1, 0)]);
    }

    #[test]
    fn incremental_drag_ignored_when_inactive() {
        let mut state = SelectionState::new();
        assert!(!state.handle_drag_move(p(0, 0)));
        assert!(state.current_path().is_empty());
    }

    #[test]
    fn complete_drag_needs_two_cells() {
        let mut state = SelectionState::start_selection(p(0, 0), SelectionMode::Drag);
        assert!(!state.complete_drag_selection());
        state.handle_drag_move(p(0, 1));
        assert!(state.complete_drag_selection());
        assert_eq!(state.current_path().len(), 2);
    }
}
