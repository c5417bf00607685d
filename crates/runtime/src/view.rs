//! Per-cell view model for renderers.

use std::collections::HashSet;

use serde::Serialize;
use wordsearch_core::{Position, SelectionState, matching};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellState {
    pub letter: char,
    pub position: Position,
    /// Highlighted as part of the live selection. Found cells never are.
    pub is_active: bool,
    pub is_found: bool,
    pub is_in_current_path: bool,
}

/// Snapshot of every cell, row by row.
pub fn cell_states(
    grid: &[String],
    selection: &SelectionState,
    found_cells: &HashSet<Position>,
) -> Vec<Vec<CellState>> {
    let path: HashSet<Position> = selection.current_path().iter().copied().collect();

    (0..grid.len())
        .map(|row| {
            let width = grid[row].chars().count();
            (0..width)
                .filter_map(|col| {
                    let position = Position::new(row as i32, col as i32);
                    let letter = matching::letter_at(grid, position)?;
                    let is_found = found_cells.contains(&position);
                    let is_in_current_path = path.contains(&position);
                    Some(CellState {
                        letter,
                        position,
                        is_active: is_in_current_path && !is_found,
                        is_found,
                        is_in_current_path,
                    })
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordsearch_core::SelectionMode;

    #[test]
    fn flags_follow_selection_and_found_cells() {
        let grid = vec!["MOM".to_string(), "AXA".to_string(), "DAD".to_string()];
        let mut selection =
            SelectionState::start_selection(Position::new(0, 0), SelectionMode::Drag);
        selection.replace_path(&[Position::new(0, 0), Position::new(1, 0)]);
        let found: HashSet<_> = [Position::new(0, 0), Position::new(0, 1)].into();

        let view = cell_states(&grid, &selection, &found);
        assert_eq!(view.len(), 3);
        assert_eq!(view[2][1].letter, 'A');

        let corner = &view[0][0];
        assert!(corner.is_found && corner.is_in_current_path && !corner.is_active);

        let below = &view[1][0];
        assert!(below.is_active && !below.is_found);

        assert!(!view[2][2].is_in_current_path);
    }
}
