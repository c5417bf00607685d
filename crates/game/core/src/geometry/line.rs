//! Straight-line rules over grid cells.

use super::{Direction, Position};

/// Returns true if `start` and `end` form a selectable line: horizontal,
/// vertical, or a 45° diagonal. A single cell is not a line.
pub fn is_valid_line(start: Position, end: Position) -> bool {
    let d_row = (end.row - start.row).abs();
    let d_col = (end.col - start.col).abs();

    if d_row == 0 && d_col == 0 {
        return false;
    }

    d_row == 0 || d_col == 0 || d_row == d_col
}

/// Per-axis sign of the delta from `start` to `end`.
///
/// The result is not normalized to a unit diagonal; each axis is computed
/// independently, so it's always one of the nine sign combinations.
pub fn get_direction(start: Position, end: Position) -> Direction {
    Direction::from_delta(end.row - start.row, end.col - start.col)
}

pub fn is_same_direction(a: Direction, b: Direction) -> bool {
    a == b
}

/// Every cell from `start` to `end` inclusive, or an empty vector when the
/// pair is not a valid line.
pub fn get_line_cells(start: Position, end: Position) -> Vec<Position> {
    if !is_valid_line(start, end) {
        return Vec::new();
    }

    let direction = get_direction(start, end);
    let length = (end.row - start.row)
        .abs()
        .max((end.col - start.col).abs())
        + 1;

    (0..length).map(|i| start.step(direction, i)).collect()
}

/// 8-neighborhood adjacency; a cell is not adjacent to itself.
pub fn is_adjacent(a: Position, b: Position) -> bool {
    let d_row = (a.row - b.row).abs();
    let d_col = (a.col - b.col).abs();
    d_row <= 1 && d_col <= 1 && !(d_row == 0 && d_col == 0)
}

pub fn is_in_bounds(pos: Position, grid_size: i32) -> bool {
    pos.row >= 0 && pos.row < grid_size && pos.col >= 0 && pos.col < grid_size
}

pub fn positions_equal(a: Position, b: Position) -> bool {
    a == b
}

/// Index of the first occurrence of `pos` in `path`.
pub fn find_position_in_path(path: &[Position], pos: Position) -> Option<usize> {
    path.iter().position(|p| positions_equal(*p, pos))
}
