//! Conversion from raw pixel deltas to grid directions and cells.
//!
//! Pixel space uses `dx` growing to the right and `dy` growing downward, which
//! lines up with `d_col` and `d_row` respectively.

use super::{Direction, Position};

/// Slopes (`|dy / dx|`) strictly below this value snap to horizontal.
pub const SNAP_HORIZONTAL_MAX_SLOPE: f64 = 0.5;

/// Slopes (`|dy / dx|`) strictly above this value snap to vertical.
pub const SNAP_VERTICAL_MIN_SLOPE: f64 = 2.0;

fn axis_sign(value: f64) -> i32 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// Classifies a pixel delta into one of the eight directions.
///
/// The band between the two slope thresholds is wider than a symmetric 45°
/// split, so ambiguous drags lean towards the nearer cardinal direction before
/// committing to a diagonal. Both threshold values are load-bearing.
pub fn snap_to_direction(dx: f64, dy: f64) -> Direction {
    if dx == 0.0 {
        return Direction::new(axis_sign(dy), 0);
    }
    if dy == 0.0 {
        return Direction::new(0, axis_sign(dx));
    }

    let slope = (dy / dx).abs();
    if slope < SNAP_HORIZONTAL_MAX_SLOPE {
        Direction::new(0, axis_sign(dx))
    } else if slope > SNAP_VERTICAL_MIN_SLOPE {
        Direction::new(axis_sign(dy), 0)
    } else {
        Direction::new(axis_sign(dy), axis_sign(dx))
    }
}

/// Projects a pixel delta onto a locked direction and returns the grid cell
/// reached from `start`.
///
/// The delta is converted to cell units and dotted with the direction
/// (`cols * d_col + rows * d_row`), which stays continuous and sign-correct in
/// every quadrant for cardinal and diagonal directions alike. The step count is
/// rounded to the nearest integer and the result is clamped into the grid on
/// both axes.
pub fn project_to_grid_cell(
    start: Position,
    dx: f64,
    dy: f64,
    direction: Direction,
    cell_size: f64,
    grid_size: i32,
) -> Position {
    if direction.is_none() || cell_size <= 0.0 || grid_size <= 0 {
        return start;
    }

    let cols = dx / cell_size;
    let rows = dy / cell_size;
    let projection = cols * f64::from(direction.d_col) + rows * f64::from(direction.d_row);
    // No line is longer than the grid, so larger projections only clamp.
    let reach = f64::from(grid_size);
    let steps = projection.round().clamp(-reach, reach) as i32;

    let target = start.step(direction, steps);
    let max = grid_size - 1;
    Position::new(target.row.clamp(0, max), target.col.clamp(0, max))
}
