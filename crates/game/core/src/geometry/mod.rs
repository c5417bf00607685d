//! Pure, stateless functions over grid positions and directions.
//!
//! Everything here returns sentinel or empty results for invalid input rather
//! than failing: an empty cell list for a non-line, `None` for a missing path
//! entry, the start cell for a zero direction.
mod line;
mod position;
mod snap;

pub use line::{
    find_position_in_path, get_direction, get_line_cells, is_adjacent, is_in_bounds,
    is_same_direction, is_valid_line, positions_equal,
};
pub use position::{Direction, Position};
pub use snap::{
    SNAP_HORIZONTAL_MAX_SLOPE, SNAP_VERTICAL_MIN_SLOPE, project_to_grid_cell, snap_to_direction,
};
