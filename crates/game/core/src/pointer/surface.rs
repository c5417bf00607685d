//! Host-side description of the surface the grid is drawn on.

use crate::geometry::{Position, is_in_bounds};

/// Pixel-to-cell mapping supplied by the host.
pub trait PointerSurface {
    /// Cell under the given pixel coordinates, if any.
    fn cell_at(&self, x: f64, y: f64) -> Option<Position>;

    /// Width of one cell in pixels.
    fn cell_size(&self) -> f64;

    /// Number of cells along each side of the grid.
    fn grid_size(&self) -> i32;

    /// Routes further events for this pointer to the surface.
    ///
    /// Best-effort: returns false when the platform has no pointer capture,
    /// and the interaction continues without it.
    fn capture_pointer(&mut self, _pointer_id: u32) -> bool {
        false
    }
}

/// Square grid drawn at a fixed pixel rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    pub origin_x: f64,
    pub origin_y: f64,
    /// Rendered width (and height) of the whole grid.
    pub width: f64,
    pub grid_size: i32,
}

impl GridLayout {
    pub fn new(origin_x: f64, origin_y: f64, width: f64, grid_size: i32) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            grid_size,
        }
    }

    /// Layout at the origin where every cell is `cell_size` pixels wide.
    pub fn with_cell_size(cell_size: f64, grid_size: i32) -> Self {
        Self::new(0.0, 0.0, cell_size * f64::from(grid_size), grid_size)
    }

    /// Pixel coordinates of the centre of `pos`.
    pub fn cell_center(&self, pos: Position) -> (f64, f64) {
        let cell = self.cell_size();
        (
            self.origin_x + (f64::from(pos.col) + 0.5) * cell,
            self.origin_y + (f64::from(pos.row) + 0.5) * cell,
        )
    }
}

impl PointerSurface for GridLayout {
    fn cell_at(&self, x: f64, y: f64) -> Option<Position> {
        let cell = self.cell_size();
        if cell <= 0.0 {
            return None;
        }
        let col = ((x - self.origin_x) / cell).floor();
        let row = ((y - self.origin_y) / cell).floor();
        if !row.is_finite() || !col.is_finite() {
            return None;
        }

        let pos = Position::new(row as i32, col as i32);
        is_in_bounds(pos, self.grid_size).then_some(pos)
    }

    fn cell_size(&self) -> f64 {
        if self.grid_size <= 0 {
            return 0.0;
        }
        self.width / f64::from(self.grid_size)
    }

    fn grid_size(&self) -> i32 {
        self.grid_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_pixels_to_cells() {
        let layout = GridLayout::new(100.0, 50.0, 400.0, 10);
        assert_eq!(layout.cell_size(), 40.0);
        assert_eq!(layout.cell_at(100.0, 50.0), Some(Position::new(0, 0)));
        assert_eq!(layout.cell_at(219.0, 171.0), Some(Position::new(3, 2)));
        assert_eq!(layout.cell_at(499.9, 449.9), Some(Position::new(9, 9)));
    }

    #[test]
    fn points_outside_the_grid_have_no_cell() {
        let layout = GridLayout::new(100.0, 50.0, 400.0, 10);
        assert_eq!(layout.cell_at(99.0, 60.0), None);
        assert_eq!(layout.cell_at(500.0, 60.0), None);
        assert_eq!(layout.cell_at(f64::NAN, 60.0), None);
    }

    #[test]
    fn cell_center_round_trips() {
        let layout = GridLayout::with_cell_size(32.0, 8);
        let pos = Position::new(5, 2);
        let (x, y) = layout.cell_center(pos);
        assert_eq!(layout.cell_at(x, y), Some(pos));
    }
}
