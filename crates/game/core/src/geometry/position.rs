use std::fmt;

/// Discrete grid position expressed in zero-based, row-major cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the position reached by taking `steps` steps along `direction`.
    #[inline]
    pub const fn step(self, direction: Direction, steps: i32) -> Self {
        Self {
            row: self.row.saturating_add(direction.d_row.saturating_mul(steps)),
            col: self.col.saturating_add(direction.d_col.saturating_mul(steps)),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Per-axis step between grid cells.
///
/// Each component is one of `-1`, `0`, `1`. The zero vector is only used as the
/// explicit [`Direction::NONE`] sentinel; every direction derived from a
/// nonzero delta has at least one nonzero component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Direction {
    pub d_row: i32,
    pub d_col: i32,
}

impl Direction {
    pub const NONE: Self = Self::new(0, 0);
    pub const UP: Self = Self::new(-1, 0);
    pub const DOWN: Self = Self::new(1, 0);
    pub const LEFT: Self = Self::new(0, -1);
    pub const RIGHT: Self = Self::new(0, 1);
    pub const UP_LEFT: Self = Self::new(-1, -1);
    pub const UP_RIGHT: Self = Self::new(-1, 1);
    pub const DOWN_LEFT: Self = Self::new(1, -1);
    pub const DOWN_RIGHT: Self = Self::new(1, 1);

    /// The eight selectable directions (the zero sentinel excluded).
    pub const ALL: [Direction; 8] = [
        Direction::RIGHT,
        Direction::DOWN_RIGHT,
        Direction::DOWN,
        Direction::DOWN_LEFT,
        Direction::LEFT,
        Direction::UP_LEFT,
        Direction::UP,
        Direction::UP_RIGHT,
    ];

    pub const fn new(d_row: i32, d_col: i32) -> Self {
        Self { d_row, d_col }
    }

    /// Builds a direction from the sign of each axis of a delta.
    pub const fn from_delta(d_row: i32, d_col: i32) -> Self {
        Self {
            d_row: d_row.signum(),
            d_col: d_col.signum(),
        }
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.d_row == 0 && self.d_col == 0
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.d_row != 0 && self.d_col != 0
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_along_direction() {
        let origin = Position::new(5, 5);
        assert_eq!(origin.step(Direction::DOWN_RIGHT, 3), Position::new(8, 8));
        assert_eq!(origin.step(Direction::UP, 2), Position::new(3, 5));
        assert_eq!(origin.step(Direction::LEFT, -1), Position::new(5, 6));
    }

    #[test]
    fn step_saturates_instead_of_overflowing() {
        let origin = Position::new(5, 5);
        assert_eq!(
            origin.step(Direction::DOWN_RIGHT, i32::MAX),
            Position::new(i32::MAX, i32::MAX)
        );
        assert_eq!(origin.step(Direction::LEFT, i32::MAX).col, -(i32::MAX - 5));
    }

    #[test]
    fn from_delta_takes_signs_independently() {
        assert_eq!(Direction::from_delta(4, -7), Direction::DOWN_LEFT);
        assert_eq!(Direction::from_delta(0, 3), Direction::RIGHT);
        assert_eq!(Direction::from_delta(0, 0), Direction::NONE);
        assert!(Direction::ALL.iter().all(|d| !d.is_none()));
    }
}
