//! Static puzzle definition: a square letter grid and its target words.

use std::collections::HashSet;

use crate::error::{ErrorSeverity, GameError};
use crate::geometry::Position;
use crate::matching;

/// Errors raised while validating puzzle data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PuzzleError {
    #[error("puzzle grid has no rows")]
    EmptyGrid,

    #[error("grid row {row} has {found} letters, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid must be square (rows: {rows}, columns: {cols})")]
    NotSquare { rows: usize, cols: usize },

    #[error("puzzle has no target words")]
    NoWords,

    #[error("target word #{index} is empty")]
    EmptyWord { index: usize },

    #[error("target word {word:?} is listed more than once")]
    DuplicateWord { word: String },

    #[error("target word {word:?} cannot be traced anywhere in the grid")]
    UnplaceableWord { word: String },
}

impl GameError for PuzzleError {
    fn severity(&self) -> ErrorSeverity {
        use PuzzleError::*;
        match self {
            // The puzzle still plays; the word just can never be found.
            UnplaceableWord { .. } => ErrorSeverity::Recoverable,

            EmptyGrid
            | RaggedRow { .. }
            | NotSquare { .. }
            | NoWords
            | EmptyWord { .. }
            | DuplicateWord { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use PuzzleError::*;
        match self {
            EmptyGrid => "PUZZLE_EMPTY_GRID",
            RaggedRow { .. } => "PUZZLE_RAGGED_ROW",
            NotSquare { .. } => "PUZZLE_NOT_SQUARE",
            NoWords => "PUZZLE_NO_WORDS",
            EmptyWord { .. } => "PUZZLE_EMPTY_WORD",
            DuplicateWord { .. } => "PUZZLE_DUPLICATE_WORD",
            UnplaceableWord { .. } => "PUZZLE_UNPLACEABLE_WORD",
        }
    }
}

/// Unvalidated puzzle fields, as read from a puzzle file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PuzzleData {
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub grid: Vec<String>,
    pub words: Vec<String>,
}

/// Validated, immutable puzzle configuration for one session.
///
/// The grid is square; [`PuzzleConfig::grid_size`] is both the row count and
/// the letter count of every row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PuzzleData", into = "PuzzleData")
)]
pub struct PuzzleConfig {
    title: String,
    description: String,
    grid: Vec<String>,
    words: Vec<String>,
    grid_size: i32,
}

impl PuzzleConfig {
    /// Validates the grid shape and word list.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        grid: Vec<String>,
        words: Vec<String>,
    ) -> Result<Self, PuzzleError> {
        let rows = grid.len();
        if rows == 0 {
            return Err(PuzzleError::EmptyGrid);
        }

        let expected = grid[0].chars().count();
        for (row, letters) in grid.iter().enumerate() {
            let found = letters.chars().count();
            if found != expected {
                return Err(PuzzleError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }
        }
        if expected != rows {
            return Err(PuzzleError::NotSquare {
                rows,
                cols: expected,
            });
        }

        if words.is_empty() {
            return Err(PuzzleError::NoWords);
        }
        let mut seen = HashSet::with_capacity(words.len());
        for (index, word) in words.iter().enumerate() {
            if word.is_empty() {
                return Err(PuzzleError::EmptyWord { index });
            }
            if !seen.insert(word.as_str()) {
                return Err(PuzzleError::DuplicateWord { word: word.clone() });
            }
        }

        Ok(Self {
            title: title.into(),
            description: description.into(),
            grid,
            words,
            grid_size: rows as i32,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Letter rows, top to bottom.
    pub fn grid(&self) -> &[String] {
        &self.grid
    }

    /// Target words in their canonical spelling.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    pub fn total_words(&self) -> usize {
        self.words.len()
    }

    pub fn letter_at(&self, pos: Position) -> Option<char> {
        matching::letter_at(&self.grid, pos)
    }

    /// Target words that cannot be traced along any straight line.
    ///
    /// These are [`ErrorSeverity::Recoverable`]: the puzzle loads but can
    /// never be completed.
    pub fn unplaceable_words(&self) -> Vec<PuzzleError> {
        self.words
            .iter()
            .filter(|word| matching::locate_word(&self.grid, word).is_none())
            .map(|word| PuzzleError::UnplaceableWord { word: word.clone() })
            .collect()
    }
}

impl TryFrom<PuzzleData> for PuzzleConfig {
    type Error = PuzzleError;

    fn try_from(data: PuzzleData) -> Result<Self, Self::Error> {
        Self::new(data.title, data.description, data.grid, data.words)
    }
}

impl From<PuzzleConfig> for PuzzleData {
    fn from(config: PuzzleConfig) -> Self {
        Self {
            title: config.title,
            description: config.description,
            grid: config.grid,
            words: config.words,
        }
    }
}
