//! Word extraction and matching against the target list.

use std::collections::HashSet;

use crate::geometry::{Direction, Position};

/// Paths shorter than this never match a word.
pub const MIN_MATCH_CELLS: usize = 2;

/// Outcome of a commit attempt. Ephemeral; not retained by the game state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    pub matched: bool,
    pub word: Option<String>,
    pub cells: Vec<Position>,
}

impl MatchResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn found(word: impl Into<String>, cells: Vec<Position>) -> Self {
        Self {
            matched: true,
            word: Some(word.into()),
            cells,
        }
    }
}

/// Letter at `pos`, looked up by row then by column.
pub fn letter_at(grid: &[String], pos: Position) -> Option<char> {
    let row = usize::try_from(pos.row).ok()?;
    let col = usize::try_from(pos.col).ok()?;
    grid.get(row)?.chars().nth(col)
}

/// Concatenates the letters under `cells`. Out-of-range cells contribute
/// nothing.
pub fn extract_word(grid: &[String], cells: &[Position]) -> String {
    cells.iter().filter_map(|pos| letter_at(grid, *pos)).collect()
}

/// Returns the first target equal to `candidate` read forward or backward.
///
/// The returned word is the target's canonical spelling.
pub fn match_word<'a>(candidate: &str, target_words: &'a [String]) -> Option<&'a str> {
    let reversed: String = candidate.chars().rev().collect();
    target_words
        .iter()
        .find(|word| **word == candidate || **word == reversed)
        .map(String::as_str)
}

/// Checks a selection path against the word list.
///
/// Paths shorter than [`MIN_MATCH_CELLS`] and words already in `found_words`
/// are reported as unmatched, so completed words are never scored twice.
pub fn try_match(
    grid: &[String],
    cells: &[Position],
    target_words: &[String],
    found_words: &HashSet<String>,
) -> MatchResult {
    if cells.len() < MIN_MATCH_CELLS {
        return MatchResult::none();
    }

    let candidate = extract_word(grid, cells);
    match match_word(&candidate, target_words) {
        Some(word) if !found_words.contains(word) => MatchResult::found(word, cells.to_vec()),
        _ => MatchResult::none(),
    }
}

/// Upper-cases the first character and lower-cases the rest.
pub fn format_word_for_display(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Finds the first straight-line placement of `word` in the grid.
///
/// Cells are scanned row-major and directions in [`Direction::ALL`] order.
/// Returns the start and end cells of the placement.
pub fn locate_word(grid: &[String], word: &str) -> Option<(Position, Position)> {
    let letters: Vec<char> = word.chars().collect();
    if letters.len() < MIN_MATCH_CELLS {
        return None;
    }
    let last = letters.len() as i32 - 1;

    for (row, line) in grid.iter().enumerate() {
        for col in 0..line.chars().count() {
            let start = Position::new(row as i32, col as i32);
            for direction in Direction::ALL {
                let traced = letters
                    .iter()
                    .enumerate()
                    .all(|(i, ch)| letter_at(grid, start.step(direction, i as i32)) == Some(*ch));
                if traced {
                    return Some((start, start.step(direction, last)));
                }
            }
        }
    }

    None
}
