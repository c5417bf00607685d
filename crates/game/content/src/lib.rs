//! Puzzle content and loaders.
//!
//! This crate houses the built-in puzzle and provides loaders for data files:
//! - Puzzles (RON or TOML, chosen by file extension)
//! - Game configuration (TOML)
//!
//! All loaders deserialize straight into wordsearch-core types, so a puzzle
//! that loads has already passed grid and word-list validation.

pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builtin::family_puzzle;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, PuzzleFormat, PuzzleLoader};
