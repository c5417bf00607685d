//! Puzzle file loader.
//!
//! Puzzles are stored as RON or TOML with the same fields:
//!
//! ```ron
//! (
//!     title: "Family",
//!     description: "Find every member of the family.",
//!     grid: ["MOM", "AXA", "DAD"],
//!     words: ["MOM", "DAD"],
//! )
//! ```

use std::path::Path;

use anyhow::Context;
use wordsearch_core::PuzzleConfig;

use crate::loaders::{LoadResult, read_file};

/// On-disk puzzle encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PuzzleFormat {
    Ron,
    Toml,
}

impl PuzzleFormat {
    /// Picks a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("ron") {
            Some(Self::Ron)
        } else if ext.eq_ignore_ascii_case("toml") {
            Some(Self::Toml)
        } else {
            None
        }
    }
}

/// Loader for puzzles from RON or TOML files.
pub struct PuzzleLoader;

impl PuzzleLoader {
    /// Load and validate a puzzle, choosing the format by extension.
    ///
    /// Words that cannot be traced in the grid are logged but do not fail the
    /// load; the game is still playable, just not completable.
    pub fn load(path: &Path) -> LoadResult<PuzzleConfig> {
        let format = PuzzleFormat::from_path(path).with_context(|| {
            format!(
                "Unsupported puzzle file {} (expected .ron or .toml)",
                path.display()
            )
        })?;

        let content = read_file(path)?;
        let puzzle = Self::parse(&content, format)
            .with_context(|| format!("Invalid puzzle file {}", path.display()))?;

        for problem in puzzle.unplaceable_words() {
            tracing::warn!(path = %path.display(), %problem, "puzzle cannot be completed");
        }
        tracing::debug!(
            title = puzzle.title(),
            grid_size = puzzle.grid_size(),
            words = puzzle.total_words(),
            "loaded puzzle"
        );

        Ok(puzzle)
    }

    pub fn parse(content: &str, format: PuzzleFormat) -> LoadResult<PuzzleConfig> {
        let puzzle = match format {
            PuzzleFormat::Ron => ron::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse puzzle RON: {}", e))?,
            PuzzleFormat::Toml => toml::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse puzzle TOML: {}", e))?,
        };
        Ok(puzzle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const RON_PUZZLE: &str = r#"(
        title: "Tiny",
        grid: ["MOM", "AXA", "DAD"],
        words: ["MOM", "DAD"],
    )"#;

    const TOML_PUZZLE: &str = r#"
        title = "Tiny"
        description = "Two words"
        grid = ["MOM", "AXA", "DAD"]
        words = ["MOM", "DAD"]
    "#;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            PuzzleFormat::from_path(Path::new("a/b.RON")),
            Some(PuzzleFormat::Ron)
        );
        assert_eq!(
            PuzzleFormat::from_path(Path::new("p.toml")),
            Some(PuzzleFormat::Toml)
        );
        assert_eq!(PuzzleFormat::from_path(Path::new("p.json")), None);
        assert_eq!(PuzzleFormat::from_path(Path::new("puzzle")), None);
    }

    #[test]
    fn loads_ron_and_toml_alike() {
        let ron = write_temp(".ron", RON_PUZZLE);
        let toml = write_temp(".toml", TOML_PUZZLE);

        let a = PuzzleLoader::load(ron.path()).unwrap();
        let b = PuzzleLoader::load(toml.path()).unwrap();

        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.words(), b.words());
        assert_eq!(a.title(), "Tiny");
        assert_eq!(a.description(), "");
        assert_eq!(b.description(), "Two words");
        assert_eq!(a.grid_size(), 3);
    }

    #[test]
    fn invalid_puzzles_fail_validation() {
        let ragged = r#"(grid: ["MOM", "AX", "DAD"], words: ["MOM"])"#;
        let err = PuzzleLoader::parse(ragged, PuzzleFormat::Ron).unwrap_err();
        assert!(err.to_string().contains("Failed to parse puzzle RON"));

        let file = write_temp(".toml", "grid = [\"AB\", \"CD\"]\nwords = []\n");
        let err = PuzzleLoader::load(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid puzzle file"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = write_temp(".json", RON_PUZZLE);
        let err = PuzzleLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Unsupported puzzle file"));
    }

    #[test]
    fn unplaceable_words_still_load() {
        let content = r#"(grid: ["MOM", "AXA", "DAD"], words: ["MOM", "CAT"])"#;
        let file = write_temp(".ron", content);
        let puzzle = PuzzleLoader::load(file.path()).unwrap();
        assert_eq!(puzzle.unplaceable_words().len(), 1);
    }
}
