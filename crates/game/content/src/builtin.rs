//! Puzzles compiled into the binary.

use wordsearch_core::{PuzzleConfig, PuzzleError};

const FAMILY_GRID: [&str; 10] = [
    "HTIUELIFGB",
    "EOAKNJLPRR",
    "FFUZICIZAO",
    "XMNZZVLONT",
    "LOTIHPZEDH",
    "SMRETSISME",
    "EKFLEVOPAR",
    "FSDADFBABY",
    "WHGRANDPAW",
    "KCOUSINWJW",
];

const FAMILY_WORDS: [&str; 10] = [
    "GRANDMA", "GRANDPA", "BROTHER", "SISTER", "COUSIN", "UNCLE", "AUNT", "BABY", "MOM", "DAD",
];

/// The default puzzle: ten family words in a 10x10 grid.
pub fn family_puzzle() -> Result<PuzzleConfig, PuzzleError> {
    let grid = FAMILY_GRID.iter().map(|row| row.to_string()).collect();
    let words = FAMILY_WORDS.iter().map(|word| word.to_string()).collect();
    PuzzleConfig::new("Family", "Find every member of the family.", grid, words)
}
