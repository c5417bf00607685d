//! Deterministic word-search logic shared across hosts.
//!
//! `wordsearch-core` turns raw pointer coordinates into straight grid lines,
//! tracks the in-progress selection, and matches committed paths against the
//! puzzle's word list. It performs no I/O: rendering, timing, and scoring are
//! reached through plain data and the traits re-exported here.
pub mod config;
pub mod error;
pub mod geometry;
pub mod matching;
pub mod pointer;
pub mod puzzle;
pub mod selection;
pub mod state;
pub mod timer;

pub use config::{DragPathPolicy, GameConfig};
pub use error::{ErrorSeverity, GameError};
pub use geometry::{Direction, Position};
pub use matching::{MIN_MATCH_CELLS, MatchResult, format_word_for_display, try_match};
pub use pointer::{
    GridLayout, InteractionKind, InteractionSink, PointerClassifier, PointerEvent, PointerSurface,
    ResolveStrategy,
};
pub use puzzle::{PuzzleConfig, PuzzleData, PuzzleError};
pub use selection::{SelectionMode, SelectionState, TapOutcome};
pub use state::{GamePhase, GameState};
pub use timer::{Clock, ManualClock, PrecisionTimer, SystemClock, format_time};
