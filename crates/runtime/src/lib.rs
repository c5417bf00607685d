//! Session orchestration for word-search hosts.
//!
//! This crate wires the pure rules from `wordsearch-core` into a playable
//! game. Hosts embed a [`Session`], feed it pointer events, and receive
//! output through a [`RenderSink`].
//!
//! Modules are organized by responsibility:
//! - [`session`] owns all mutable state for one game
//! - [`sink`] defines the rendering contract and test sinks
//! - [`view`] builds per-cell snapshots for renderers
//! - [`scores`] stores finishing times behind an async service trait
pub mod scores;
pub mod session;
pub mod sink;
pub mod view;

pub use scores::{
    FileScoreService, InMemoryScoreService, LeaderboardEntry, Result, ScoreError, ScoreService,
};
pub use session::Session;
pub use sink::{NullSink, RecordingSink, RenderSink, SinkEvent};
pub use view::{CellState, cell_states};
