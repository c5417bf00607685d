//! Terminal host for the word-search game.
//!
//! The binary is the composition root: it reads configuration from the
//! environment and flags, installs logging, loads the puzzle, and drives a
//! [`runtime::Session`] from a pointer script while a frame interval keeps
//! the timer display current. Completed games are submitted to the
//! leaderboard.

pub mod app;
pub mod cli;
pub mod config;
pub mod dirs;
pub mod logging;
pub mod render;
pub mod script;

pub use cli::CliArgs;
pub use config::ClientConfig;
pub use render::TextRenderer;
pub use script::{PointerScript, ReplayEvent, ScriptStep};
