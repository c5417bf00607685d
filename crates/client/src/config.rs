//! Client configuration from environment variables and command-line flags.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::CliArgs;

/// Terminal host configuration.
///
/// Built from the environment first; command-line flags then override
/// individual values.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Puzzle file (`.ron` or `.toml`). The built-in puzzle when unset.
    pub puzzle_path: Option<PathBuf>,
    /// Game tuning file (TOML). Defaults when unset.
    pub game_config_path: Option<PathBuf>,
    /// Pointer script (RON). Solves the puzzle automatically when unset.
    pub script_path: Option<PathBuf>,
    /// Name recorded on the leaderboard. No score is submitted when unset.
    pub player_name: Option<String>,
    /// Leaderboard file. Defaults to the platform data directory.
    pub scores_path: Option<PathBuf>,
    /// Keep scores in memory only.
    pub ephemeral_scores: bool,
    /// Pixel width of one grid cell on the virtual surface.
    pub cell_size: f64,
    /// Pause between replayed pointer events.
    pub step_delay: Duration,
    /// Mirror logs to stderr in addition to the log file.
    pub log_to_stderr: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            puzzle_path: None,
            game_config_path: None,
            script_path: None,
            player_name: None,
            scores_path: None,
            ephemeral_scores: false,
            cell_size: Self::DEFAULT_CELL_SIZE,
            step_delay: Duration::from_millis(Self::DEFAULT_STEP_DELAY_MS),
            log_to_stderr: false,
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_CELL_SIZE: f64 = 40.0;
    pub const DEFAULT_STEP_DELAY_MS: u64 = 30;
    const MIN_CELL_SIZE: f64 = 16.0;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WORDSEARCH_PUZZLE` - Puzzle file path
    /// - `WORDSEARCH_CONFIG` - Game config TOML path
    /// - `WORDSEARCH_SCRIPT` - Pointer script RON path
    /// - `WORDSEARCH_PLAYER` - Leaderboard name
    /// - `WORDSEARCH_SCORES` - Leaderboard file path
    /// - `WORDSEARCH_CELL_SIZE` - Cell width in pixels (default: 40)
    /// - `WORDSEARCH_STEP_DELAY_MS` - Replay pacing (default: 30)
    /// - `WORDSEARCH_LOG_STDERR` - Also log to stderr (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.puzzle_path = read_env_path("WORDSEARCH_PUZZLE");
        config.game_config_path = read_env_path("WORDSEARCH_CONFIG");
        config.script_path = read_env_path("WORDSEARCH_SCRIPT");
        config.scores_path = read_env_path("WORDSEARCH_SCORES");
        config.player_name = env::var("WORDSEARCH_PLAYER")
            .ok()
            .filter(|name| !name.trim().is_empty());

        if let Some(size) = read_env::<f64>("WORDSEARCH_CELL_SIZE") {
            config.cell_size = size.max(Self::MIN_CELL_SIZE);
        }
        if let Some(ms) = read_env::<u64>("WORDSEARCH_STEP_DELAY_MS") {
            config.step_delay = Duration::from_millis(ms);
        }
        if let Some(enabled) = read_env_bool("WORDSEARCH_LOG_STDERR") {
            config.log_to_stderr = enabled;
        }

        config
    }

    /// Applies command-line flags on top of this configuration.
    pub fn with_overrides(mut self, args: &CliArgs) -> Self {
        if let Some(path) = &args.puzzle {
            self.puzzle_path = Some(path.clone());
        }
        if let Some(path) = &args.config {
            self.game_config_path = Some(path.clone());
        }
        if let Some(path) = &args.script {
            self.script_path = Some(path.clone());
        }
        if let Some(name) = &args.player {
            self.player_name = Some(name.clone());
        }
        if let Some(path) = &args.scores {
            self.scores_path = Some(path.clone());
        }
        if let Some(size) = args.cell_size {
            self.cell_size = size.max(Self::MIN_CELL_SIZE);
        }
        if let Some(ms) = args.step_delay_ms {
            self.step_delay = Duration::from_millis(ms);
        }
        self.ephemeral_scores |= args.ephemeral;
        self.log_to_stderr |= args.log_stderr;
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
