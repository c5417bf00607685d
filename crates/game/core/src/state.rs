//! Game lifecycle and progress.

use std::collections::HashSet;
use std::time::Duration;

/// Lifecycle phase. Only moves forward, except through [`GameState::reset`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    #[default]
    Start,
    Playing,
    Complete,
}

/// Progress of one game.
///
/// Times are offsets read from the session clock, so the state itself never
/// touches the system time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    phase: GamePhase,
    found_words: HashSet<String>,
    start_time: Option<Duration>,
    end_time: Option<Duration>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn found_words(&self) -> &HashSet<String> {
        &self.found_words
    }

    pub fn found_count(&self) -> usize {
        self.found_words.len()
    }

    pub fn is_found(&self, word: &str) -> bool {
        self.found_words.contains(word)
    }

    pub fn start_time(&self) -> Option<Duration> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<Duration> {
        self.end_time
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_complete(&self) -> bool {
        self.phase == GamePhase::Complete
    }

    /// Enters `Playing` with no words found. Ignored once the game has left
    /// `Start`.
    pub fn start(&mut self, now: Duration) {
        if self.phase != GamePhase::Start {
            return;
        }
        self.phase = GamePhase::Playing;
        self.found_words.clear();
        self.start_time = Some(now);
        self.end_time = None;
    }

    /// Records `word` as found and enters `Complete` once `total` distinct
    /// words have been found.
    ///
    /// Returns true if the word was newly recorded. Only counts while
    /// playing.
    pub fn mark_word_found(&mut self, word: &str, total: usize, now: Duration) -> bool {
        if !self.is_playing() {
            return false;
        }

        let inserted = self.found_words.insert(word.to_owned());
        if self.found_words.len() >= total {
            self.phase = GamePhase::Complete;
            if self.end_time.is_none() {
                self.end_time = Some(now);
            }
        }
        inserted
    }

    /// Back to `Start` with no progress.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Time played so far, frozen at the end time once complete. Zero before
    /// the game starts.
    pub fn elapsed(&self, now: Duration) -> Duration {
        let Some(start) = self.start_time else {
            return Duration::ZERO;
        };
        self.end_time.unwrap_or(now).saturating_sub(start)
    }
}
