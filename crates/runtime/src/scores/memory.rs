use std::sync::RwLock;

use async_trait::async_trait;

use super::{
    LeaderboardEntry, Result, ScoreError, ScoreService, insert_entry, normalize_player_name,
    top_entries,
};

/// In-memory implementation of ScoreService
#[derive(Debug, Default)]
pub struct InMemoryScoreService {
    entries: RwLock<Vec<LeaderboardEntry>>,
}

impl InMemoryScoreService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<LeaderboardEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl ScoreService for InMemoryScoreService {
    async fn submit_score(
        &self,
        player_name: &str,
        time_ms: u64,
        time_display: &str,
    ) -> Result<usize> {
        let player_name = normalize_player_name(player_name)?;
        let mut entries = self.entries.write().map_err(|_| ScoreError::LockPoisoned)?;
        let rank = insert_entry(&mut entries, player_name, time_ms, time_display);
        tracing::debug!(time_ms, rank, "score recorded");
        Ok(rank)
    }

    async fn top_scores(&self, limit: usize) -> Result<Vec<LeaderboardEntry>> {
        let entries = self.entries.read().map_err(|_| ScoreError::LockPoisoned)?;
        Ok(top_entries(&entries, limit))
    }
}
