//! Leaderboard storage for completed games.
//!
//! A [`ScoreService`] accepts finishing times and reports where they rank.
//! Rank is one plus the number of strictly faster entries, so tied times
//! share a rank.

mod error;
mod file;
mod memory;

pub use error::{Result, ScoreError};
pub use file::FileScoreService;
pub use memory::InMemoryScoreService;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest accepted player name, in characters, after trimming.
pub const MAX_PLAYER_NAME_LEN: usize = 24;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: u64,
    pub player_name: String,
    pub time_ms: u64,
    /// Time as displayed at completion (`MM:SS.CC`).
    pub time_display: String,
    pub created_at: DateTime<Utc>,
}

/// Storage for finishing times.
#[async_trait]
pub trait ScoreService: Send + Sync {
    /// Records a score and returns its 1-based rank among all entries.
    async fn submit_score(
        &self,
        player_name: &str,
        time_ms: u64,
        time_display: &str,
    ) -> Result<usize>;

    /// Fastest `limit` entries, fastest first; ties keep submission order.
    async fn top_scores(&self, limit: usize) -> Result<Vec<LeaderboardEntry>>;
}

/// Trims the name and checks it is non-empty and short enough.
pub fn normalize_player_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ScoreError::InvalidName("name is empty"));
    }
    if name.chars().count() > MAX_PLAYER_NAME_LEN {
        return Err(ScoreError::InvalidName("name is longer than 24 characters"));
    }
    Ok(name.to_owned())
}

/// Appends a new entry and returns its rank.
fn insert_entry(
    entries: &mut Vec<LeaderboardEntry>,
    player_name: String,
    time_ms: u64,
    time_display: &str,
) -> usize {
    let id = entries.iter().map(|entry| entry.id).max().map_or(1, |id| id + 1);
    entries.push(LeaderboardEntry {
        id,
        player_name,
        time_ms,
        time_display: time_display.to_owned(),
        created_at: Utc::now(),
    });

    entries.iter().filter(|entry| entry.time_ms < time_ms).count() + 1
}

fn top_entries(entries: &[LeaderboardEntry], limit: usize) -> Vec<LeaderboardEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|entry| (entry.time_ms, entry.id));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed_and_bounded() {
        assert_eq!(normalize_player_name("  Ana ").unwrap(), "Ana");
        assert!(matches!(
            normalize_player_name("   "),
            Err(ScoreError::InvalidName(_))
        ));
        assert!(normalize_player_name(&"x".repeat(24)).is_ok());
        assert!(normalize_player_name(&"x".repeat(25)).is_err());
        // Counted in characters, not bytes.
        assert!(normalize_player_name(&"é".repeat(24)).is_ok());
    }

    #[test]
    fn rank_counts_strictly_faster_entries() {
        let mut entries = Vec::new();
        assert_eq!(insert_entry(&mut entries, "a".into(), 5_000, "00:05.00"), 1);
        assert_eq!(insert_entry(&mut entries, "b".into(), 3_000, "00:03.00"), 1);
        assert_eq!(insert_entry(&mut entries, "c".into(), 5_000, "00:05.00"), 2);
        assert_eq!(insert_entry(&mut entries, "d".into(), 9_000, "00:09.00"), 4);

        let ids: Vec<_> = top_entries(&entries, 3).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
