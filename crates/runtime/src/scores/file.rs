//! File-based ScoreService implementation.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use super::{
    LeaderboardEntry, Result, ScoreService, insert_entry, normalize_player_name, top_entries,
};

/// Leaderboard kept in a single JSON array file.
///
/// The whole file is rewritten through a temporary file and an atomic
/// rename on every submission.
pub struct FileScoreService {
    path: PathBuf,
    entries: Mutex<Vec<LeaderboardEntry>>,
}

impl FileScoreService {
    /// Opens the leaderboard at `path`. A missing file is an empty board.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = match fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(path = %path.display(), entries = entries.len(), "opened leaderboard");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, entries: &[LeaderboardEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let bytes = serde_json::to_vec_pretty(entries)?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, bytes).await?;
        fs::rename(&temp_path, &self.path).await?;

        tracing::debug!(path = %self.path.display(), entries = entries.len(), "saved leaderboard");
        Ok(())
    }
}

#[async_trait]
impl ScoreService for FileScoreService {
    async fn submit_score(
        &self,
        player_name: &str,
        time_ms: u64,
        time_display: &str,
    ) -> Result<usize> {
        let player_name = normalize_player_name(player_name)?;
        let mut entries = self.entries.lock().await;

        let mut updated = entries.clone();
        let rank = insert_entry(&mut updated, player_name, time_ms, time_display);
        self.persist(&updated).await?;
        *entries = updated;

        Ok(rank)
    }

    async fn top_scores(&self, limit: usize) -> Result<Vec<LeaderboardEntry>> {
        let entries = self.entries.lock().await;
        Ok(top_entries(&entries, limit))
    }
}
