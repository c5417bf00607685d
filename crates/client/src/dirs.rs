//! Platform-specific directory utilities.
use std::path::PathBuf;

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", "wordsearch")
}

/// Log directory, e.g. `~/.cache/wordsearch/logs` on Linux.
pub fn log_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/wordsearch"))
        .join("logs")
}

/// Data directory, e.g. `~/.local/share/wordsearch` on Linux.
pub fn data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

pub fn default_scores_path() -> PathBuf {
    data_dir().join("scores.json")
}
