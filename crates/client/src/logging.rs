//! Log file setup.
use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::dirs;

/// Installs the global subscriber: a per-run log file, plus stderr when
/// requested. The returned guard flushes the file on drop; keep it alive for
/// the life of the process.
pub fn setup_logging(log_to_stderr: bool) -> Result<WorkerGuard> {
    let run_id = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();
    let run_log_dir = dirs::log_dir().join(&run_id);
    std::fs::create_dir_all(&run_log_dir)
        .with_context(|| format!("Failed to create log directory {}", run_log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&run_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    // Game output goes to stdout; logs stay off it.
    let stderr_layer = log_to_stderr.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .boxed()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!(run = %run_id, "logging initialized");
    tracing::info!("log file: {}/client.log", run_log_dir.display());

    Ok(guard)
}
