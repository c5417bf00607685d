//! Word-search client binary.
//!
//! ```bash
//! # Solve the built-in puzzle and record the time
//! cargo run -p wordsearch-client -- --player Ada
//!
//! # Replay a recorded script against a custom puzzle
//! cargo run -p wordsearch-client -- --puzzle animals.ron --script taps.ron
//! ```

use anyhow::Result;
use clap::Parser;
use wordsearch_client::{CliArgs, ClientConfig, app, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let config = ClientConfig::from_env().with_overrides(&args);

    // Keep the guard alive so buffered log lines are flushed on exit.
    let _log_guard = logging::setup_logging(config.log_to_stderr)?;
    tracing::debug!(?config, "client configuration");

    app::run(config).await
}
