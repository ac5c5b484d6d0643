//! talentsheet - browse applicants tracked in a shared spreadsheet.
//!
//! Serves read-only pages that group the sheet's applicant rows by job id
//! and review status, with a viewer for each applicant's PDF.

mod server;

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use talentsheet_core::Config;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str = "info";

/// File name prefix for the daily log files
const LOG_FILE_PREFIX: &str = "talentsheet.log";

/// Initialize the tracing subscriber for logging.
/// The returned guard flushes the log file on drop and must outlive the server.
fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .with(filter)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = Config::from_env().context("Failed to load configuration")?;
    let _guard = init_tracing(config.log_dir.as_deref());
    info!(sheet = %config.sheet_url, cache_secs = config.cache_secs, "talentsheet starting");

    server::listen(&config).await?;

    info!("talentsheet shutting down");
    Ok(())
}
