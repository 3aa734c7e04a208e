//! Logging configuration for ArthaVivek

use std::path::Path;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::{
    self,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

use crate::config::AppConfig;
use crate::Result;

const LOG_FILE_PREFIX: &str = "arthavivek.log";

/// Initialize logging with the level and directory from configuration.
///
/// `RUST_LOG` wins over the configured level when it is set.
pub fn init_logging_with_config(config: &AppConfig) -> Result<()> {
    let level = &config.logging.level;
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},arthavivek={level}")));
    install(env_filter, Path::new(&config.logging.directory), level)
}

/// Initialize logging with custom log level
pub fn init_logging_with_level(level: &str, config: &AppConfig) -> Result<()> {
    let env_filter = EnvFilter::new(format!("{level},arthavivek={level}"));
    install(env_filter, Path::new(&config.logging.directory), level)
}

fn install(env_filter: EnvFilter, logs_dir: &Path, level: &str) -> Result<()> {
    if !logs_dir.exists() {
        std::fs::create_dir_all(logs_dir)?;
    }

    let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // stdout is reserved for command output (e.g. `ask --json`)
    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(non_blocking)
        .with_ansi(false);

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| crate::ArthaVivekError::Custom(format!("Failed to install logger: {e}")))?;

    tracing::info!("Logging initialized with level: {level}");
    tracing::debug!(
        "Log files will be saved to: {}/{LOG_FILE_PREFIX}.YYYY-MM-DD",
        logs_dir.display()
    );

    // The guard flushes the file writer on drop; keep it for the process lifetime
    std::mem::forget(guard);

    Ok(())
}

/// Initialize simple console logging for tests; repeated calls are ignored
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_target(true)
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
