//! Tracing bootstrap for hosts that embed the connector.
//!
//! Events go to `<directory>/<file_name>` (default `responsys.log`) when a
//! log directory is configured, otherwise to stderr. `RUST_LOG` overrides
//! the configured level.

use std::io;

use responsys_domain::{LogConfig, ResponsysError, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Keeps the background log writer alive; drop it to flush.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Install the global subscriber.
///
/// # Errors
/// `Config` when the log directory cannot be created or a subscriber is
/// already installed.
pub fn init(config: &LogConfig) -> Result<LoggingGuard> {
    let filter = filter_for(config);

    match &config.directory {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|e| {
                ResponsysError::Config(format!(
                    "Failed to create log directory {}: {e}",
                    dir.display()
                ))
            })?;

            let file_appender = tracing_appender::rolling::never(dir, &config.file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
                .try_init()
                .map_err(|e| ResponsysError::Config(format!("Failed to install logger: {e}")))?;

            Ok(LoggingGuard { _file_guard: Some(guard) })
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stderr))
                .try_init()
                .map_err(|e| ResponsysError::Config(format!("Failed to install logger: {e}")))?;

            Ok(LoggingGuard { _file_guard: None })
        }
    }
}

fn filter_for(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
