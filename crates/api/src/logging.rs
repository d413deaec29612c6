//! Optional subscriber bootstrap for hosts that do not install their own.
//!
//! The API itself only emits `tracing` events. `init` wires them to stderr,
//! to a log file, or both.

use std::path::PathBuf;

use serde::Deserialize;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub directive: String,
    /// Directory of the log file. No file is written when absent.
    pub directory: Option<PathBuf>,
    pub file_name: String,
    pub stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directive: "info".to_string(),
            directory: None,
            file_name: "space-api.log".to_string(),
            stderr: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("a global subscriber is already installed: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),

    #[error("cannot create log directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Installs the global subscriber.
///
/// Returns the file writer guard when a file layer was installed; buffered
/// lines are flushed when it is dropped, so keep it alive until shutdown.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>, LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.directive)?,
    };

    let mut guard = None;
    let file_layer = match &config.directory {
        Some(directory) => {
            std::fs::create_dir_all(directory)?;
            let appender = tracing_appender::rolling::never(directory, &config.file_name);
            let (writer, file_guard) = tracing_appender::non_blocking(appender);
            guard = Some(file_guard);
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    let stderr_layer = config
        .stderr
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_events_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            directive: "debug".into(),
            directory: Some(dir.path().join("logs")),
            file_name: "api.log".into(),
            stderr: false,
        };

        let guard = init(&config).unwrap();
        assert!(guard.is_some());
        tracing::warn!(slot = "mod_scope", "slot not found");
        drop(guard);

        let written = std::fs::read_to_string(dir.path().join("logs").join("api.log")).unwrap();
        assert!(written.contains("slot not found"));

        assert!(matches!(init(&config), Err(LoggingError::Init(_))));
    }
}
