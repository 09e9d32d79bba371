//! Logging Initialization
//!
//! Installs a `tracing` subscriber with:
//! - an `EnvFilter` taken from `RUST_LOG`, falling back to the configured level
//! - a stdout layer, pretty or JSON
//! - an optional daily-rolling JSON file layer
//! - a bridge for records emitted through the `log` crate

use std::fs;
use std::io;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;

const LOG_FILE_PREFIX: &str = "scripture-search.log";

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter `{directive}`: {message}")]
    InvalidFilter { directive: String, message: String },

    #[error("Failed to create log directory: {0}")]
    Io(#[from] io::Error),

    #[error("A global subscriber is already installed: {0}")]
    AlreadyInitialized(String),
}

/// Build the filter: `RUST_LOG` wins, otherwise `config.level`.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|e| LoggingError::InvalidFilter {
        directive: config.level.clone(),
        message: e.to_string(),
    })
}

/// Initialize the logging system.
///
/// Returns the file appender's `WorkerGuard` when `log_dir` is set; keep
/// it alive so buffered lines are flushed on shutdown.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>, LoggingError> {
    let filter = env_filter(config)?;

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stdout)
            .json()
            .with_filter(filter.clone())
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stdout)
            .pretty()
            .with_filter(filter.clone())
            .boxed()
    };

    let (file_layer, guard) = match &config.log_dir {
        Some(log_dir) => {
            fs::create_dir_all(log_dir)?;
            let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .json()
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_filter(filter)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    if let Err(e) = tracing_log::LogTracer::init() {
        tracing::debug!("LogTracer not installed: {}", e);
    }

    tracing::info!(json = config.json, file = config.log_dir.is_some(), "Logging initialized");
    Ok(guard)
}
