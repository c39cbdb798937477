//! Tracing subscriber setup
//!
//! CLI commands log to stderr. The TUI owns the terminal, so it logs to a
//! file in the data directory instead.

use std::path::PathBuf;

use tracing::metadata::LevelFilter;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::config::LoggingConfig;

const LOG_ENV_VAR: &str = "WORDLE_LOG";
const LOG_FILE_NAME: &str = "wordle.log";

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub verbosity: u8,
    pub logging: LoggingConfig,
    pub log_dir: PathBuf,
}

impl TelemetryConfig {
    pub const fn new(verbosity: u8, logging: LoggingConfig, log_dir: PathBuf) -> Self {
        Self {
            verbosity,
            logging,
            log_dir,
        }
    }

    /// Route logs away from a terminal the TUI has taken over
    #[must_use]
    pub fn for_interactive(mut self) -> Self {
        self.logging.stderr = false;
        self.logging.file = true;
        self
    }
}

/// Keeps the non-blocking file writer flushing until dropped
pub struct TelemetryGuard {
    _guards: Vec<tracing_appender::non_blocking::WorkerGuard>,
}

pub fn init(config: TelemetryConfig) -> TelemetryGuard {
    let filter = build_filter(config.verbosity, config.logging.level.as_deref());

    let mut guards = Vec::new();
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if config.logging.stderr {
        layers.push(Box::new(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_target(false),
        ));
    }

    let mut file_setup_error = None;
    if config.logging.file {
        match std::fs::create_dir_all(&config.log_dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::never(&config.log_dir, LOG_FILE_NAME);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                layers.push(Box::new(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(writer),
                ));
                guards.push(guard);
            }
            Err(err) => {
                file_setup_error = Some(format!(
                    "log dir init failed for {}: {err}",
                    config.log_dir.display()
                ));
            }
        }
    }

    layers.push(Box::new(filter));

    // A subscriber may already be installed (tests, embedding); keep it
    let _ = Registry::default().with(layers).try_init();

    if let Some(error) = file_setup_error {
        tracing::warn!("{error}");
    }

    TelemetryGuard { _guards: guards }
}

fn build_filter(verbosity: u8, configured: Option<&str>) -> EnvFilter {
    let builder = EnvFilter::builder()
        .with_default_directive(level_from_verbosity(verbosity).into())
        .with_env_var(LOG_ENV_VAR);
    // WORDLE_LOG beats -v, which beats the configured level
    match configured {
        Some(directives) if verbosity == 0 && std::env::var_os(LOG_ENV_VAR).is_none() => {
            builder.parse_lossy(directives)
        }
        _ => builder.from_env_lossy(),
    }
}

const fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}
