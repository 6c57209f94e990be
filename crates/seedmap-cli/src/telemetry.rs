//! Structured logging setup shared by the seedmap binaries.
//!
//! Logs go to stderr so stdout only carries answers. `RUST_LOG` takes
//! precedence over `--log-filter` when it is set and valid.

use std::io::{self, IsTerminal};

use clap::{Args, ValueEnum};
use seedmap_almanac::constants::DEFAULT_LOG_FILTER;
use tracing::Subscriber;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::{EnvFilter, fmt};

/// Log line rendering
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum LogFormat {
    /// Single-line human readable records
    #[default]
    Compact,
    /// One JSON object per record
    Json,
}

/// Logging flags common to every binary
#[derive(Args, Clone, Debug)]
pub struct LogArgs {
    /// Log filter directive, e.g. `debug` or `seedmap_almanac=trace`
    #[arg(long, value_name = "FILTER", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
    /// Log record format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Errors encountered while configuring logging.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The filter expression could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(String),
    /// A global subscriber was already installed.
    #[error("failed to install log subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Install the global tracing subscriber.
pub fn initialise(args: &LogArgs) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&args.log_filter)
            .map_err(|error| TelemetryError::Filter(error.to_string()))?,
    };

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal());

    let subscriber: Box<dyn Subscriber + Send + Sync> = match args.log_format {
        LogFormat::Json => Box::new(builder.json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(builder.compact().finish()),
    };

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
