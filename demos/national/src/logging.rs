//! Logging set-up for the `national` binary.
//!
//! Events go to stderr so the report on stdout stays clean.  `RUST_LOG`
//! sets the filter (default `info`); `RAIL_NET_LOG_FORMAT=json` switches
//! to JSON lines.

use std::env;
use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FORMAT_ENV: &str = "RAIL_NET_LOG_FORMAT";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("unsupported RAIL_NET_LOG_FORMAT `{0}`; expected `human` or `json`")]
    UnsupportedFormat(String),

    #[error("failed to install tracing subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
enum LogFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(LogFormat::Human),
            "json" => Ok(LogFormat::Json),
            other => Err(LoggingError::UnsupportedFormat(other.to_owned())),
        }
    }
}

/// Install the global subscriber.  Call once, from `main`.
pub fn init_logging() -> Result<(), LoggingError> {
    // A non-UTF-8 value is treated like an unknown format.
    let format = match env::var_os(LOG_FORMAT_ENV) {
        Some(raw) => raw.to_string_lossy().parse()?,
        None => LogFormat::default(),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let fmt = match format {
        LogFormat::Human => fmt.boxed(),
        LogFormat::Json => fmt.json().boxed(),
    };

    tracing_subscriber::registry().with(filter).with(fmt).try_init()?;
    Ok(())
}
