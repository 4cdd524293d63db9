//! Logging infrastructure for DigiBot.
//!
//! Logs always go to stderr so that answers printed on stdout can be piped
//! without noise. Two output formats are supported: a human-readable one for
//! terminals and newline-delimited JSON for log collectors.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::error::{AppError, AppResult};

/// Output format of the log stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(AppError::Config(format!(
                "Unknown log format: {}. Supported: pretty, json",
                other
            ))),
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// # Arguments
/// * `log_level` - Filter directive (e.g. "debug", "digibot_assistant=trace").
///   Falls back to `RUST_LOG`, then to `info`.
/// * `no_color` - Disable ANSI colors (ignored for JSON output)
/// * `format` - Log line format
///
/// # Example
/// ```no_run
/// use digibot_core::logging::{init_logging, LogFormat};
///
/// init_logging(None, false, LogFormat::Pretty).expect("Failed to initialize logging");
/// ```
pub fn init_logging(log_level: Option<&str>, no_color: bool, format: LogFormat) -> AppResult<()> {
    let env_filter = build_filter(log_level)?;

    let fmt_layer = match format {
        LogFormat::Pretty => fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_ansi(!no_color && supports_color())
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to init logging: {}", e)))?;

    Ok(())
}

fn build_filter(log_level: Option<&str>) -> AppResult<EnvFilter> {
    let default_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let filter_str = log_level.unwrap_or(&default_level);

    EnvFilter::try_new(filter_str)
        .map_err(|e| AppError::Config(format!("Invalid log filter '{}': {}", filter_str, e)))
}

/// NO_COLOR convention: any value disables colors.
fn supports_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}
