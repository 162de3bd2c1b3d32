//! Subscriber setup for the atelier binaries and tests.
//!
//! `ATELIER_LOG` carries the filter directives (default `info`).
//! `ATELIER_LOG_FORMAT` picks `json` (default) or `compact` output.

pub mod events;
pub mod spans;

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "compact" | "text" => Ok(Self::Compact),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

/// Install the global subscriber from the environment. A second call is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("ATELIER_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let format = std::env::var("ATELIER_LOG_FORMAT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_default();
    install(filter, format);
}

/// Install the global subscriber with explicit directives.
pub fn init_tracing_with(filter: &str, format: LogFormat) {
    install(EnvFilter::new(filter), format);
}

fn install(filter: EnvFilter, format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    let _ = match format {
        LogFormat::Json => builder
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_formats() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("text".parse::<LogFormat>(), Ok(LogFormat::Compact));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_tracing_with("warn", LogFormat::Compact);
        init_tracing_with("debug", LogFormat::Json);
    }
}
