//! Tracing subscriber setup shared by the server and the CLI

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{Result, ScamError};

/// Where log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    /// Used when stdout carries program output
    Stderr,
}

/// Install the global subscriber. `RUST_LOG` wins over `config.level`.
pub fn init(config: &LoggingConfig, target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ScamError::Config(format!("Invalid log level '{}': {}", config.level, e)))?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = match (config.format.as_str(), target) {
        ("json", LogTarget::Stdout) => registry.with(fmt::layer().json()).try_init(),
        ("json", LogTarget::Stderr) => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        (_, LogTarget::Stdout) => registry.with(fmt::layer().pretty()).try_init(),
        (_, LogTarget::Stderr) => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| ScamError::Config(format!("Failed to set tracing subscriber: {}", e)))
}
