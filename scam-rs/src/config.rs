//! Service configuration
//!
//! Loaded from a TOML file, then overridden from the environment.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use crate::error::{Result, ScamError};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address (e.g., "0.0.0.0:8000")
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Origins allowed by CORS; empty allows any origin
    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,
}

/// Fitted model artifact configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Path to the JSON model artifact
    #[serde(default = "default_model_path")]
    pub path: String,
    /// Label the classifier uses for the positive (scam) class
    #[serde(default = "default_spam_label")]
    pub spam_label: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Fallback filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

fn default_model_path() -> String {
    "models/spam_model.json".to_string()
}

fn default_spam_label() -> String {
    "spam".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            cors_allowed_origins: default_cors_origins(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
            spam_label: default_spam_label(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScamError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ScamError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Resolve configuration the way both binaries do: explicit path, then
    /// `SCAM_CONFIG`, then `config.toml` if present, then defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var("SCAM_CONFIG").ok();

        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match from_env {
                Some(path) => Self::from_file(path)?,
                None if Path::new("config.toml").exists() => Self::from_file("config.toml")?,
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Override selected fields from `SCAM_*` environment variables
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("SCAM_MODEL_PATH") {
            self.model.path = path;
        }
        if let Ok(addr) = std::env::var("SCAM_LISTEN_ADDR") {
            self.server.listen_addr = addr;
        }
        if let Ok(label) = std::env::var("SCAM_SPAM_LABEL") {
            self.model.spam_label = label;
        }
        if let Ok(format) = std::env::var("SCAM_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.model.spam_label.trim().is_empty() {
            return Err(ScamError::Config("model.spam_label must not be empty".to_string()));
        }

        self.server.listen_addr.parse::<SocketAddr>().map_err(|e| {
            ScamError::Config(format!(
                "Invalid listen address '{}': {}",
                self.server.listen_addr, e
            ))
        })?;

        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(ScamError::Config(format!("Unknown log format '{}'", other))),
        }
    }
}
