//! Handler configuration.
//!
//! The page is normally served from the same origin as the action
//! endpoints, so the defaults need no configuration at all. A host that
//! mounts the UI below a path prefix (or in front of a different origin)
//! sets `baseUrl`.

use core::fmt;
use core::str::FromStr;

use serde::Deserialize;
use tracing::Level;

use crate::action::PostAction;

/// Errors from parsing a [`HandlerConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Malformed JSON or a field of the wrong type.
    Json(String),
    /// `logLevel` is not one of trace/debug/info/warn/error.
    InvalidLogLevel(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "JSON parse error: {msg}"),
            Self::InvalidLogLevel(level) => write!(f, "invalid log level: {level}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HandlerConfig {
    /// Prefix joined in front of every endpoint path. Empty means
    /// page-relative (`/reply`, `/boost`, `/favourite`).
    pub base_url: String,
    /// Maximum level written to the host log sink.
    pub log_level: String,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            log_level: "info".to_owned(),
        }
    }
}

impl HandlerConfig {
    /// Parse from a JSON object. Missing keys take their defaults; unknown
    /// keys are ignored.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.level()?;
        Ok(config)
    }

    /// Full URL for `action`.
    #[must_use]
    pub fn url_for(&self, action: PostAction) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), action.endpoint())
    }

    pub fn level(&self) -> Result<Level, ConfigError> {
        Level::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}
