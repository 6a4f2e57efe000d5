//! Host configuration for the core runtime.
//!
//! # Responsibility
//! - Load logging settings from a JSON file or the environment.
//!
//! # Invariants
//! - A missing level falls back to `default_log_level()`.
//! - A missing `log_dir` disables file logging rather than failing.

use crate::logging::{default_log_level, init_logging, normalize_level};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const ENV_LOG_LEVEL: &str = "ROLLCALL_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "ROLLCALL_LOG_DIR";

/// Configuration loading errors.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
    InvalidLevel(String),
    Logging(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::InvalidLevel(message) => write!(f, "{message}"),
            Self::Logging(message) => write!(f, "logging init failed: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidLevel(_) | Self::Logging(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Runtime settings shared by the CLI and FFI hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub log_level: String,
    /// Absolute directory for rolling log files; `None` keeps logging off.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Reads `ROLLCALL_LOG_LEVEL` / `ROLLCALL_LOG_DIR` over the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|value| !value.trim().is_empty()) {
            config.log_level = level;
        }
        config.log_dir = lookup(ENV_LOG_DIR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(&self.log_level)
            .map(|_| ())
            .map_err(ConfigError::InvalidLevel)
    }

    /// Starts file logging when a directory is configured.
    ///
    /// Returns whether logging is active afterwards.
    pub fn apply_logging(&self) -> Result<bool, ConfigError> {
        let Some(log_dir) = &self.log_dir else {
            return Ok(false);
        };
        init_logging(&self.log_level, &log_dir.to_string_lossy()).map_err(ConfigError::Logging)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn json_fields_are_optional() {
        let config = CoreConfig::from_json_str("{}").expect("empty object");
        assert_eq!(config, CoreConfig::default());

        let config =
            CoreConfig::from_json_str(r#"{"log_level":"warn","log_dir":"/var/log/rollcall"}"#)
                .expect("full object");
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/rollcall")));
    }

    #[test]
    fn invalid_level_is_rejected() {
        let err = CoreConfig::from_json_str(r#"{"log_level":"loud"}"#).expect_err("bad level");
        assert!(matches!(err, ConfigError::InvalidLevel(_)));
    }

    #[test]
    fn env_lookup_overrides_defaults() {
        let config = CoreConfig::from_lookup(|key| match key {
            ENV_LOG_LEVEL => Some("error".to_string()),
            ENV_LOG_DIR => Some(" ".to_string()),
            _ => None,
        })
        .expect("valid env");
        assert_eq!(config.log_level, "error");
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn reads_config_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"log_level":"debug"}}"#).expect("write config");
        let config = CoreConfig::from_json_file(file.path()).expect("file config");
        assert_eq!(config.log_level, "debug");

        let missing = CoreConfig::from_json_file(&file.path().with_extension("missing"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn apply_logging_without_dir_is_noop() {
        let active = CoreConfig::default()
            .apply_logging()
            .expect("no dir means nothing to start");
        assert!(!active);
    }
}
