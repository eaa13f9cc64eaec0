//! Rule variations the engine can be switched into.
//!
//! Both flags default to off: the king only steps diagonally, and the destination row is
//! accepted up to one past the last row (such a request finds no cell there and is refused with
//! `GenericError`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read rule config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid rule config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleConfig {
    /// Let the king take a single step along a row or column as well as diagonally
    pub king_orthogonal_steps: bool,

    /// Report a destination row of 8 as `OutOfBound` instead of letting it through the bounds
    /// check
    pub strict_destination_bound: bool,
}

impl RuleConfig {
    /// Both variations switched on, the way the pieces move on a regular board
    pub fn orthodox() -> Self {
        Self {
            king_orthogonal_steps: true,
            strict_destination_bound: true,
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::info!("loaded rule config from {}: {config:?}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn defaults_are_literal() {
        let config = RuleConfig::default();
        assert!(!config.king_orthogonal_steps);
        assert!(!config.strict_destination_bound);
        assert_eq!(RuleConfig::from_toml_str("").unwrap(), config);
    }

    #[test]
    fn partial_toml() {
        let config = RuleConfig::from_toml_str("king_orthogonal_steps = true").unwrap();
        assert!(config.king_orthogonal_steps);
        assert!(!config.strict_destination_bound);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = RuleConfig::from_toml_str("castling = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn toml_round_trip() {
        let text = toml::to_string(&RuleConfig::orthodox()).unwrap();
        assert_eq!(RuleConfig::from_toml_str(&text).unwrap(), RuleConfig::orthodox());
    }

    #[test]
    fn missing_file() {
        let err = RuleConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
