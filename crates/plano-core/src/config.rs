//! Checklist and storage configuration.
//!
//! Only the knobs the system actually honors live here. The one validation
//! knob is whether the justification section counts toward plan completion:
//! the institutional template treats it as recommended rather than blocking,
//! but some campuses require it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Configuration for the checklist engine and the plan cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistConfig {
    /// Whether the justification section blocks plan completion.
    pub justification_required: bool,
    /// Staleness window for the owner-scoped plan cache (seconds).
    pub cache_ttl_secs: u64,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            justification_required: false,
            cache_ttl_secs: constants::DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl ChecklistConfig {
    /// Parse a config from TOML. Missing keys fall back to defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        toml::from_str(input).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Load a config from a TOML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_institutional_template() {
        let config = ChecklistConfig::default();
        assert!(!config.justification_required);
        assert_eq!(config.cache_ttl_secs, constants::DEFAULT_CACHE_TTL_SECS);
    }

    #[test]
    fn parses_partial_toml() {
        let config = ChecklistConfig::from_toml_str("justification_required = true\n").unwrap();
        assert!(config.justification_required);
        assert_eq!(config.cache_ttl_secs, constants::DEFAULT_CACHE_TTL_SECS);
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(ChecklistConfig::from_toml_str("justification_required = maybe").is_err());
    }

    #[test]
    fn loads_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plano.toml");
        std::fs::write(&path, "cache_ttl_secs = 60\n").unwrap();

        let config = ChecklistConfig::from_path(&path).unwrap();
        assert_eq!(config.cache_ttl_secs, 60);
        assert!(!config.justification_required);
    }

    #[test]
    fn missing_config_file_reports_its_path() {
        let err = ChecklistConfig::from_path("/nonexistent/plano.toml").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert_eq!(path, "/nonexistent/plano.toml"),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
