use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_NAME: &str = "textsync.config.json";

/// Reconciliation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileConfig {
    /// Drop patches the matcher could not locate instead of failing the batch
    #[serde(default = "default_true")]
    pub skip_unlocated: bool,

    /// Reject edits that fall outside the base text when its length is known
    #[serde(default = "default_true")]
    pub check_bounds: bool,
}

fn default_true() -> bool {
    true
}

impl ReconcileConfig {
    /// Load config from a directory, falling back to defaults when absent
    pub fn load(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_path = dir.as_ref().join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config = Self::from_json(&content)?;
            tracing::debug!(path = %config_path.display(), ?config, "loaded reconcile config");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            skip_unlocated: true,
            check_bounds: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "skipUnlocated": false,
            "checkBounds": false
        }"#;

        let config = ReconcileConfig::from_json(json).unwrap();
        assert!(!config.skip_unlocated);
        assert!(!config.check_bounds);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = ReconcileConfig::from_json("{}").unwrap();
        assert_eq!(config, ReconcileConfig::default());
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "skipUnlocated": false }"#,
        )
        .unwrap();

        let config = ReconcileConfig::load(dir.path()).unwrap();
        assert!(!config.skip_unlocated);
        assert!(config.check_bounds);
    }

    #[test]
    fn test_load_without_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReconcileConfig::load(dir.path()).unwrap();
        assert_eq!(config, ReconcileConfig::default());
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "{ not json").unwrap();

        assert!(ReconcileConfig::load(dir.path()).is_err());
    }
}
