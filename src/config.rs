//! Rule configuration
//!
//! Rules live in a YAML file in the checked-out repository:
//!
//! ```yaml
//! rules:
//!   - label: "size:L"
//!     reviews: 2
//!   - label: critical
//!     reviews: 3
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};
use crate::rules::Rule;

pub const DEFAULT_CONFIG_PATH: &str = ".github/label-requires-reviews.yml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl RuleConfig {
    pub fn from_yaml(raw: &str, path: &Path) -> Result<Self> {
        // An empty document deserializes to unit, not an empty mapping.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(raw).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading rules from {}", path.display());
        let raw = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&raw, path)
    }

    fn validate(&self) -> Result<()> {
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.label.trim().is_empty() {
                return Err(Error::InvalidRule {
                    index,
                    reason: "label must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Resolve the configured path against the workspace checkout unless it is
/// already absolute.
pub fn resolve_config_path(workspace: &Path, config: &Path) -> PathBuf {
    if config.is_absolute() {
        config.to_path_buf()
    } else {
        workspace.join(config)
    }
}
