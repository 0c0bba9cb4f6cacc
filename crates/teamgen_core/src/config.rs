//! Team generator settings
//!
//! YAML file, every field optional:
//!
//! ```yaml
//! default_team_count: 4
//! seed: 42
//! sort_for_display: true
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TeamGenConfig {
    /// Team count used until the caller sets one
    pub default_team_count: usize,
    /// Fixed RNG seed; a fresh one is drawn per run when unset
    pub seed: Option<u64>,
    /// Sort members by tier rank when printing teams
    pub sort_for_display: bool,
}

impl Default for TeamGenConfig {
    fn default() -> Self {
        Self {
            default_team_count: 2,
            seed: None,
            sort_for_display: true,
        }
    }
}

impl TeamGenConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: TeamGenConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_team_count == 0 {
            return Err(ConfigError::InvalidValue(
                "default_team_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
