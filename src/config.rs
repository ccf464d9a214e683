//! Directory configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bookmark::DEFAULT_STORAGE_KEY;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failure_probability must be within [0, 1], got {0}")]
    InvalidFailureProbability(f64),
}

/// Tunables for a directory session, loaded from JSON.
///
/// Every field is optional in the JSON; missing fields take their defaults.
///
/// | Field                 | Default                     |
/// |-----------------------|-----------------------------|
/// | `storage_key`         | `"bookmarkedOpportunities"` |
/// | `load_delay_ms`       | `1000`                      |
/// | `failure_probability` | `0.1`                       |
/// | `seed`                | none (entropy-seeded)       |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Storage slot holding the bookmark set.
    pub storage_key: String,
    /// Simulated catalog fetch latency.
    pub load_delay_ms: u64,
    /// Chance that a simulated catalog fetch fails.
    pub failure_probability: f64,
    /// Seed for the failure-injection RNG.
    pub seed: Option<u64>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            load_delay_ms: 1000,
            failure_probability: 0.1,
            seed: None,
        }
    }
}

impl DirectoryConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.failure_probability) {
            return Err(ConfigError::InvalidFailureProbability(
                self.failure_probability,
            ));
        }
        Ok(())
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}
