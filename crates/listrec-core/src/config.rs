//! Recommender configuration for listrec
//!
//! Configuration is read from TOML, either an explicit `--config` path or
//! `listrec.toml` in the working directory.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{ListrecError, Result};

pub use types::{DatasetConfig, RecommenderConfig, CONFIG_FILE_NAME};

impl RecommenderConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: RecommenderConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `listrec.toml` from `dir` if it exists, defaults otherwise
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "load_config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render the configuration as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ListrecError::Other(format!("failed to serialize config: {}", e)))
    }

    /// Reject n-gram bounds that cannot produce any terms
    pub fn validate(&self) -> Result<()> {
        if self.ngram_min == 0 {
            bail_invalid!("ngram_min", self.ngram_min);
        }
        if self.ngram_min > self.ngram_max {
            bail_invalid!(
                "ngram range",
                format!("{}..{}", self.ngram_min, self.ngram_max)
            );
        }
        Ok(())
    }
}
