//! Runtime configuration for the batch extractor.
//!
//! Settings come from an optional YAML file and are then overridden by any
//! explicit command-line flags:
//!
//! ```yaml
//! concurrency: 16
//! pretty: true
//! ```

use serde::Deserialize;
use std::error::Error;
use tracing::{info, instrument};

/// Default number of posts parsed at once.
pub const DEFAULT_CONCURRENCY: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Posts parsed concurrently. Zero is treated as one.
    pub concurrency: usize,
    /// Pretty-print the output JSON.
    pub pretty: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            pretty: false,
        }
    }
}

impl ExtractConfig {
    /// Apply command-line overrides. `pretty` can only be switched on.
    pub fn with_overrides(mut self, concurrency: Option<usize>, pretty: bool) -> Self {
        if let Some(concurrency) = concurrency {
            self.concurrency = concurrency;
        }
        self.pretty |= pretty;
        self
    }
}

/// Load an [`ExtractConfig`] from a YAML file. Missing keys keep their defaults.
#[instrument(level = "info")]
pub fn load_config(path: &str) -> Result<ExtractConfig, Box<dyn Error>> {
    let raw = std::fs::read_to_string(path)?;
    let config: ExtractConfig = serde_yaml::from_str(&raw)?;
    info!(?config, "Loaded configuration");
    Ok(config)
}
