//! TOML configuration for the shardring CLI.
//!
//! ```toml
//! [log]
//! level = "info"
//!
//! [sample]
//! size = 100000
//!
//! [[shards]]
//! name = "shard1"
//! weight = 1
//! servers = "h1"
//! ```

use std::path::Path;

use anyhow::{Context, bail};
use serde::Deserialize;
use shardring_placement::Ring;
use shardring_types::ShardConfig;

/// Top-level configuration, parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Logging configuration.
    pub log: LogSection,
    /// Sampling for `stats` and `diff`.
    pub sample: SampleSection,
    /// Shards, in ring order.
    pub shards: Vec<ShardConfig>,
}

/// `[log]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// Log level filter (e.g. `"info"`, `"debug"`, `"warn"`).
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// `[sample]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SampleSection {
    /// Number of random identifiers to route.
    pub size: Option<usize>,
}

impl CliConfig {
    /// Load config from a TOML file, or defaults (no shards) if no path given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(p) => {
                let content = std::fs::read_to_string(p)
                    .with_context(|| format!("failed to read {}", p.display()))?;
                let config: CliConfig = toml::from_str(&content)
                    .with_context(|| format!("invalid config {}", p.display()))?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a TOML string (used in tests).
    #[cfg(test)]
    pub fn from_toml(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Effective sample size. Defaults to 100 000.
    pub fn sample_size(&self) -> usize {
        self.sample.size.unwrap_or(100_000)
    }

    /// Build the ring for the configured shards.
    pub fn build_ring(&self) -> anyhow::Result<Ring<ShardConfig>> {
        if self.shards.is_empty() {
            bail!("no shards configured (pass a config file with -c or SHARDRING_CONFIG)");
        }
        Ring::build(self.shards.clone()).context("invalid shard configuration")
    }
}
