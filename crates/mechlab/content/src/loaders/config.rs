//! Engine configuration loader.

use std::path::Path;

use anyhow::Context;
use mechlab_core::EngineConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their [`EngineConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<EngineConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Failed to load config {}", path.display()))
    }

    /// Parse config TOML text.
    pub fn parse(content: &str) -> LoadResult<EngineConfig> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if !(0.0..=1.0).contains(&config.percentile) {
            anyhow::bail!("percentile must be within [0, 1], got {}", config.percentile);
        }
        if !(config.sample_step.is_finite() && config.sample_step > 0.0) {
            anyhow::bail!("sample_step must be positive, got {}", config.sample_step);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let config = ConfigLoader::parse("percentile = 0.8\n").unwrap();
        assert_eq!(config.percentile, 0.8);
        assert_eq!(config.sample_step, EngineConfig::RANGE_SAMPLE_STEP);
        assert_eq!(config.default_range, EngineConfig::DEFAULT_RANGE);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(ConfigLoader::parse("percentile = 1.5\n").is_err());
        assert!(ConfigLoader::parse("sample_step = 0.0\n").is_err());
    }
}
