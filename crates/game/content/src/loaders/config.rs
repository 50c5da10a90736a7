//! Engine configuration loader.

use std::path::Path;

use charstate_core::EngineConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`EngineConfig::default`].
    pub fn load(path: &Path) -> LoadResult<EngineConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<EngineConfig> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("pulses_per_second = 4\nseed = 7\n").expect("config");
        assert_eq!(config.pulses_per_second, 4);
        assert_eq!(config.seed, 7);
        assert_eq!(
            config.seconds_per_game_hour,
            EngineConfig::DEFAULT_SECONDS_PER_GAME_HOUR
        );
        assert_eq!(config.pulses_per_game_hour(), 300);
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(ConfigLoader::parse("pulses_per_second = \"fast\"").is_err());
    }
}
