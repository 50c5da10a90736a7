//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use charstate_core::EngineConfig;
use tracing::{debug, info};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, WearOffLoader};
use crate::oracle::{ItemCatalog, WearOffTable};

/// Content factory that loads all engine content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// └── wear_off.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load engine configuration from `config.toml`, or the defaults if the
    /// file does not exist.
    pub fn load_config(&self) -> LoadResult<EngineConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(EngineConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        let path = self.data_dir.join("items.ron");
        let catalog = ItemCatalog::from_definitions(ItemLoader::load(&path)?);
        info!(items = catalog.len(), "item catalog loaded");
        Ok(catalog)
    }

    /// Load wear-off messages from `wear_off.ron`.
    pub fn load_wear_off(&self) -> LoadResult<WearOffTable> {
        let path = self.data_dir.join("wear_off.ron");
        let table = WearOffLoader::load(&path)?;
        info!(messages = table.len(), "wear-off table loaded");
        Ok(table)
    }
}
