//! Item catalog loader.

use std::path::Path;

use charstate_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogFile {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an `ItemCatalogFile`
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charstate_core::{ApplyLocation, EffectFlags, ItemHandle, ItemKind};

    #[test]
    fn parses_applies_and_flags() {
        let items = ItemLoader::parse(
            r#"(
                items: [
                    (
                        handle: 10,
                        name: "cloak of shadows",
                        kind: Armor(armor: 2),
                        applies: [(location: Hiddenness, modifier: 50)],
                        flags: "INVISIBLE",
                    ),
                    (handle: 11, name: "candle", kind: Light(lit: true)),
                ],
            )"#,
        )
        .expect("catalog");

        assert_eq!(items.len(), 2);
        let cloak = &items[0];
        assert_eq!(cloak.handle, ItemHandle(10));
        assert_eq!(cloak.kind, ItemKind::Armor { armor: 2 });
        assert_eq!(cloak.applies[0].location, ApplyLocation::Hiddenness);
        assert_eq!(cloak.flags, EffectFlags::INVISIBLE);
        assert!(items[1].applies.is_empty());
        assert!(items[1].is_lit());
    }
}
