//! [`charstate_core::ItemOracle`] backed by an in-memory map.
use std::collections::BTreeMap;

use charstate_core::{ItemDefinition, ItemHandle, ItemOracle};
use tracing::warn;

/// ItemOracle implementation over a fixed set of definitions.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    definitions: BTreeMap<ItemHandle, ItemDefinition>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from definitions. A later definition with the same
    /// handle replaces an earlier one.
    pub fn from_definitions(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.add_definition(definition);
        }
        catalog
    }

    /// Add an item definition
    pub fn add_definition(&mut self, definition: ItemDefinition) {
        let handle = definition.handle;
        if let Some(previous) = self.definitions.insert(handle, definition) {
            warn!(?handle, replaced = %previous.name, "duplicate item handle in catalog");
        }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition> {
        self.definitions.get(&handle).cloned()
    }

    fn all_definitions(&self) -> Vec<ItemDefinition> {
        self.definitions.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charstate_core::ItemKind;

    #[test]
    fn later_definitions_replace_earlier_ones() {
        let catalog = ItemCatalog::from_definitions([
            ItemDefinition::new(ItemHandle(1), "torch", ItemKind::Light { lit: false }),
            ItemDefinition::new(ItemHandle(1), "lit torch", ItemKind::Light { lit: true }),
            ItemDefinition::new(ItemHandle(2), "buckler", ItemKind::Armor { armor: 3 }),
        ]);

        assert_eq!(catalog.len(), 2);
        let torch = catalog.definition(ItemHandle(1)).expect("torch");
        assert!(torch.is_lit());
        assert!(catalog.definition(ItemHandle(3)).is_none());
    }
}
