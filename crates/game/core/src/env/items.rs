use arrayvec::ArrayVec;
use tracing::warn;

use crate::config::EngineConfig;
use crate::state::{ApplyLocation, EffectFlags, ItemHandle};

pub trait ItemOracle: Send + Sync {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition>;

    /// Returns all item definitions available in this oracle.
    fn all_definitions(&self) -> Vec<ItemDefinition>;
}

/// Oracle with no items at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoItems;

impl ItemOracle for NoItems {
    fn definition(&self, _handle: ItemHandle) -> Option<ItemDefinition> {
        None
    }

    fn all_definitions(&self) -> Vec<ItemDefinition> {
        Vec::new()
    }
}

/// Item definition with common fields and type-specific data.
///
/// - Base struct holds what every wearable shares: stat modifiers and flags
/// - `kind` holds the parts only armor and lights have
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    pub name: String,
    pub kind: ItemKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub applies: ArrayVec<ItemApply, { EngineConfig::MAX_ITEM_APPLIES }>,
    /// Flags granted to the wearer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: EffectFlags,
}

impl ItemDefinition {
    pub fn new(handle: ItemHandle, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            handle,
            name: name.into(),
            kind,
            applies: ArrayVec::new(),
            flags: EffectFlags::empty(),
        }
    }

    /// Adds a stat modifier. Modifiers past the item's capacity are dropped
    /// with a warning.
    #[must_use]
    pub fn with_apply(mut self, location: ApplyLocation, modifier: i32) -> Self {
        if self.applies.try_push(ItemApply { location, modifier }).is_err() {
            warn!(
                item = ?self.handle,
                ?location,
                modifier,
                capacity = self.applies.capacity(),
                "item apply dropped, no free apply slot"
            );
        }
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: EffectFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Armor value before the wear position's factor.
    pub fn armor(&self) -> Option<i32> {
        match self.kind {
            ItemKind::Armor { armor } => Some(armor),
            _ => None,
        }
    }

    /// True for a light source that is currently burning.
    pub fn is_lit(&self) -> bool {
        matches!(self.kind, ItemKind::Light { lit: true })
    }
}

/// Item type with type-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Lowers the wearer's armor class by `armor`.
    Armor { armor: i32 },
    /// Adds to room light while worn and lit.
    Light { lit: bool },
    Trinket,
}

/// A single stat modifier carried by an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemApply {
    pub location: ApplyLocation,
    pub modifier: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_past_capacity_are_dropped() {
        let mut item = ItemDefinition::new(ItemHandle(9), "overloaded charm", ItemKind::Trinket);
        for bonus in 1..=EngineConfig::MAX_ITEM_APPLIES as i32 + 2 {
            item = item.with_apply(ApplyLocation::Hitroll, bonus);
        }
        assert_eq!(item.applies.len(), EngineConfig::MAX_ITEM_APPLIES);
        assert_eq!(item.applies.last().map(|apply| apply.modifier), Some(6));
    }
}
