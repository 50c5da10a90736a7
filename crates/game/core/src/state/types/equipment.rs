//! Wear positions and the items a character has in them.
//!
//! Equipment only stores handles; item data (armor value, modifiers, flags)
//! comes from the [`crate::env::ItemOracle`] whenever stats are recomputed.

use strum::{EnumCount, IntoEnumIterator};

use super::ItemHandle;
use crate::config::EngineConfig;

/// Body position an item can be worn in.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumCount,
    strum::EnumIter,
    strum::FromRepr,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum WearSlot {
    Light = 0,
    FingerRight,
    FingerLeft,
    Neck1,
    Neck2,
    Body,
    Head,
    Legs,
    Feet,
    Hands,
    Arms,
    Shield,
    About,
    Waist,
    WristRight,
    WristLeft,
    Wield,
    Wield2,
    Hold,
    Hold2,
    TwoHandWield,
    Eyes,
    Face,
    LeftEar,
    RightEar,
    Badge,
    Belt,
    Hover,
}

const _: () = assert!(WearSlot::COUNT == EngineConfig::NUM_WEARS);

impl WearSlot {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Multiplier applied to an armor item's value in this position.
    ///
    /// Every position currently weighs armor equally.
    pub const fn armor_factor(self) -> i32 {
        1
    }
}

/// Items a character is wearing, one optional handle per [`WearSlot`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    slots: [Option<ItemHandle>; EngineConfig::NUM_WEARS],
}

impl Equipment {
    /// Creates empty equipment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing equipment.
    pub fn builder() -> EquipmentBuilder {
        EquipmentBuilder::default()
    }

    pub fn get(&self, slot: WearSlot) -> Option<ItemHandle> {
        self.slots[slot.index()]
    }

    pub fn is_occupied(&self, slot: WearSlot) -> bool {
        self.slots[slot.index()].is_some()
    }

    /// Occupied positions in slot order.
    pub fn worn(&self) -> impl Iterator<Item = (WearSlot, ItemHandle)> + '_ {
        WearSlot::iter().filter_map(|slot| self.get(slot).map(|handle| (slot, handle)))
    }

    /// Puts `handle` into `slot`, returning whatever was there.
    pub(crate) fn put(&mut self, slot: WearSlot, handle: ItemHandle) -> Option<ItemHandle> {
        self.slots[slot.index()].replace(handle)
    }

    pub(crate) fn take(&mut self, slot: WearSlot) -> Option<ItemHandle> {
        self.slots[slot.index()].take()
    }
}

/// Builder for constructing equipment.
///
/// Items placed here are applied when the character is spawned.
#[derive(Default)]
pub struct EquipmentBuilder {
    slots: [Option<ItemHandle>; EngineConfig::NUM_WEARS],
}

impl EquipmentBuilder {
    /// Places an item in the given position.
    pub fn wear(mut self, slot: WearSlot, handle: ItemHandle) -> Self {
        self.slots[slot.index()] = Some(handle);
        self
    }

    /// Builds the equipment.
    pub fn build(self) -> Equipment {
        Equipment { slots: self.slots }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_numbering_matches_positions() {
        assert_eq!(WearSlot::Light.index(), 0);
        assert_eq!(WearSlot::Body.index(), 5);
        assert_eq!(WearSlot::Hover.index(), 27);
        assert_eq!(WearSlot::from_repr(16), Some(WearSlot::Wield));
    }

    #[test]
    fn worn_lists_occupied_slots_in_order() {
        let equipment = Equipment::builder()
            .wear(WearSlot::Head, ItemHandle(2))
            .wear(WearSlot::Light, ItemHandle(1))
            .build();

        let worn: Vec<_> = equipment.worn().collect();
        assert_eq!(
            worn,
            vec![(WearSlot::Light, ItemHandle(1)), (WearSlot::Head, ItemHandle(2))]
        );
    }

    #[test]
    fn put_returns_previous_occupant() {
        let mut equipment = Equipment::empty();
        assert_eq!(equipment.put(WearSlot::Body, ItemHandle(4)), None);
        assert_eq!(equipment.put(WearSlot::Body, ItemHandle(5)), Some(ItemHandle(4)));
        assert_eq!(equipment.take(WearSlot::Body), Some(ItemHandle(5)));
        assert!(!equipment.is_occupied(WearSlot::Body));
    }
}
