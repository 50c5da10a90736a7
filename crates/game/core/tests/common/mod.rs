//! Shared fixtures: a handful of rooms, a small item catalog and fixed rates.
#![allow(dead_code)]

use std::collections::BTreeMap;

use charstate_core::{
    ApplyLocation, Character, CharacterId, EffectFlags, ItemDefinition, ItemHandle, ItemKind,
    ItemOracle, Notice, RateOracle, Room, RoomId, Sector, World,
};

pub const TOWN: RoomId = RoomId(1);
pub const LAKE: RoomId = RoomId(2);
pub const SKY: RoomId = RoomId(3);
pub const FIELD: RoomId = RoomId(4);

pub const LANTERN: ItemHandle = ItemHandle(1);
pub const GAUNTLETS: ItemHandle = ItemHandle(2);
pub const WINGS: ItemHandle = ItemHandle(3);
pub const RING: ItemHandle = ItemHandle(4);

pub fn world() -> World {
    let mut world = World::new();
    world.add_room(Room::new(TOWN, Sector::City));
    world.add_room(Room::new(LAKE, Sector::ShallowWater));
    world.add_room(Room::new(SKY, Sector::Air));
    world.add_room(Room::new(FIELD, Sector::Field));
    world
}

pub struct Catalog(BTreeMap<ItemHandle, ItemDefinition>);

impl Catalog {
    pub fn standard() -> Self {
        let items = [
            ItemDefinition::new(LANTERN, "a brass lantern", ItemKind::Light { lit: true }),
            ItemDefinition::new(GAUNTLETS, "iron gauntlets", ItemKind::Armor { armor: 5 })
                .with_apply(ApplyLocation::Str, 3),
            ItemDefinition::new(WINGS, "feathered wings", ItemKind::Trinket)
                .with_flags(EffectFlags::FLY),
            ItemDefinition::new(RING, "ring of vigor", ItemKind::Trinket)
                .with_apply(ApplyLocation::Hit, 10),
        ];
        Self(items.into_iter().map(|item| (item.handle, item)).collect())
    }
}

impl ItemOracle for Catalog {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition> {
        self.0.get(&handle).cloned()
    }

    fn all_definitions(&self) -> Vec<ItemDefinition> {
        self.0.values().cloned().collect()
    }
}

/// Same per-hour gain for everyone, whatever their condition.
pub struct FixedRates {
    pub hit: i32,
    pub mana: i32,
    pub movement: i32,
}

impl FixedRates {
    pub const fn uniform(gain: i32) -> Self {
        Self {
            hit: gain,
            mana: gain,
            movement: gain,
        }
    }
}

impl RateOracle for FixedRates {
    fn hit_gain(&self, _character: &Character) -> i32 {
        self.hit
    }

    fn mana_gain(&self, _character: &Character) -> i32 {
        self.mana
    }

    fn move_gain(&self, _character: &Character) -> i32 {
        self.movement
    }
}

pub fn notices_for(notices: &[Notice], character: CharacterId) -> Vec<Notice> {
    notices
        .iter()
        .filter(|notice| notice.character() == character)
        .cloned()
        .collect()
}
