use crate::config::EngineConfig;
use crate::state::{Abilities, Character, Composition, EffectFlags, ResourceMeter};

/// Every value the stat recomputer derives, captured for comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsSnapshot {
    pub actual: Abilities,
    pub scaled: Abilities,
    pub hit: ResourceMeter,
    pub mana: ResourceMeter,
    pub movement: ResourceMeter,
    pub armor_class: i32,
    pub hitroll: i32,
    pub damroll: i32,
    pub saves: [i32; EngineConfig::NUM_SAVES],
    pub hit_regen: i32,
    pub mana_regen: i32,
    pub perception: i32,
    pub hiddenness: i32,
    pub composition: Composition,
    pub flags: EffectFlags,
    pub age_modifier: i32,
    pub weight: i32,
    pub height: i32,
    pub size: i32,
}

impl StatsSnapshot {
    pub fn capture(ch: &Character) -> Self {
        Self {
            actual: ch.actual,
            scaled: ch.scaled,
            hit: ch.hit,
            mana: ch.mana,
            movement: ch.movement,
            armor_class: ch.armor_class,
            hitroll: ch.hitroll,
            damroll: ch.damroll,
            saves: ch.saves,
            hit_regen: ch.hit_regen,
            mana_regen: ch.mana_regen,
            perception: ch.perception,
            hiddenness: ch.hiddenness,
            composition: ch.composition,
            flags: ch.effect_flags,
            age_modifier: ch.age_modifier,
            weight: ch.weight,
            height: ch.height,
            size: ch.size,
        }
    }
}

impl Character {
    /// Snapshot of the derived stats.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot::capture(self)
    }
}
