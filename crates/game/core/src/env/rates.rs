//! Regeneration rate oracle.
//!
//! Rates are points gained per game hour. The regen timers turn a rate into a
//! delay of `pulses_per_game_hour / rate` pulses between single-point steps.

use crate::state::{Character, EffectFlags, Position, Stance};

/// Per-hour regeneration rates for a character in its current condition.
pub trait RateOracle: Send + Sync {
    fn hit_gain(&self, character: &Character) -> i32;
    fn mana_gain(&self, character: &Character) -> i32;
    fn move_gain(&self, character: &Character) -> i32;
}

/// Age-curve based rates with stance multipliers.
///
/// NPCs regenerate at a flat rate tied to their level. Players follow an
/// age curve, get a share of their maximum, benefit from regen bonuses, and
/// recover faster when resting or asleep. Poison quarters every rate.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardRates;

impl StandardRates {
    /// Cap on the regen bonus a character can carry.
    pub const MAX_REGEN_BONUS: i32 = 100;

    /// Piecewise-linear curve over age with breakpoints at 15, 30, 45, 60 and 80.
    pub fn age_curve(age: i32, points: [i32; 7]) -> i32 {
        let [p0, p1, p2, p3, p4, p5, p6] = points;
        match age {
            ..15 => p0,
            15..=29 => p1 + ((age - 15) * (p2 - p1)) / 15,
            30..=44 => p2 + ((age - 30) * (p3 - p2)) / 15,
            45..=59 => p3 + ((age - 45) * (p4 - p3)) / 15,
            60..=79 => p4 + ((age - 60) * (p5 - p4)) / 20,
            _ => p6,
        }
    }

    fn age(character: &Character) -> i32 {
        character.age + character.age_modifier
    }

    /// Sleep quintuples, rest triples, sitting adds half, fighting halves.
    fn body_multiplier(character: &Character, gain: i32) -> i32 {
        match character.stance() {
            Stance::Sleeping => gain + (gain << 2),
            Stance::Resting => gain + (gain << 1),
            Stance::Fighting => gain >> 1,
            _ if character.position == Position::Sitting => gain + (gain >> 1),
            _ => gain,
        }
    }

    fn poisoned(character: &Character, gain: i32) -> i32 {
        if character.has_flag(EffectFlags::POISON) {
            gain >> 2
        } else {
            gain
        }
    }
}

impl RateOracle for StandardRates {
    fn hit_gain(&self, character: &Character) -> i32 {
        let gain = if character.is_npc() {
            character.level
        } else {
            let curve = Self::age_curve(Self::age(character), [8, 12, 20, 32, 16, 10, 4]);
            let gain = (character.hit().maximum / 20 + curve) / 2;
            let gain = gain + character.hit_regen_bonus().min(Self::MAX_REGEN_BONUS) + 2;
            Self::body_multiplier(character, gain)
        };
        Self::poisoned(character, gain)
    }

    fn mana_gain(&self, character: &Character) -> i32 {
        let gain = if character.is_npc() {
            character.level
        } else {
            let gain = Self::age_curve(Self::age(character), [4, 8, 12, 16, 12, 10, 8])
                + character.mana_regen_bonus().min(Self::MAX_REGEN_BONUS);
            match character.stance() {
                Stance::Sleeping => gain << 1,
                Stance::Resting => gain + (gain >> 1),
                _ if character.position == Position::Sitting => gain + (gain >> 2),
                _ => gain,
            }
        };
        Self::poisoned(character, gain)
    }

    fn move_gain(&self, character: &Character) -> i32 {
        if character.is_npc() {
            return character.movement().maximum / 10 + character.level;
        }
        let curve = Self::age_curve(Self::age(character), [2, 3, 3, 5, 4, 3, 1]);
        let gain = (character.movement().maximum / 10 + curve) / 2;
        let gain = Self::poisoned(character, Self::body_multiplier(character, gain));
        gain + (gain >> 1)
    }
}
