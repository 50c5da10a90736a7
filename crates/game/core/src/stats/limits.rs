//! Stat bounds and the table-driven bonuses a player gets from abilities.

pub const MIN_AC: i32 = -100;
pub const MAX_AC: i32 = 100;
pub const MIN_HITROLL: i32 = -40;
pub const MAX_HITROLL: i32 = 40;
pub const MIN_DAMROLL: i32 = -40;
pub const MAX_DAMROLL: i32 = 40;
pub const MIN_ABILITY: i32 = 25;
pub const MAX_ABILITY: i32 = 100;
pub const MAX_PERCEPTION: i32 = 1000;
pub const MAX_HIDDENNESS: i32 = 1000;

/// At or below: dead.
pub const HIT_DEAD: i32 = -11;
/// At or below: mortally wounded.
pub const HIT_MORTALLY_WOUNDED: i32 = -6;
/// At or below: incapacitated.
pub const HIT_INCAPACITATED: i32 = -3;

/// Rage above this tips a character into berserking.
pub const RAGE_CRAZED: i32 = 1000;

/// Armor class granted by dexterity.
pub fn static_ac(dex: i32) -> i32 {
    match dex {
        ..=32 => 10,
        33..=40 => 15,
        41..=56 => 20,
        57..=64 => 25,
        65..=72 => 30,
        73..=76 => 35,
        77..=80 => 40,
        81..=84 => 45,
        _ => 50,
    }
}

/// Extra maximum hit points granted by constitution at `level`.
pub fn con_bonus(con: i32, level: i32) -> i32 {
    match con {
        ..10 => -level,
        10..68 => 0,
        68..76 => level,
        76..92 => 2 * level,
        92..96 => 3 * level,
        _ => 4 * level,
    }
}

/// Perception before clamping: level times the mental average over thirty.
pub fn base_perception(level: i32, int: i32, wis: i32) -> i32 {
    level * ((int + wis) / 30)
}

/// True if taking `damage` would leave `hit` at or below the death threshold.
pub fn damage_will_kill(hit: i32, damage: i32) -> bool {
    hit - damage <= HIT_DEAD
}
