//! The apply primitive: add or remove one modifier on one stat.
//!
//! Applying and then unapplying the same `(location, modifier, flags)` leaves
//! every stat where it was, with the documented exceptions of composition
//! (unapply restores the base material) and hiddenness (clamped, and reset
//! when camouflage is lost).

use tracing::warn;

use super::limits::MAX_HIDDENNESS;
use crate::state::{
    ApplyLocation, Character, Composition, EffectFlags, Rooms, Save,
};

/// Adds (`applying`) or removes one modifier and its flags.
pub(crate) fn apply_modifier(
    ch: &mut Character,
    rooms: &mut Rooms,
    location: ApplyLocation,
    modifier: i32,
    flags: EffectFlags,
    applying: bool,
) {
    let modifier = if applying {
        grant_flags(ch, rooms, flags);
        modifier
    } else {
        revoke_flags(ch, rooms, flags);
        -modifier
    };

    match location {
        ApplyLocation::None
        | ApplyLocation::Class
        | ApplyLocation::Gold
        | ApplyLocation::Exp => {}
        ApplyLocation::Str => ch.actual.str += modifier,
        ApplyLocation::Dex => ch.actual.dex += modifier,
        ApplyLocation::Int => ch.actual.int += modifier,
        ApplyLocation::Wis => ch.actual.wis += modifier,
        ApplyLocation::Con => ch.actual.con += modifier,
        ApplyLocation::Cha => ch.actual.cha += modifier,
        ApplyLocation::Level => ch.level += modifier,
        ApplyLocation::Age => ch.age_modifier += modifier,
        ApplyLocation::CharWeight => ch.weight += modifier,
        ApplyLocation::CharHeight => ch.height += modifier,
        ApplyLocation::Size => ch.size += modifier,
        ApplyLocation::Mana => ch.mana.maximum += modifier,
        ApplyLocation::Hit => {
            ch.hit.maximum += modifier;
            ch.hit.current += modifier;
        }
        ApplyLocation::Move => {
            ch.movement.maximum += modifier;
            ch.movement.current += modifier;
        }
        // Lower armor class is better
        ApplyLocation::Ac => ch.armor_class -= modifier,
        ApplyLocation::Hitroll => ch.hitroll += modifier,
        ApplyLocation::Damroll => ch.damroll += modifier,
        ApplyLocation::SavingPara => ch.saves[Save::Paralysis as usize] += modifier,
        ApplyLocation::SavingRod => ch.saves[Save::Rod as usize] += modifier,
        ApplyLocation::SavingPetri => ch.saves[Save::Petrification as usize] += modifier,
        ApplyLocation::SavingBreath => ch.saves[Save::Breath as usize] += modifier,
        ApplyLocation::SavingSpell => ch.saves[Save::Spell as usize] += modifier,
        ApplyLocation::HitRegen => ch.hit_regen += modifier,
        ApplyLocation::ManaRegen => ch.mana_regen += modifier,
        ApplyLocation::Perception => ch.perception += modifier,
        ApplyLocation::Hiddenness => {
            ch.hiddenness = (ch.hiddenness + modifier).clamp(0, MAX_HIDDENNESS);
        }
        ApplyLocation::Composition => {
            if applying {
                match u8::try_from(modifier).ok().and_then(Composition::from_repr) {
                    Some(composition) => ch.composition = composition,
                    None => warn!(character = %ch.id, modifier, "unknown composition id"),
                }
            } else {
                ch.composition = ch.base_composition;
            }
        }
    }
}

fn grant_flags(ch: &mut Character, rooms: &mut Rooms, flags: EffectFlags) {
    if flags.contains(EffectFlags::LIGHT) && !ch.effect_flags.contains(EffectFlags::LIGHT) {
        if let Some(room) = ch.room.and_then(|id| rooms.get_mut(&id)) {
            room.light += 1;
        }
    }
    ch.effect_flags |= flags;
}

fn revoke_flags(ch: &mut Character, rooms: &mut Rooms, flags: EffectFlags) {
    if flags.contains(EffectFlags::LIGHT) && ch.effect_flags.contains(EffectFlags::LIGHT) {
        if let Some(room) = ch.room.and_then(|id| rooms.get_mut(&id)) {
            room.light -= 1;
        }
    }
    if flags.contains(EffectFlags::CAMOUFLAGED) {
        ch.hiddenness = 0;
    }
    ch.effect_flags.remove(flags);
}
