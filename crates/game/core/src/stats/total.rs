//! The stat recomputer.
//!
//! Derived stats are rebuilt from scratch: unapply every worn item and effect,
//! reset to natural values, reapply everything, then derive the ability-based
//! bonuses and clamp. Running it twice in a row changes nothing.

use tracing::warn;

use super::limits::{
    MAX_AC, MAX_ABILITY, MAX_DAMROLL, MAX_HITROLL, MAX_PERCEPTION, MIN_AC, MIN_ABILITY,
    MIN_DAMROLL, MIN_HITROLL, base_perception, con_bonus, static_ac,
};
use super::modify::apply_modifier;
use crate::engine::CharacterContext;
use crate::env::ItemDefinition;
use crate::state::{ApplyLocation, Effect, EffectFlags, WearSlot};

impl CharacterContext<'_> {
    pub(crate) fn effect_total(&mut self) {
        let old_max_hit = self.ch.hit.maximum;
        let worn = self.worn_definitions();
        let effects = self.ch.effects.records();

        for (slot, item) in &worn {
            self.apply_item(*slot, item, false);
        }
        for effect in &effects {
            self.apply_effect_record(effect, false);
        }

        self.reset_to_natural();

        for (slot, item) in &worn {
            self.apply_item(*slot, item, true);
        }
        for effect in &effects {
            self.apply_effect_record(effect, true);
        }

        self.ch.scaled = self.env.scaling().scale(self.ch);

        if self.ch.npc {
            self.ch.actual.clamp_all(MIN_ABILITY, MAX_ABILITY);
        } else {
            let level = self.ch.level;
            let scaled = self.ch.scaled;

            self.ch.armor_class -= static_ac(scaled.dex);
            self.ch.armor_class = self.ch.armor_class.clamp(MIN_AC, MAX_AC);

            self.ch.hit.maximum += con_bonus(scaled.con, level);
            self.alter_hit(old_max_hit - self.ch.hit.maximum, true);

            self.ch.perception = self.ch.perception.clamp(0, MAX_PERCEPTION);

            self.ch.damroll = self.ch.damroll.clamp(MIN_DAMROLL, MAX_DAMROLL);
            self.ch.hitroll = self.ch.hitroll.clamp(MIN_HITROLL, MAX_HITROLL);
        }

        self.check_regen_rates();

        if self.ch.room.is_some() {
            self.check_flight();
            self.check_douse();
        }
    }

    /// Definitions of everything worn, in slot order.
    pub(crate) fn worn_definitions(&self) -> Vec<(WearSlot, ItemDefinition)> {
        let items = self.env.items();
        self.ch
            .equipment
            .worn()
            .filter_map(|(slot, handle)| match items.definition(handle) {
                Some(definition) => Some((slot, definition)),
                None => {
                    warn!(character = %self.ch.id, ?slot, ?handle, "worn item has no definition");
                    None
                }
            })
            .collect()
    }

    /// Armor, flags and modifiers of one worn item.
    pub(crate) fn apply_item(&mut self, slot: WearSlot, item: &ItemDefinition, applying: bool) {
        if let Some(armor) = item.armor() {
            let armor = armor * slot.armor_factor();
            if applying {
                self.ch.armor_class -= armor;
            } else {
                self.ch.armor_class += armor;
            }
        }
        apply_modifier(
            self.ch,
            self.rooms,
            ApplyLocation::None,
            0,
            item.flags,
            applying,
        );
        for apply in &item.applies {
            apply_modifier(
                self.ch,
                self.rooms,
                apply.location,
                apply.modifier,
                EffectFlags::empty(),
                applying,
            );
        }
    }

    pub(crate) fn apply_effect_record(&mut self, effect: &Effect, applying: bool) {
        apply_modifier(
            self.ch,
            self.rooms,
            effect.location,
            effect.modifier,
            effect.flags,
            applying,
        );
    }

    /// Resets the fields every recompute rebuilds. Player bases come from the
    /// persisted record; the perception baseline uses natural intelligence and
    /// wisdom, before any modifier is back on.
    fn reset_to_natural(&mut self) {
        let ch = &mut *self.ch;
        ch.actual = ch.natural;
        ch.composition = ch.base_composition;
        if !ch.npc {
            ch.damroll = ch.record.base_damroll;
            ch.hitroll = ch.record.base_hitroll;
            ch.armor_class = MAX_AC;
            ch.hit.maximum = ch.record.base_max_hit;
            ch.perception = base_perception(ch.level, ch.natural.int, ch.natural.wis);
        }
    }
}
