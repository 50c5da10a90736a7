//! Room placement, worn equipment and the environmental checks tied to them.
//!
//! A character contributes one point of room light per lit light source it
//! wears plus one if it carries the light flag. Every path that changes any of
//! those (entering, leaving, equipping, unequipping, effects) adjusts the
//! room by the same amount in both directions.

use tracing::warn;

use super::{CharacterContext, EngineError};
use crate::env::OracleError;
use crate::notice::Notice;
use crate::schedule::TimerKind;
use crate::state::{EffectFlags, ItemHandle, Position, RoomId, Sector, WearSlot};

impl CharacterContext<'_> {
    /// Light this character brings into a room.
    pub(crate) fn light_level(&self) -> i32 {
        let lit = self
            .worn_definitions()
            .iter()
            .filter(|(_, item)| item.is_lit())
            .count() as i32;
        lit + i32::from(self.ch.effect_flags.contains(EffectFlags::LIGHT))
    }

    fn adjust_room_light(&mut self, delta: i32) {
        if let Some(room) = self.ch.room.and_then(|id| self.rooms.get_mut(&id)) {
            room.light += delta;
        }
    }

    pub(crate) fn move_to_room(&mut self, room: RoomId) -> Result<(), EngineError> {
        if !self.rooms.contains_key(&room) {
            return Err(EngineError::UnknownRoom(room));
        }
        if self.ch.room.is_some() {
            self.remove_from_room();
        }

        self.ch.room = Some(room);
        let light = self.light_level();
        self.adjust_room_light(light);

        self.check_douse();
        if self.sector() == Some(Sector::Air) {
            self.check_flight();
        }
        self.check_regen_rates();
        Ok(())
    }

    pub(crate) fn remove_from_room(&mut self) {
        if self.ch.room.is_none() {
            warn!(character = %self.ch.id, "removing a character that is in no room");
            return;
        }
        self.ch.fighting = false;
        let light = self.light_level();
        self.adjust_room_light(-light);
        self.ch.room = None;
    }

    pub(crate) fn equip(&mut self, slot: WearSlot, handle: ItemHandle) -> Result<(), EngineError> {
        if self.ch.equipment.is_occupied(slot) {
            return Err(EngineError::SlotOccupied {
                character: self.ch.id,
                slot,
            });
        }
        let item = self
            .env
            .items()
            .definition(handle)
            .ok_or(OracleError::ItemNotFound(handle))?;

        self.ch.equipment.put(slot, handle);
        if item.is_lit() {
            self.adjust_room_light(1);
        }
        self.apply_item(slot, &item, true);
        self.effect_total();
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if `slot` is empty.
    pub(crate) fn unequip(&mut self, slot: WearSlot) -> ItemHandle {
        let Some(handle) = self.ch.equipment.take(slot) else {
            panic!("character {} wears nothing in {slot:?}", self.ch.id);
        };
        match self.env.items().definition(handle) {
            Some(item) => {
                if item.is_lit() {
                    self.adjust_room_light(-1);
                }
                self.apply_item(slot, &item, false);
            }
            None => warn!(character = %self.ch.id, ?slot, ?handle, "unequipped item has no definition"),
        }
        self.effect_total();
        handle
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.ch.position = position;
        if self.ch.room.is_some() {
            self.check_flight();
        }
    }

    /// Airborne consistency: in open air a character must be flying with the
    /// flight flag or it falls; elsewhere a flier that lost the flag lands on
    /// the next pulse.
    pub(crate) fn check_flight(&mut self) {
        let Some(sector) = self.sector() else {
            return;
        };
        let can_fly = self.ch.effect_flags.contains(EffectFlags::FLY);
        if sector == Sector::Air {
            if !can_fly || self.ch.position != Position::Flying {
                if self.ch.position == Position::Flying {
                    self.ch.position = Position::Standing;
                }
                self.notify(Notice::StartFalling {
                    character: self.ch.id,
                });
            }
        } else if self.ch.position == Position::Flying && !can_fly {
            self.arm(TimerKind::FallToGround);
        }
    }

    /// Water puts out a burning character by removing what sets it alight.
    pub(crate) fn check_douse(&mut self) {
        if !self.ch.effect_flags.contains(EffectFlags::ON_FIRE)
            || !self.sector().is_some_and(|sector| sector.is_water())
        {
            return;
        }
        let burning = self.ch.effects.ids_with_flags(EffectFlags::ON_FIRE);
        if burning.is_empty() {
            return;
        }
        self.notify(Notice::Doused {
            character: self.ch.id,
        });
        for id in burning {
            if let Some(effect) = self.ch.effects.take(id) {
                self.apply_effect_record(&effect, false);
            }
        }
        self.effect_total();
    }
}
