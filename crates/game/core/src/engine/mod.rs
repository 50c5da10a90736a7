//! Character state engine.
//!
//! The [`Engine`] is the only writer of derived character state. Every public
//! operation borrows one character together with the rooms, timer queue and
//! notice outbox, performs the change, and leaves the character fully
//! recomputed. [`Engine::pulse`] advances the clock and dispatches due timers.

mod alter;
mod context;
mod effects;
mod errors;
mod rage;
mod regen;
mod rooms;

pub(crate) use context::CharacterContext;
pub use errors::EngineError;

use tracing::{debug, warn};

use crate::env::{Env, OracleError};
use crate::notice::Notice;
use crate::schedule::{TimerKind, TimerOutcome};
use crate::state::{
    Character, CharacterId, Effect, EffectId, EffectKind, Equipment, ItemHandle, MergePolicy,
    Position, RoomId, WearSlot, World,
};

/// Engine that owns every mutation of character state in a [`World`].
pub struct Engine<'a> {
    world: &'a mut World,
    env: Env<'a>,
}

impl<'a> Engine<'a> {
    /// Creates a new engine over `world` consulting `env`.
    pub fn new(world: &'a mut World, env: Env<'a>) -> Self {
        Self { world, env }
    }

    pub fn world(&self) -> &World {
        self.world
    }

    pub fn env(&self) -> Env<'a> {
        self.env
    }

    /// Drains the notice outbox.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.world.take_notices()
    }

    /// Shorthand for looking a character up in the world.
    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.world.character(id)
    }

    fn context(&mut self, id: CharacterId) -> Result<CharacterContext<'_>, EngineError> {
        let World {
            pulse,
            characters,
            rooms,
            queue,
            notices,
            ..
        } = &mut *self.world;
        let ch = characters
            .get_mut(&id)
            .ok_or(EngineError::UnknownCharacter(id))?;
        Ok(CharacterContext {
            ch,
            rooms,
            queue,
            notices,
            env: self.env,
            now: *pulse,
        })
    }

    // ===== lifecycle =====

    /// Adopts `character`, applies its starting equipment and places it in
    /// `room`. Returns the assigned id.
    ///
    /// # Errors
    ///
    /// Fails if the room is unknown or a worn item has no definition. The
    /// character is not added in either case.
    pub fn spawn(
        &mut self,
        mut character: Character,
        room: Option<RoomId>,
    ) -> Result<CharacterId, EngineError> {
        if let Some(room) = room {
            if self.world.room(room).is_none() {
                return Err(EngineError::UnknownRoom(room));
            }
        }
        let worn: Vec<_> = character.equipment.worn().collect();
        if let Some((_, handle)) = worn
            .iter()
            .find(|(_, handle)| self.env.items().definition(*handle).is_none())
        {
            return Err(OracleError::ItemNotFound(*handle).into());
        }

        let id = self.world.allocate_character_id();
        character.id = id;
        character.equipment = Equipment::empty();
        self.world.characters.insert(id, character);

        let mut ctx = self.context(id)?;
        for (slot, handle) in worn {
            ctx.equip(slot, handle)?;
        }
        if let Some(room) = room {
            ctx.move_to_room(room)?;
        }
        ctx.effect_total();
        debug!(character = %id, ?room, "character spawned");
        Ok(id)
    }

    /// Removes a character from the world, cancelling every timer it owns.
    pub fn destroy(&mut self, id: CharacterId) -> Result<Character, EngineError> {
        let mut ctx = self.context(id)?;
        if ctx.ch.room.is_some() {
            ctx.remove_from_room();
        }
        for handle in std::mem::take(&mut ctx.ch.events) {
            ctx.queue.cancel(handle);
        }
        ctx.ch.timers = Default::default();

        let stray = self.world.queue.cancel_owned(id);
        debug_assert_eq!(stray, 0, "timers owned by {id} escaped its handle list");
        let character = self
            .world
            .characters
            .remove(&id)
            .ok_or(EngineError::UnknownCharacter(id))?;
        debug!(character = %id, "character destroyed");
        Ok(character)
    }

    pub fn move_to_room(&mut self, id: CharacterId, room: RoomId) -> Result<(), EngineError> {
        self.context(id)?.move_to_room(room)
    }

    pub fn remove_from_room(&mut self, id: CharacterId) -> Result<(), EngineError> {
        self.context(id)?.remove_from_room();
        Ok(())
    }

    /// Changes posture and re-checks flight.
    pub fn set_position(&mut self, id: CharacterId, position: Position) -> Result<(), EngineError> {
        self.context(id)?.set_position(position);
        Ok(())
    }

    pub fn set_meditating(&mut self, id: CharacterId, meditating: bool) -> Result<(), EngineError> {
        self.context(id)?.set_meditating(meditating);
        Ok(())
    }

    // ===== effects =====

    pub fn apply_effect(&mut self, id: CharacterId, effect: Effect) -> Result<EffectId, EngineError> {
        Ok(self.context(id)?.add_effect(effect))
    }

    /// Removes one effect instance.
    ///
    /// # Panics
    ///
    /// Panics if `effect` is not on the character.
    pub fn remove_effect(&mut self, id: CharacterId, effect: EffectId) -> Result<(), EngineError> {
        self.context(id)?.remove_effect(effect);
        Ok(())
    }

    /// Silently removes every instance of `kind`. Returns how many went.
    pub fn remove_effects_of_kind(
        &mut self,
        id: CharacterId,
        kind: EffectKind,
    ) -> Result<usize, EngineError> {
        Ok(self.context(id)?.remove_effects_of_kind(kind, false))
    }

    /// Removes every instance of `kind`, announcing the wear-off once.
    pub fn expire_effects_of_kind(
        &mut self,
        id: CharacterId,
        kind: EffectKind,
    ) -> Result<usize, EngineError> {
        Ok(self.context(id)?.remove_effects_of_kind(kind, true))
    }

    pub fn merge_effect(
        &mut self,
        id: CharacterId,
        effect: Effect,
        policy: MergePolicy,
    ) -> Result<EffectId, EngineError> {
        Ok(self.context(id)?.merge_effect(effect, policy))
    }

    pub fn has_effect_of_kind(&self, id: CharacterId, kind: EffectKind) -> Result<bool, EngineError> {
        self.world
            .character(id)
            .map(|ch| ch.has_effect_of_kind(kind))
            .ok_or(EngineError::UnknownCharacter(id))
    }

    /// Rebuilds every derived stat from natural values, items and effects.
    pub fn recompute(&mut self, id: CharacterId) -> Result<(), EngineError> {
        self.context(id)?.effect_total();
        Ok(())
    }

    // ===== equipment =====

    pub fn equip(
        &mut self,
        id: CharacterId,
        slot: WearSlot,
        item: ItemHandle,
    ) -> Result<(), EngineError> {
        self.context(id)?.equip(slot, item)
    }

    /// # Panics
    ///
    /// Panics if `slot` is empty.
    pub fn unequip(&mut self, id: CharacterId, slot: WearSlot) -> Result<ItemHandle, EngineError> {
        Ok(self.context(id)?.unequip(slot))
    }

    // ===== points =====

    /// Positive `amount` removes hit points. See [`Engine::hurt`] for the
    /// variant that also updates stance and regeneration.
    pub fn alter_hit(&mut self, id: CharacterId, amount: i32, cap: bool) -> Result<(), EngineError> {
        self.context(id)?.alter_hit(amount, cap);
        Ok(())
    }

    pub fn hurt(&mut self, id: CharacterId, amount: i32, cap: bool) -> Result<(), EngineError> {
        self.context(id)?.hurt(amount, cap);
        Ok(())
    }

    pub fn alter_mana(&mut self, id: CharacterId, amount: i32) -> Result<(), EngineError> {
        self.context(id)?.alter_mana(amount);
        Ok(())
    }

    pub fn alter_move(&mut self, id: CharacterId, amount: i32) -> Result<(), EngineError> {
        self.context(id)?.alter_move(amount);
        Ok(())
    }

    // ===== timers =====

    /// Arms `kind` if it is not already pending and has work to do.
    pub fn arm(&mut self, id: CharacterId, kind: TimerKind) -> Result<(), EngineError> {
        self.context(id)?.arm(kind);
        Ok(())
    }

    pub fn check_regen_rates(&mut self, id: CharacterId) -> Result<(), EngineError> {
        self.context(id)?.check_regen_rates();
        Ok(())
    }

    /// Runs a timer handler immediately, outside the queue. If the handler
    /// finishes, the pending bit is cleared and any queued event of that kind
    /// is cancelled; a reschedule leaves the queued event where it was.
    pub fn run_timer(
        &mut self,
        id: CharacterId,
        kind: TimerKind,
    ) -> Result<TimerOutcome, EngineError> {
        let mut ctx = self.context(id)?;
        let outcome = ctx.run_timer(kind);
        if outcome == TimerOutcome::Done {
            ctx.cancel_queued(kind);
        }
        Ok(outcome)
    }

    pub fn start_berserking(&mut self, id: CharacterId) -> Result<(), EngineError> {
        self.context(id)?.start_berserking();
        Ok(())
    }

    pub fn stop_berserking(&mut self, id: CharacterId) -> Result<(), EngineError> {
        self.context(id)?.stop_berserking();
        Ok(())
    }

    // ===== clock =====

    /// Advances the clock by one pulse and fires every timer now due.
    /// Returns how many fired.
    pub fn pulse(&mut self) -> usize {
        self.world.pulse = self.world.pulse + 1;
        let now = self.world.pulse;
        let mut fired = 0;

        while let Some(due) = self.world.queue.pop_due(now) {
            let outcome = match self.context(due.owner) {
                Ok(mut ctx) => ctx.run_timer(due.kind),
                Err(_) => {
                    warn!(owner = %due.owner, kind = ?due.kind, "dropping timer of a missing character");
                    continue;
                }
            };
            fired += 1;
            match outcome {
                TimerOutcome::Reschedule(delay) => self.world.queue.requeue(due, now, delay),
                TimerOutcome::Done => {
                    if let Some(ch) = self.world.characters.get_mut(&due.owner) {
                        ch.events.retain(|handle| *handle != due.handle);
                    }
                }
            }
        }
        fired
    }

    /// Runs `pulses` pulses back to back. Returns the number of timers fired.
    pub fn advance(&mut self, pulses: u64) -> usize {
        (0..pulses).map(|_| self.pulse()).sum()
    }

    /// Runs pulses until no timers remain or `limit` pulses have passed.
    /// Returns the number of pulses run.
    pub fn run_until_idle(&mut self, limit: u64) -> u64 {
        let mut ran = 0;
        while ran < limit && !self.world.queue.is_empty() {
            self.pulse();
            ran += 1;
        }
        ran
    }
}
