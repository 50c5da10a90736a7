//! Authoritative world state.
//!
//! [`World`] owns every character, every room, the pulse clock, the timer
//! queue and the notice outbox. Callers read it freely but mutate characters
//! only through [`crate::engine::Engine`], which keeps derived stats, room
//! light and pending timers consistent.
pub mod types;

use std::collections::BTreeMap;

use crate::notice::Notice;
use crate::schedule::EventQueue;
pub use types::{
    Abilities, Ability, ApplyLocation, Character, CharacterBuilder, CharacterId, Composition,
    Effect, EffectFlags, EffectId, EffectKind, EffectStack, Equipment, EquipmentBuilder,
    ItemHandle, MergePolicy, PlayerFlags, PlayerRecord, Position, Pulse, ResourceMeter, Room,
    RoomId, Save, Sector, Skill, Stance, TimerFlags, WearSlot,
};

/// Rooms keyed by id.
pub type Rooms = BTreeMap<RoomId, Room>;

/// Canonical snapshot of the simulated world.
#[derive(Clone, Debug, Default)]
pub struct World {
    /// Current pulse. Advanced only by the engine.
    pub(crate) pulse: Pulse,

    /// Sequential character id allocator (monotonically increasing, never reused).
    next_character_id: u32,

    pub(crate) characters: BTreeMap<CharacterId, Character>,
    pub(crate) rooms: Rooms,
    pub(crate) queue: EventQueue,
    pub(crate) notices: Vec<Notice>,
}

impl World {
    pub fn new() -> Self {
        Self {
            next_character_id: 1,
            ..Self::default()
        }
    }

    pub fn pulse(&self) -> Pulse {
        self.pulse
    }

    /// Adds or replaces a room.
    pub fn add_room(&mut self, room: Room) {
        self.rooms.insert(room.id, room);
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(&id)
    }

    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.characters.values()
    }

    pub fn queue(&self) -> &EventQueue {
        &self.queue
    }

    /// Notices emitted since the last drain, oldest first.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Removes and returns all pending notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Allocates a new unique CharacterId.
    ///
    /// # Panics
    ///
    /// Panics if we've exhausted all available IDs.
    pub(crate) fn allocate_character_id(&mut self) -> CharacterId {
        let id = CharacterId(self.next_character_id.max(1));
        self.next_character_id = id.0.checked_add(1).expect("CharacterId overflow");
        id
    }
}
