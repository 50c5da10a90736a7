pub mod character;
pub mod common;
pub mod effect;
pub mod effects;
pub mod equipment;
pub mod room;

// Re-export character types
pub use character::{
    Abilities, Ability, Character, CharacterBuilder, Composition, PlayerFlags, PlayerRecord,
    Position, Save, Skill, Stance, TimerFlags,
};

// Re-export common types
pub use common::{CharacterId, EffectId, ItemHandle, Pulse, ResourceMeter, RoomId};

// Re-export effect types
pub use effect::{ApplyLocation, Effect, EffectFlags, EffectKind, MergePolicy};
pub use effects::EffectStack;

// Re-export equipment types
pub use equipment::{Equipment, EquipmentBuilder, WearSlot};

// Re-export room types
pub use room::{Room, Sector};
