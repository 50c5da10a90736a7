//! Character state engine for a pulse-driven MUD.
//!
//! `charstate-core` owns the rules that keep a character's derived statistics
//! consistent with its natural values, worn equipment and active effects, and
//! the self-rescheduling timers that regenerate points and drive rage. All
//! mutation flows through [`engine::Engine`]; world data and pluggable rules
//! are reached through the oracles bundled in [`env::Env`].
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod notice;
pub mod schedule;
pub mod state;
pub mod stats;

pub use config::EngineConfig;
pub use engine::{Engine, EngineError};
pub use env::{
    AttributeScaler, ConfigOracle, Env, ItemApply, ItemDefinition, ItemKind, ItemOracle,
    MortalityOracle, NoItems, OracleError, PcgRng, PercentScaling, RateOracle, RngOracle,
    SkillOracle, SlowDeath, StandardMortality, StandardRates, StandardSkills,
};
pub use error::{ErrorSeverity, GameError};
pub use notice::Notice;
pub use schedule::{EventHandle, EventQueue, TimerKind, TimerOutcome};
pub use state::{
    Abilities, Ability, ApplyLocation, Character, CharacterBuilder, CharacterId, Composition,
    Effect, EffectFlags, EffectId, EffectKind, EffectStack, Equipment, EquipmentBuilder,
    ItemHandle, MergePolicy, PlayerFlags, PlayerRecord, Position, Pulse, ResourceMeter, Room,
    RoomId, Rooms, Save, Sector, Skill, Stance, TimerFlags, WearSlot, World,
};
pub use stats::StatsSnapshot;
