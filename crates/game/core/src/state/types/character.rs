//! Character record and the enums describing its condition.
//!
//! # Invariants
//!
//! - Derived stats (`actual`, maxima, armor class, rolls, saves, perception,
//!   composition, aggregated flags) always equal the result of a full
//!   recompute from natural stats, worn items and the effect stack. Only the
//!   engine mutates them, and it recomputes after every change.
//! - A bit in `timers` is set exactly while a timer of that kind is queued for
//!   this character.

use bitflags::bitflags;
use strum::EnumCount;

use super::{
    CharacterId, EffectFlags, EffectKind, EffectStack, Equipment, ResourceMeter, RoomId,
};
use crate::config::EngineConfig;
use crate::schedule::EventHandle;

/// The six base abilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ability {
    Str,
    Dex,
    Int,
    Wis,
    Con,
    Cha,
}

/// Scores for the six base abilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Abilities {
    pub str: i32,
    pub dex: i32,
    pub int: i32,
    pub wis: i32,
    pub con: i32,
    pub cha: i32,
}

impl Abilities {
    pub const fn new(str: i32, dex: i32, int: i32, wis: i32, con: i32, cha: i32) -> Self {
        Self {
            str,
            dex,
            int,
            wis,
            con,
            cha,
        }
    }

    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value, value, value)
    }

    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Str => self.str,
            Ability::Dex => self.dex,
            Ability::Int => self.int,
            Ability::Wis => self.wis,
            Ability::Con => self.con,
            Ability::Cha => self.cha,
        }
    }

    pub fn get_mut(&mut self, ability: Ability) -> &mut i32 {
        match ability {
            Ability::Str => &mut self.str,
            Ability::Dex => &mut self.dex,
            Ability::Int => &mut self.int,
            Ability::Wis => &mut self.wis,
            Ability::Con => &mut self.con,
            Ability::Cha => &mut self.cha,
        }
    }

    pub fn clamp_all(&mut self, min: i32, max: i32) {
        for value in [
            &mut self.str,
            &mut self.dex,
            &mut self.int,
            &mut self.wis,
            &mut self.con,
            &mut self.cha,
        ] {
            *value = (*value).clamp(min, max);
        }
    }
}

/// Health-driven condition, ordered from worst to best.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Stance {
    Dead = 0,
    MortallyWounded,
    Incapacitated,
    Stunned,
    Sleeping,
    Resting,
    #[default]
    Alert,
    Fighting,
}

impl Stance {
    /// Stunned or worse: the character bleeds instead of healing.
    pub const fn is_helpless(self) -> bool {
        (self as u8) <= (Self::Stunned as u8)
    }
}

/// Body posture, ordered from lowest to highest.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Position {
    Prone = 0,
    Sitting,
    Kneeling,
    #[default]
    Standing,
    Flying,
}

/// Material a character's body is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::FromRepr, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Composition {
    #[default]
    Flesh = 0,
    Earth,
    Air,
    Fire,
    Water,
    Ice,
    Mist,
    Ether,
    Metal,
    Stone,
    Bone,
    Lava,
    Plant,
}

/// Saving throw categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumCount, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Save {
    Paralysis,
    Rod,
    Petrification,
    Breath,
    Spell,
}

const _: () = assert!(Save::COUNT == EngineConfig::NUM_SAVES);

/// Skills the engine itself consults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumCount, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Skill {
    Berserk,
    Meditate,
}

bitflags! {
    /// Persistent player toggles.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct PlayerFlags: u8 {
        const MEDITATE = 1 << 0;
    }
}

bitflags! {
    /// Pending-timer bits, one per [`crate::schedule::TimerKind`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TimerFlags: u8 {
        const HIT_REGEN      = 1 << 0;
        const MANA_REGEN     = 1 << 1;
        const MOVE_REGEN     = 1 << 2;
        const RAGE           = 1 << 3;
        const FALL_TO_GROUND = 1 << 4;
    }
}

/// Values that persist for player characters and seed every recompute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerRecord {
    pub base_hitroll: i32,
    pub base_damroll: i32,
    pub base_max_hit: i32,
}

/// A player or NPC.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub(crate) id: CharacterId,
    pub name: String,
    pub(crate) npc: bool,
    pub level: i32,
    /// Chronological age in years. Effects adjust `age_modifier` instead.
    pub age: i32,
    pub age_modifier: i32,
    pub weight: i32,
    pub height: i32,
    pub size: i32,

    // === Base and derived abilities ===
    pub natural: Abilities,
    pub(crate) actual: Abilities,
    /// Abilities after racial scaling, filled by the attribute scaler.
    pub(crate) scaled: Abilities,

    // === Vitals ===
    pub(crate) hit: ResourceMeter,
    pub(crate) mana: ResourceMeter,
    pub(crate) movement: ResourceMeter,
    pub rage: i32,

    // === Derived combat values ===
    pub(crate) armor_class: i32,
    pub(crate) hitroll: i32,
    pub(crate) damroll: i32,
    pub(crate) saves: [i32; EngineConfig::NUM_SAVES],
    pub(crate) hit_regen: i32,
    pub(crate) mana_regen: i32,
    pub(crate) perception: i32,
    pub(crate) hiddenness: i32,
    pub(crate) composition: Composition,
    pub base_composition: Composition,
    pub(crate) effect_flags: EffectFlags,

    pub record: PlayerRecord,
    pub(crate) skills: [u8; Skill::COUNT],
    pub player_flags: PlayerFlags,

    // === Condition ===
    pub(crate) stance: Stance,
    pub position: Position,
    pub fighting: bool,
    /// Attackers currently engaging this character.
    pub attackers: u32,
    pub(crate) deceased: bool,

    // === Placement and attachments ===
    pub(crate) room: Option<RoomId>,
    pub(crate) equipment: Equipment,
    pub(crate) effects: EffectStack,
    pub(crate) timers: TimerFlags,
    pub(crate) events: Vec<EventHandle>,
}

impl Character {
    /// Creates a builder for a character called `name`.
    pub fn builder(name: impl Into<String>) -> CharacterBuilder {
        CharacterBuilder::new(name)
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn is_npc(&self) -> bool {
        self.npc
    }

    pub fn actual(&self) -> &Abilities {
        &self.actual
    }

    pub fn scaled(&self) -> &Abilities {
        &self.scaled
    }

    pub fn hit(&self) -> ResourceMeter {
        self.hit
    }

    pub fn mana(&self) -> ResourceMeter {
        self.mana
    }

    pub fn movement(&self) -> ResourceMeter {
        self.movement
    }

    pub fn armor_class(&self) -> i32 {
        self.armor_class
    }

    pub fn hitroll(&self) -> i32 {
        self.hitroll
    }

    pub fn damroll(&self) -> i32 {
        self.damroll
    }

    pub fn save(&self, save: Save) -> i32 {
        self.saves[save as usize]
    }

    pub fn hit_regen_bonus(&self) -> i32 {
        self.hit_regen
    }

    pub fn mana_regen_bonus(&self) -> i32 {
        self.mana_regen
    }

    pub fn perception(&self) -> i32 {
        self.perception
    }

    pub fn hiddenness(&self) -> i32 {
        self.hiddenness
    }

    pub fn composition(&self) -> Composition {
        self.composition
    }

    pub fn effect_flags(&self) -> EffectFlags {
        self.effect_flags
    }

    pub fn has_flag(&self, flag: EffectFlags) -> bool {
        self.effect_flags.contains(flag)
    }

    pub fn skill(&self, skill: Skill) -> u8 {
        self.skills[skill as usize]
    }

    pub fn set_skill(&mut self, skill: Skill, proficiency: u8) {
        self.skills[skill as usize] = proficiency;
    }

    pub fn stance(&self) -> Stance {
        self.stance
    }

    pub fn is_deceased(&self) -> bool {
        self.deceased
    }

    pub fn is_meditating(&self) -> bool {
        self.player_flags.contains(PlayerFlags::MEDITATE)
    }

    pub fn is_berserking(&self) -> bool {
        self.effect_flags.contains(EffectFlags::BERSERK)
    }

    pub fn room(&self) -> Option<RoomId> {
        self.room
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn effects(&self) -> &EffectStack {
        &self.effects
    }

    /// True if any effect instance of `kind` is on the character.
    pub fn has_effect_of_kind(&self, kind: EffectKind) -> bool {
        self.effects.has_kind(kind)
    }

    /// Timers currently queued for this character.
    pub fn pending_timers(&self) -> TimerFlags {
        self.timers
    }

    pub fn pending_events(&self) -> &[EventHandle] {
        &self.events
    }
}

/// Builder for constructing characters before they are spawned.
///
/// Derived values are left for the engine's first recompute; the builder only
/// fills in natural stats, maxima and condition.
#[derive(Clone, Debug)]
pub struct CharacterBuilder {
    name: String,
    npc: bool,
    level: i32,
    age: i32,
    natural: Abilities,
    max_hit: i32,
    hit: Option<i32>,
    max_mana: i32,
    mana: Option<i32>,
    max_move: i32,
    movement: Option<i32>,
    hitroll: i32,
    damroll: i32,
    rage: i32,
    skills: [u8; Skill::COUNT],
    player_flags: PlayerFlags,
    innate_flags: EffectFlags,
    composition: Composition,
    stance: Stance,
    position: Position,
    fighting: bool,
    equipment: Equipment,
}

impl CharacterBuilder {
    pub const DEFAULT_ABILITY: i32 = 50;

    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            npc: false,
            level: 1,
            age: 20,
            natural: Abilities::uniform(Self::DEFAULT_ABILITY),
            max_hit: 20,
            hit: None,
            max_mana: 100,
            mana: None,
            max_move: 100,
            movement: None,
            hitroll: 0,
            damroll: 0,
            rage: 0,
            skills: [0; Skill::COUNT],
            player_flags: PlayerFlags::empty(),
            innate_flags: EffectFlags::empty(),
            composition: Composition::Flesh,
            stance: Stance::Alert,
            position: Position::Standing,
            fighting: false,
            equipment: Equipment::empty(),
        }
    }

    pub fn npc(mut self) -> Self {
        self.npc = true;
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn abilities(mut self, natural: Abilities) -> Self {
        self.natural = natural;
        self
    }

    /// Sets maximum hit points. For players this is also the persisted base.
    pub fn max_hit(mut self, max_hit: i32) -> Self {
        self.max_hit = max_hit;
        self
    }

    /// Current hit points; defaults to the maximum.
    pub fn hit(mut self, hit: i32) -> Self {
        self.hit = Some(hit);
        self
    }

    pub fn max_mana(mut self, max_mana: i32) -> Self {
        self.max_mana = max_mana;
        self
    }

    pub fn mana(mut self, mana: i32) -> Self {
        self.mana = Some(mana);
        self
    }

    pub fn max_move(mut self, max_move: i32) -> Self {
        self.max_move = max_move;
        self
    }

    pub fn movement(mut self, movement: i32) -> Self {
        self.movement = Some(movement);
        self
    }

    pub fn rolls(mut self, hitroll: i32, damroll: i32) -> Self {
        self.hitroll = hitroll;
        self.damroll = damroll;
        self
    }

    pub fn rage(mut self, rage: i32) -> Self {
        self.rage = rage;
        self
    }

    pub fn skill(mut self, skill: Skill, proficiency: u8) -> Self {
        self.skills[skill as usize] = proficiency;
        self
    }

    pub fn meditating(mut self) -> Self {
        self.player_flags |= PlayerFlags::MEDITATE;
        self
    }

    /// Flags the character has without any effect granting them.
    pub fn innate_flags(mut self, flags: EffectFlags) -> Self {
        self.innate_flags = flags;
        self
    }

    pub fn composition(mut self, composition: Composition) -> Self {
        self.composition = composition;
        self
    }

    pub fn stance(mut self, stance: Stance) -> Self {
        self.stance = stance;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn fighting(mut self) -> Self {
        self.fighting = true;
        self.stance = Stance::Fighting;
        self
    }

    pub fn equipment(mut self, equipment: Equipment) -> Self {
        self.equipment = equipment;
        self
    }

    /// Builds the character. The id is assigned when the world adopts it, and
    /// worn items take effect when the engine spawns it.
    pub fn build(self) -> Character {
        Character {
            id: CharacterId(0),
            name: self.name,
            npc: self.npc,
            level: self.level,
            age: self.age,
            age_modifier: 0,
            weight: 150,
            height: 170,
            size: 2,
            natural: self.natural,
            actual: self.natural,
            scaled: self.natural,
            hit: ResourceMeter::new(self.hit.unwrap_or(self.max_hit), self.max_hit),
            mana: ResourceMeter::new(self.mana.unwrap_or(self.max_mana), self.max_mana),
            movement: ResourceMeter::new(self.movement.unwrap_or(self.max_move), self.max_move),
            rage: self.rage,
            armor_class: crate::stats::MAX_AC,
            hitroll: self.hitroll,
            damroll: self.damroll,
            saves: [0; EngineConfig::NUM_SAVES],
            hit_regen: 0,
            mana_regen: 0,
            perception: 0,
            hiddenness: 0,
            composition: self.composition,
            base_composition: self.composition,
            effect_flags: self.innate_flags,
            record: PlayerRecord {
                base_hitroll: self.hitroll,
                base_damroll: self.damroll,
                base_max_hit: self.max_hit,
            },
            skills: self.skills,
            player_flags: self.player_flags,
            stance: self.stance,
            position: self.position,
            fighting: self.fighting,
            attackers: 0,
            deceased: false,
            room: None,
            equipment: self.equipment,
            effects: EffectStack::new(),
            timers: TimerFlags::empty(),
            events: Vec::new(),
        }
    }
}
