//! Effect records and the vocabulary they are written in.
//!
//! An effect modifies exactly one stat ([`ApplyLocation`]) by a signed amount
//! and may grant aggregated [`EffectFlags`]. Effects are stacked on a character
//! through [`super::EffectStack`]; the stat recomputer folds them into the
//! character's derived values.

use bitflags::bitflags;

/// Kind tag of an effect (spell, skill or condition that produced it).
///
/// Kinds are open-ended: content may use any number, but the engine gives
/// special treatment to the named constants below.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EffectKind(pub u16);

impl EffectKind {
    pub const NONE: Self = Self(0);
    pub const ARMOR: Self = Self(1);
    pub const BLESS: Self = Self(3);
    pub const BLINDNESS: Self = Self(4);
    pub const CURSE: Self = Self(17);
    pub const INVISIBLE: Self = Self(29);
    pub const POISON: Self = Self(33);
    pub const SANCTUARY: Self = Self(36);
    pub const SLEEP: Self = Self(38);
    pub const STRENGTH: Self = Self(39);
    pub const FLY: Self = Self(58);
    pub const LEVITATE: Self = Self(59);
    pub const MAGIC_LIGHT: Self = Self(66);
    pub const IMMOLATE: Self = Self(117);
    pub const CAMOUFLAGE: Self = Self(416);
    pub const BERSERK: Self = Self(440);
    pub const SPIRIT_WOLF: Self = Self(441);
    pub const SPIRIT_BEAR: Self = Self(442);
    pub const INTERMINABLE_WRATH: Self = Self(443);

    /// Kinds whose wear-off depends on whether the character is airborne.
    pub const fn is_flight(self) -> bool {
        self.0 == Self::LEVITATE.0 || self.0 == Self::FLY.0
    }

    /// Kinds cleared when berserking stops.
    pub const BERSERK_FAMILY: [Self; 4] = [
        Self::BERSERK,
        Self::SPIRIT_WOLF,
        Self::SPIRIT_BEAR,
        Self::INTERMINABLE_WRATH,
    ];
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "kind {}", self.0)
    }
}

bitflags! {
    /// Flags an effect or worn item grants while it is in force.
    ///
    /// The character's aggregated set is rebuilt on every recompute, so a flag
    /// granted by two sources survives the removal of either one.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct EffectFlags: u32 {
        const BLIND        = 1 << 0;
        const INVISIBLE    = 1 << 1;
        const DETECT_INVIS = 1 << 2;
        const SANCTUARY    = 1 << 3;
        const SLEEP        = 1 << 4;
        const POISON       = 1 << 5;
        const FLY          = 1 << 6;
        /// Character sheds light into its room.
        const LIGHT        = 1 << 7;
        /// Hidden in terrain; losing it also resets hiddenness.
        const CAMOUFLAGED  = 1 << 8;
        const BERSERK      = 1 << 9;
        /// Slows rage decay while berserking.
        const WRATH        = 1 << 10;
        const ON_FIRE      = 1 << 11;
        const CURSE        = 1 << 12;
    }
}

/// Stat an effect or item modifier targets.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::FromRepr,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ApplyLocation {
    #[default]
    None = 0,
    Str,
    Dex,
    Int,
    Wis,
    Con,
    Cha,
    /// Reserved; has no effect.
    Class,
    Level,
    Age,
    CharWeight,
    CharHeight,
    Mana,
    Hit,
    Move,
    /// Reserved; has no effect.
    Gold,
    /// Reserved; has no effect.
    Exp,
    Ac,
    Hitroll,
    Damroll,
    SavingPara,
    SavingRod,
    SavingPetri,
    SavingBreath,
    SavingSpell,
    Size,
    HitRegen,
    ManaRegen,
    Perception,
    Hiddenness,
    /// Converts the character's material; the modifier is a composition id.
    Composition,
}

/// A single stat modifier with a kind tag and a duration.
///
/// `duration` is decremented by an outside hourly process; the engine only
/// reads it when merging stacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    pub kind: EffectKind,
    pub location: ApplyLocation,
    pub modifier: i32,
    pub duration: i32,
    pub flags: EffectFlags,
}

impl Effect {
    pub const fn new(kind: EffectKind, location: ApplyLocation, modifier: i32, duration: i32) -> Self {
        Self {
            kind,
            location,
            modifier,
            duration,
            flags: EffectFlags::empty(),
        }
    }

    #[must_use]
    pub const fn with_flags(mut self, flags: EffectFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// How an incoming effect combines with an existing one of the same kind and
/// location.
///
/// Durations: `add_duration` sums them, then `average_duration` halves the
/// result. Without `refresh` the existing duration is kept regardless. The
/// modifier follows the same add-then-average rule. Flags are always unioned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MergePolicy {
    pub add_duration: bool,
    pub average_duration: bool,
    pub add_modifier: bool,
    pub average_modifier: bool,
    pub refresh: bool,
}

impl MergePolicy {
    /// Replace the old instance, keeping its remaining duration.
    pub const REPLACE: Self = Self {
        add_duration: false,
        average_duration: false,
        add_modifier: false,
        average_modifier: false,
        refresh: false,
    };

    /// Replace the old instance and restart the duration.
    pub const REFRESH: Self = Self {
        refresh: true,
        ..Self::REPLACE
    };

    /// Extend the duration by the incoming amount.
    pub const EXTEND: Self = Self {
        add_duration: true,
        refresh: true,
        ..Self::REPLACE
    };

    /// Extend the duration and accumulate the modifier.
    pub const ACCUMULATE: Self = Self {
        add_duration: true,
        add_modifier: true,
        refresh: true,
        ..Self::REPLACE
    };

    /// Blend both instances: averaged duration and averaged modifier.
    pub const AVERAGE: Self = Self {
        add_duration: true,
        average_duration: true,
        add_modifier: true,
        average_modifier: true,
        refresh: true,
    };

    /// Combines `incoming` with `existing` and returns the effect to apply.
    pub fn combine(&self, existing: &Effect, mut incoming: Effect) -> Effect {
        if self.add_duration {
            incoming.duration += existing.duration;
        }
        if self.average_duration {
            incoming.duration /= 2;
        }
        if !self.refresh {
            incoming.duration = existing.duration;
        }
        if self.add_modifier {
            incoming.modifier += existing.modifier;
        }
        if self.average_modifier {
            incoming.modifier /= 2;
        }
        incoming.flags |= existing.flags;
        incoming
    }
}
