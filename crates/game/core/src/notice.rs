//! Outbound notices.
//!
//! The engine does not talk to players. Anything a front end would turn into a
//! message, and any follow-up it expects another subsystem to perform (skill
//! improvement, aggro, falling), is pushed onto the world's notice outbox.

use crate::state::{CharacterId, EffectKind, Skill, Stance};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Notice {
    /// Text shown to the character when an effect wears off.
    WearOff {
        character: CharacterId,
        kind: EffectKind,
        message: String,
    },
    /// Room sees the character float back to the ground.
    FloatsDown { character: CharacterId },
    StanceChanged {
        character: CharacterId,
        from: Stance,
        to: Stance,
    },
    Died { character: CharacterId },
    /// Character is in open air without flight and should start falling.
    StartFalling { character: CharacterId },
    FellToGround {
        character: CharacterId,
        splash: bool,
    },
    /// Water put out the flames on a burning character.
    Doused { character: CharacterId },
    /// Rage boiled over into berserking.
    RageConsumes { character: CharacterId },
    RageRecedes { character: CharacterId },
    /// Request for the skill system to try improving a skill.
    ImproveSkill {
        character: CharacterId,
        skill: Skill,
    },
    /// A berserker with no opponent should look for one.
    SeekTarget { character: CharacterId },
}

impl Notice {
    /// The character the notice concerns.
    pub fn character(&self) -> CharacterId {
        match self {
            Self::WearOff { character, .. }
            | Self::FloatsDown { character }
            | Self::StanceChanged { character, .. }
            | Self::Died { character }
            | Self::StartFalling { character }
            | Self::FellToGround { character, .. }
            | Self::Doused { character }
            | Self::RageConsumes { character }
            | Self::RageRecedes { character }
            | Self::ImproveSkill { character, .. }
            | Self::SeekTarget { character } => *character,
        }
    }
}
