//! Rage: builds while meditating, decays otherwise, and boils over into
//! berserking past the crazed threshold.

use tracing::debug;

use super::CharacterContext;
use crate::env::{compute_seed, roll};
use crate::notice::Notice;
use crate::schedule::{TimerKind, TimerOutcome};
use crate::state::{
    ApplyLocation, Effect, EffectFlags, EffectKind, PlayerFlags, Position, Skill, Stance,
};
use crate::stats::RAGE_CRAZED;

/// Duration of the berserk effect; the rage timer ends it long before.
const BERSERK_DURATION: i32 = 1000;

impl CharacterContext<'_> {
    fn roll(&self, context: u32, min: i32, max: i32) -> i32 {
        let seed = compute_seed(self.env.config().seed(), self.now.0, self.ch.id.0, context);
        self.env.rng().range(seed, min, max)
    }

    pub(crate) fn rage_tick(&mut self) -> TimerOutcome {
        let character = self.ch.id;
        if self.ch.is_berserking() {
            let loss = if self.ch.has_flag(EffectFlags::WRATH) {
                self.roll(roll::RAGE_BERSERK_DECAY, 10, 15)
            } else {
                self.roll(roll::RAGE_BERSERK_DECAY, 20, 30)
            };
            self.ch.rage -= loss;
            if self.ch.rage % 7 == 0 && self.ch.fighting {
                self.notify(Notice::ImproveSkill {
                    character,
                    skill: Skill::Berserk,
                });
            }
            if !self.ch.fighting {
                self.notify(Notice::SeekTarget { character });
            }
        } else if self.ch.is_meditating() {
            let ceiling = i32::from(self.ch.skill(Skill::Meditate));
            self.ch.rage += self.roll(roll::RAGE_GAIN, 10, ceiling);
            if self.ch.rage % 5 == 0 {
                self.notify(Notice::ImproveSkill {
                    character,
                    skill: Skill::Meditate,
                });
            }
        } else {
            self.ch.rage -= self.roll(roll::RAGE_DECAY, 2, 4);
        }

        if self.ch.rage > RAGE_CRAZED && !self.ch.is_berserking() {
            self.ch.player_flags.remove(PlayerFlags::MEDITATE);
            self.start_berserking();
            self.notify(Notice::RageConsumes { character });
            debug!(%character, rage = self.ch.rage, "rage boiled over");
        }

        if self.ch.rage > 0 {
            self.finish(TimerKind::Rage, Some(self.env.config().rage_interval()))
        } else {
            self.notify(Notice::RageRecedes { character });
            self.stop_berserking();
            self.finish(TimerKind::Rage, None)
        }
    }

    /// Toggles meditation. Starting to meditate lets a berserker build rage.
    pub(crate) fn set_meditating(&mut self, meditating: bool) {
        self.ch.player_flags.set(PlayerFlags::MEDITATE, meditating);
        if meditating {
            self.arm(TimerKind::Rage);
        }
    }

    /// Snaps the character alert and on its feet, then adds the berserk
    /// effect.
    pub(crate) fn start_berserking(&mut self) {
        self.set_stance(Stance::Alert);
        self.ch.position = Position::Standing;
        let effect = Effect::new(
            EffectKind::BERSERK,
            ApplyLocation::None,
            0,
            BERSERK_DURATION,
        )
        .with_flags(EffectFlags::BERSERK);
        self.add_effect(effect);
        self.check_regen_rates();
    }

    /// Strips the berserk family of effects and empties the rage pool.
    pub(crate) fn stop_berserking(&mut self) {
        self.ch.rage = 0;
        for kind in EffectKind::BERSERK_FAMILY {
            self.remove_effects_of_kind(kind, false);
        }
    }
}
