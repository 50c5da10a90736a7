//! Point alterations and the stance that follows from hit points.
//!
//! A positive amount removes points, a negative one restores them. Nothing
//! happens to a character that is not in a room.

use tracing::debug;

use super::CharacterContext;
use crate::env::SlowDeath;
use crate::notice::Notice;
use crate::schedule::TimerKind;
use crate::state::{EffectFlags, Position, Stance};
use crate::stats::{HIT_DEAD, HIT_INCAPACITATED, HIT_MORTALLY_WOUNDED};

impl CharacterContext<'_> {
    /// Moves hit points by `-amount`.
    ///
    /// With `cap`, healing stops at the maximum unless the character already
    /// stood above it, in which case healing leaves the overflow untouched.
    pub(crate) fn alter_hit(&mut self, amount: i32, cap: bool) {
        if self.ch.room.is_none() {
            return;
        }
        let hit = &mut self.ch.hit;
        if cap {
            let old = hit.current;
            hit.current -= amount;
            if hit.current > hit.maximum {
                if old < hit.maximum {
                    hit.current = hit.maximum;
                } else if amount < 0 {
                    hit.current += amount;
                }
            }
        } else {
            hit.current -= amount;
        }
    }

    /// Alters hit points, settles the stance and arms hit regeneration.
    pub(crate) fn hurt(&mut self, amount: i32, cap: bool) {
        self.alter_hit(amount, cap);
        self.hp_stance_check();
        let hit = self.ch.hit;
        if hit.current > HIT_INCAPACITATED && hit.is_below_max() {
            self.arm(TimerKind::HitRegen);
        }
    }

    pub(crate) fn alter_mana(&mut self, amount: i32) {
        if self.ch.room.is_none() {
            return;
        }
        let mana = &mut self.ch.mana;
        mana.current = (mana.current - amount).min(mana.maximum);
        if mana.is_below_max() {
            self.arm(TimerKind::ManaRegen);
        }
    }

    pub(crate) fn alter_move(&mut self, amount: i32) {
        if self.ch.room.is_none() {
            return;
        }
        let movement = &mut self.ch.movement;
        movement.current = (movement.current - amount).min(movement.maximum);
        if movement.is_below_max() {
            self.arm(TimerKind::MoveRegen);
        }
    }

    /// Derives stance and position from hit points.
    ///
    /// Above zero, a character knocked out of action comes to: sleeping if
    /// magically asleep, otherwise resting.
    pub(crate) fn hp_stance_check(&mut self) {
        if self.ch.deceased {
            return;
        }
        let hit = self.ch.hit.current;
        let stance = if hit <= HIT_DEAD {
            Stance::Dead
        } else if hit <= HIT_MORTALLY_WOUNDED {
            Stance::MortallyWounded
        } else if hit <= HIT_INCAPACITATED {
            Stance::Incapacitated
        } else if hit <= 0 {
            Stance::Stunned
        } else if self.ch.stance.is_helpless() {
            if self.ch.effect_flags.contains(EffectFlags::SLEEP) {
                Stance::Sleeping
            } else {
                Stance::Resting
            }
        } else {
            return;
        };

        self.ch.position = Position::Prone;
        self.set_stance(stance);
        if stance == Stance::Dead {
            self.die();
        }
    }

    /// Bleeding reached the death threshold; the mortality oracle decides.
    pub(crate) fn slow_death(&mut self) {
        match self.env.mortality().slow_death(self.ch) {
            SlowDeath::Lingers { hit } => {
                self.ch.hit.current = hit;
                self.hp_stance_check();
            }
            SlowDeath::Dies => self.die(),
        }
    }

    pub(crate) fn die(&mut self) {
        if self.ch.deceased {
            return;
        }
        self.ch.position = Position::Prone;
        self.set_stance(Stance::Dead);
        self.ch.deceased = true;
        self.ch.fighting = false;
        debug!(character = %self.ch.id, pulse = %self.now, "character died");
        self.notify(Notice::Died {
            character: self.ch.id,
        });
    }

    pub(crate) fn set_stance(&mut self, to: Stance) {
        let from = self.ch.stance;
        if from == to {
            return;
        }
        self.ch.stance = to;
        self.notify(Notice::StanceChanged {
            character: self.ch.id,
            from,
            to,
        });
    }
}
