//! Regeneration timers.
//!
//! Each timer restores a single point per firing and reschedules itself at a
//! delay derived from the current per-hour rate, so a rate change (stance,
//! poison, a regen bonus) takes effect on the next firing. Timers stop once
//! the meter is full.

use super::CharacterContext;
use crate::notice::Notice;
use crate::schedule::{TimerKind, TimerOutcome};
use crate::state::{Position, Skill};
use crate::stats::damage_will_kill;

impl CharacterContext<'_> {
    /// Queues `kind` unless it is already pending or has nothing to do.
    pub(crate) fn arm(&mut self, kind: TimerKind) {
        if self.is_pending(kind) {
            return;
        }
        let rates = self.env.rates();
        let delay = match kind {
            TimerKind::HitRegen => {
                if !self.ch.hit.is_below_max() {
                    return;
                }
                self.regen_delay(rates.hit_gain(self.ch))
            }
            TimerKind::ManaRegen => {
                if !self.ch.mana.is_below_max() {
                    return;
                }
                self.regen_delay(rates.mana_gain(self.ch))
            }
            TimerKind::MoveRegen => {
                if !self.ch.movement.is_below_max() {
                    return;
                }
                self.regen_delay(rates.move_gain(self.ch))
            }
            TimerKind::Rage => {
                let can_build = self.ch.skill(Skill::Berserk) > 0 && self.ch.is_meditating();
                if self.ch.rage <= 0 && !can_build {
                    return;
                }
                1
            }
            TimerKind::FallToGround => 1,
        };
        self.schedule(kind, delay);
    }

    /// Arms every regeneration timer that has work to do.
    pub(crate) fn check_regen_rates(&mut self) {
        if self.ch.room.is_none() {
            return;
        }
        for kind in [
            TimerKind::HitRegen,
            TimerKind::ManaRegen,
            TimerKind::MoveRegen,
            TimerKind::Rage,
        ] {
            self.arm(kind);
        }
    }

    /// Pulses per point at `gain` points per game hour, within one pulse and
    /// one game hour.
    pub(crate) fn regen_delay(&self, gain: i32) -> u64 {
        let per_hour = self.env.config().pulses_per_game_hour();
        let gain = u64::try_from(gain.max(1)).unwrap_or(1);
        (per_hour / gain).clamp(1, per_hour)
    }

    pub(crate) fn run_timer(&mut self, kind: TimerKind) -> TimerOutcome {
        // Characters outside the world do not regenerate
        if self.ch.room.is_none() && kind != TimerKind::FallToGround {
            return self.finish(kind, None);
        }
        match kind {
            TimerKind::HitRegen => self.hit_regen_tick(),
            TimerKind::ManaRegen => self.mana_regen_tick(),
            TimerKind::MoveRegen => self.move_regen_tick(),
            TimerKind::Rage => self.rage_tick(),
            TimerKind::FallToGround => self.fall_to_ground_tick(),
        }
    }

    /// Heals one point, or bleeds one point at stunned and below.
    fn hit_regen_tick(&mut self) -> TimerOutcome {
        let mut delay = None;
        if self.ch.hit.is_below_max() {
            let bleeding = self.ch.stance.is_helpless();
            if bleeding {
                if damage_will_kill(self.ch.hit.current, 1) {
                    self.slow_death();
                } else {
                    self.hurt(1, true);
                }
            } else {
                self.hurt(-1, true);
            }

            if self.ch.hit.is_below_max() && !self.ch.deceased {
                delay = Some(if bleeding {
                    self.env.config().bleed_interval()
                } else {
                    self.regen_delay(self.env.rates().hit_gain(self.ch))
                });
            }
        }
        self.finish(TimerKind::HitRegen, delay)
    }

    fn mana_regen_tick(&mut self) -> TimerOutcome {
        let mut delay = None;
        if self.ch.mana.is_below_max() {
            self.alter_mana(-1);
            if self.ch.mana.is_below_max() {
                delay = Some(self.regen_delay(self.env.rates().mana_gain(self.ch)));
            }
        }
        self.finish(TimerKind::ManaRegen, delay)
    }

    fn move_regen_tick(&mut self) -> TimerOutcome {
        let mut delay = None;
        if self.ch.movement.is_below_max() {
            self.alter_move(-1);
            if self.ch.movement.is_below_max() {
                delay = Some(self.regen_delay(self.env.rates().move_gain(self.ch)));
            }
        }
        self.finish(TimerKind::MoveRegen, delay)
    }

    /// Lands a character whose flight ended while it was still airborne.
    fn fall_to_ground_tick(&mut self) -> TimerOutcome {
        let splash = self.sector().is_some_and(|sector| sector.is_splashy());
        self.ch.position = Position::Standing;
        self.notify(Notice::FellToGround {
            character: self.ch.id,
            splash,
        });
        self.finish(TimerKind::FallToGround, None)
    }

    /// Turns an optional delay into an outcome, clearing the pending bit when
    /// the timer stops.
    pub(crate) fn finish(&mut self, kind: TimerKind, delay: Option<u64>) -> TimerOutcome {
        match delay {
            Some(delay) => TimerOutcome::Reschedule(delay.max(1)),
            None => {
                self.clear_pending(kind);
                TimerOutcome::Done
            }
        }
    }
}
