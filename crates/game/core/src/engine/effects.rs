//! Adding, removing and merging effect instances.

use tracing::{debug, warn};

use super::CharacterContext;
use crate::notice::Notice;
use crate::state::{Effect, EffectId, EffectKind, MergePolicy, Position, Stance};

/// Shown instead of the usual text when flight ends on the ground.
const WEIGHT_RETURNS: &str = "Your weight feels normal again.";

impl CharacterContext<'_> {
    /// Pushes `effect` onto the stack, applies it and recomputes.
    pub(crate) fn add_effect(&mut self, effect: Effect) -> EffectId {
        let id = self.ch.effects.push(effect);
        self.apply_effect_record(&effect, true);
        self.effect_total();
        debug!(character = %self.ch.id, %id, kind = %effect.kind, "effect added");
        id
    }

    /// Unapplies and drops one instance, then recomputes.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not on this character's stack.
    pub(crate) fn remove_effect(&mut self, id: EffectId) {
        let Some(effect) = self.ch.effects.get(id).copied() else {
            panic!("{id} is not on character {}", self.ch.id);
        };
        self.apply_effect_record(&effect, false);
        self.ch.effects.take(id);
        self.effect_total();
        debug!(character = %self.ch.id, %id, kind = %effect.kind, "effect removed");
    }

    /// Removes every instance of `kind`. With `announce`, the wear-off text
    /// is emitted once, just before the last instance goes.
    pub(crate) fn remove_effects_of_kind(&mut self, kind: EffectKind, announce: bool) -> usize {
        let ids = self.ch.effects.ids_of_kind(kind);
        let last = ids.last().copied();
        for id in &ids {
            if announce && Some(*id) == last {
                self.announce_wear_off(kind);
            }
            self.remove_effect(*id);
        }
        ids.len()
    }

    /// Combines `incoming` with an existing instance of the same kind and
    /// location under `policy`, or simply adds it if there is none.
    pub(crate) fn merge_effect(&mut self, incoming: Effect, policy: MergePolicy) -> EffectId {
        let merged = match self.ch.effects.find(incoming.kind, incoming.location) {
            Some((existing_id, existing)) => {
                let merged = policy.combine(&existing, incoming);
                self.remove_effect(existing_id);
                merged
            }
            None => incoming,
        };
        self.add_effect(merged)
    }

    fn announce_wear_off(&mut self, kind: EffectKind) {
        let message = match self.env.skills().wear_off(kind) {
            Some(message) => message,
            None => {
                warn!(character = %self.ch.id, %kind, "no wear-off message for effect kind");
                return;
            }
        };
        if message.is_empty() || self.ch.stance <= Stance::Stunned {
            return;
        }

        let character = self.ch.id;
        if kind.is_flight() {
            if self.ch.position >= Position::Standing {
                self.notify(Notice::WearOff {
                    character,
                    kind,
                    message: message.to_owned(),
                });
                self.notify(Notice::FloatsDown { character });
            } else {
                self.notify(Notice::WearOff {
                    character,
                    kind,
                    message: WEIGHT_RETURNS.to_owned(),
                });
            }
        } else {
            self.notify(Notice::WearOff {
                character,
                kind,
                message: message.to_owned(),
            });
        }
    }
}
