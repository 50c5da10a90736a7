use crate::state::EffectKind;

/// Per-kind text lookups for effects.
pub trait SkillOracle: Send + Sync {
    /// Message shown when an effect of `kind` wears off.
    ///
    /// `None` means the kind is unknown; `Some("")` means it wears off silently.
    fn wear_off(&self, kind: EffectKind) -> Option<&str>;
}

/// Built-in wear-off messages for the kinds the engine knows by name.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardSkills;

impl SkillOracle for StandardSkills {
    fn wear_off(&self, kind: EffectKind) -> Option<&str> {
        let message = match kind {
            EffectKind::ARMOR => "You feel less protected.",
            EffectKind::BLESS => "You feel less righteous.",
            EffectKind::BLINDNESS => "You feel a cloak of blindness dissolve.",
            EffectKind::CURSE => "You feel more optimistic.",
            EffectKind::INVISIBLE => "You feel yourself exposed.",
            EffectKind::POISON => "You feel less sick.",
            EffectKind::SANCTUARY => "The white aura around your body fades.",
            EffectKind::SLEEP => "You feel less tired.",
            EffectKind::STRENGTH => "You feel weaker.",
            EffectKind::FLY => "You feel the weight of your body return.",
            EffectKind::LEVITATE => "You float back to the ground.",
            EffectKind::MAGIC_LIGHT => "The light surrounding you fades.",
            EffectKind::IMMOLATE => "The flames around you die down.",
            EffectKind::CAMOUFLAGE => "You are no longer camouflaged.",
            EffectKind::BERSERK => "",
            EffectKind::SPIRIT_WOLF => "The spirit of the wolf leaves you.",
            EffectKind::SPIRIT_BEAR => "The spirit of the bear leaves you.",
            EffectKind::INTERMINABLE_WRATH => "Your wrath subsides.",
            _ => return None,
        };
        Some(message)
    }
}
