use super::{ApplyLocation, Effect, EffectFlags, EffectId, EffectKind};

/// Ordered collection of effect instances on one character.
///
/// The most recently pushed effect comes first. The stack only stores records;
/// applying their modifiers to stats is the engine's job, so mutating methods
/// are crate-private.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectStack {
    entries: Vec<(EffectId, Effect)>,
    next_id: u64,
}

impl EffectStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates effects newest first.
    pub fn iter(&self) -> impl Iterator<Item = (EffectId, &Effect)> {
        self.entries.iter().map(|(id, effect)| (*id, effect))
    }

    pub fn get(&self, id: EffectId) -> Option<&Effect> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, effect)| effect)
    }

    pub fn has_kind(&self, kind: EffectKind) -> bool {
        self.entries.iter().any(|(_, effect)| effect.kind == kind)
    }

    /// Handles of every instance of `kind`, newest first.
    pub fn ids_of_kind(&self, kind: EffectKind) -> Vec<EffectId> {
        self.entries
            .iter()
            .filter(|(_, effect)| effect.kind == kind)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Handles of every instance granting any of `flags`, newest first.
    pub fn ids_with_flags(&self, flags: EffectFlags) -> Vec<EffectId> {
        self.entries
            .iter()
            .filter(|(_, effect)| effect.flags.intersects(flags))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Newest instance matching both kind and location.
    pub fn find(&self, kind: EffectKind, location: ApplyLocation) -> Option<(EffectId, Effect)> {
        self.entries
            .iter()
            .find(|(_, effect)| effect.kind == kind && effect.location == location)
            .map(|(id, effect)| (*id, *effect))
    }

    /// Snapshot of the records in stack order.
    pub(crate) fn records(&self) -> Vec<Effect> {
        self.entries.iter().map(|(_, effect)| *effect).collect()
    }

    pub(crate) fn push(&mut self, effect: Effect) -> EffectId {
        let id = EffectId(self.next_id);
        self.next_id += 1;
        self.entries.insert(0, (id, effect));
        id
    }

    pub(crate) fn take(&mut self, id: EffectId) -> Option<Effect> {
        let index = self.entries.iter().position(|(entry, _)| *entry == id)?;
        Some(self.entries.remove(index).1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(kind: EffectKind, location: ApplyLocation, modifier: i32) -> Effect {
        Effect::new(kind, location, modifier, 5)
    }

    #[test]
    fn newest_effect_comes_first() {
        let mut stack = EffectStack::new();
        let first = stack.push(effect(EffectKind::BLESS, ApplyLocation::Hitroll, 1));
        let second = stack.push(effect(EffectKind::ARMOR, ApplyLocation::Ac, -10));

        let order: Vec<_> = stack.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![second, first]);
    }

    #[test]
    fn handles_survive_unrelated_removals() {
        let mut stack = EffectStack::new();
        let a = stack.push(effect(EffectKind::BLESS, ApplyLocation::Hitroll, 1));
        let b = stack.push(effect(EffectKind::BLESS, ApplyLocation::SavingSpell, -1));
        let c = stack.push(effect(EffectKind::ARMOR, ApplyLocation::Ac, -10));

        assert!(stack.take(b).is_some());
        assert_eq!(stack.get(a).map(|e| e.modifier), Some(1));
        assert_eq!(stack.get(c).map(|e| e.modifier), Some(-10));
        assert!(stack.get(b).is_none());
        assert!(stack.take(b).is_none());
    }

    #[test]
    fn find_matches_kind_and_location() {
        let mut stack = EffectStack::new();
        stack.push(effect(EffectKind::BLESS, ApplyLocation::Hitroll, 1));
        let saving = stack.push(effect(EffectKind::BLESS, ApplyLocation::SavingSpell, -1));

        let (id, found) = stack
            .find(EffectKind::BLESS, ApplyLocation::SavingSpell)
            .expect("bless on saving spell");
        assert_eq!(id, saving);
        assert_eq!(found.modifier, -1);
        assert!(stack.find(EffectKind::BLESS, ApplyLocation::Ac).is_none());
        assert_eq!(stack.ids_of_kind(EffectKind::BLESS).len(), 2);
        assert!(!stack.has_kind(EffectKind::ARMOR));
    }
}
