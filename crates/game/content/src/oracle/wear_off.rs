//! [`charstate_core::SkillOracle`] backed by a table of wear-off messages.
use std::collections::BTreeMap;

use charstate_core::{EffectKind, SkillOracle};

/// Wear-off messages keyed by effect kind.
///
/// Kinds missing from the table are unknown to the oracle. An empty message
/// makes a kind wear off silently.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WearOffTable {
    messages: BTreeMap<EffectKind, String>,
}

impl WearOffTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: EffectKind, message: impl Into<String>) {
        self.messages.insert(kind, message.into());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(EffectKind, S)> for WearOffTable {
    fn from_iter<I: IntoIterator<Item = (EffectKind, S)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (kind, message) in iter {
            table.insert(kind, message);
        }
        table
    }
}

impl SkillOracle for WearOffTable {
    fn wear_off(&self, kind: EffectKind) -> Option<&str> {
        self.messages.get(&kind).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kinds_have_no_message() {
        let table: WearOffTable = [
            (EffectKind::ARMOR, "You feel less protected."),
            (EffectKind::BERSERK, ""),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.wear_off(EffectKind::ARMOR), Some("You feel less protected."));
        assert_eq!(table.wear_off(EffectKind::BERSERK), Some(""));
        assert_eq!(table.wear_off(EffectKind(900)), None);
    }
}
