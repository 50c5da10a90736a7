use crate::state::{Abilities, Character};
use crate::stats::{MAX_ABILITY, MIN_ABILITY};

/// Derives a character's scaled abilities from its actual ones.
///
/// Called once per recompute, after every modifier has been applied.
pub trait AttributeScaler: Send + Sync {
    fn scale(&self, character: &Character) -> Abilities;
}

/// Clamps actual abilities to the playable range and scales each by a
/// percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PercentScaling {
    pub percent: Abilities,
}

impl PercentScaling {
    /// Every ability at face value.
    pub const IDENTITY: Self = Self {
        percent: Abilities::uniform(100),
    };

    /// Scaling used for characters without a recognised race.
    pub const RACELESS: Self = Self {
        percent: Abilities::uniform(72),
    };

    pub const fn new(percent: Abilities) -> Self {
        Self { percent }
    }
}

impl Default for PercentScaling {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AttributeScaler for PercentScaling {
    fn scale(&self, character: &Character) -> Abilities {
        let viewed = |value: i32| value.clamp(MIN_ABILITY, MAX_ABILITY);
        let actual = character.actual();
        Abilities::new(
            viewed(actual.str) * self.percent.str / 100,
            viewed(actual.dex) * self.percent.dex / 100,
            viewed(actual.int) * self.percent.int / 100,
            viewed(actual.wis) * self.percent.wis / 100,
            viewed(actual.con) * self.percent.con / 100,
            viewed(actual.cha) * self.percent.cha / 100,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_clamps_before_applying_percentages() {
        let ch = Character::builder("Bo")
            .abilities(Abilities::new(10, 50, 100, 120, 80, 60))
            .build();
        let scaled = PercentScaling::RACELESS.scale(&ch);
        // 25 * 72 / 100 = 18, 50 * 72 / 100 = 36, 100 * 72 / 100 = 72
        assert_eq!(scaled, Abilities::new(18, 36, 72, 72, 57, 43));
        assert_eq!(PercentScaling::IDENTITY.scale(&ch).wis, 100);
    }
}
