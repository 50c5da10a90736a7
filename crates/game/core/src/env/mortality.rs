use crate::state::Character;
use crate::stats::HIT_MORTALLY_WOUNDED;

/// Outcome of a bleed tick that would take a character to death.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlowDeath {
    Dies,
    /// Character survives with hit points set to this value.
    Lingers { hit: i32 },
}

/// Decides what happens when bleeding reaches the death threshold.
pub trait MortalityOracle: Send + Sync {
    fn slow_death(&self, character: &Character) -> SlowDeath;
}

/// A character still engaged by attackers lingers at the mortally wounded
/// threshold so the killing blow comes from combat; anyone else dies.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardMortality;

impl MortalityOracle for StandardMortality {
    fn slow_death(&self, character: &Character) -> SlowDeath {
        if character.attackers > 0 {
            SlowDeath::Lingers {
                hit: HIT_MORTALLY_WOUNDED,
            }
        } else {
            SlowDeath::Dies
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attacked_characters_linger() {
        let mut ch = Character::builder("Rook").build();
        assert_eq!(StandardMortality.slow_death(&ch), SlowDeath::Dies);
        ch.attackers = 2;
        assert_eq!(
            StandardMortality.slow_death(&ch),
            SlowDeath::Lingers { hit: -6 }
        );
    }
}
