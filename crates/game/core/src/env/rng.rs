//! RNG oracle for deterministic random rolls.
//!
//! Rage ticks roll their gains and losses through this oracle. Given the same
//! world seed, pulse and character, a roll always produces the same value, so
//! a simulation replays identically.

/// RNG oracle for deterministic random number generation.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    ///
    /// Returns `min` when the range is empty or inverted.
    fn range(&self, seed: u64, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        let offset = u64::from(self.next_u32(seed)) % span;
        (i64::from(min) + offset as i64) as i32
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Roll contexts, so two rolls on the same pulse draw independent values.
pub mod roll {
    pub const RAGE_DECAY: u32 = 0;
    pub const RAGE_GAIN: u32 = 1;
    pub const RAGE_BERSERK_DECAY: u32 = 2;
}

/// Compute a deterministic seed from world state components.
///
/// * `world_seed` - Base seed from the engine configuration
/// * `pulse` - Pulse the roll happens on
/// * `character` - Raw id of the character rolling
/// * `context` - One of the [`roll`] constants
pub fn compute_seed(world_seed: u64, pulse: u64, character: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style combiners
    let mut hash = world_seed;
    hash ^= pulse.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (character as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_stays_within_bounds() {
        for pulse in 0..500 {
            let seed = compute_seed(7, pulse, 3, roll::RAGE_GAIN);
            let value = PcgRng.range(seed, 10, 15);
            assert!((10..=15).contains(&value), "{value} out of range");
        }
    }

    #[test]
    fn empty_range_returns_min() {
        assert_eq!(PcgRng.range(42, 10, 10), 10);
        assert_eq!(PcgRng.range(42, 10, 3), 10);
    }

    #[test]
    fn seeds_differ_by_context() {
        let a = compute_seed(1, 40, 2, roll::RAGE_DECAY);
        let b = compute_seed(1, 40, 2, roll::RAGE_GAIN);
        assert_ne!(a, b);
        assert_eq!(a, compute_seed(1, 40, 2, roll::RAGE_DECAY));
    }
}
