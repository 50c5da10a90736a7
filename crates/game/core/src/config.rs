/// Engine configuration constants and tunable parameters.
///
/// Timing is expressed in pulses, the engine's smallest unit of time. The
/// runtime-tunable fields can be loaded from TOML by the content crate; the
/// associated constants size fixed-capacity containers and cannot change at
/// runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Pulses that elapse per real-time second.
    pub pulses_per_second: u32,
    /// Real-time seconds in one game hour.
    pub seconds_per_game_hour: u32,
    /// Seconds between two rage ticks.
    pub rage_interval_seconds: u32,
    /// A bleeding character loses a point every `pulses_per_game_hour / bleed_divisor` pulses.
    pub bleed_divisor: u32,
    /// Base seed mixed into every random roll the engine makes.
    pub seed: u64,
}

impl EngineConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of equipment wear positions.
    pub const NUM_WEARS: usize = 28;
    /// Maximum stat modifiers an item can carry.
    pub const MAX_ITEM_APPLIES: usize = 6;
    /// Number of saving throw categories.
    pub const NUM_SAVES: usize = 5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PULSES_PER_SECOND: u32 = 10;
    pub const DEFAULT_SECONDS_PER_GAME_HOUR: u32 = 75;
    pub const DEFAULT_RAGE_INTERVAL_SECONDS: u32 = 4;
    pub const DEFAULT_BLEED_DIVISOR: u32 = 4;
    pub const DEFAULT_SEED: u64 = 0;

    pub const fn new() -> Self {
        Self {
            pulses_per_second: Self::DEFAULT_PULSES_PER_SECOND,
            seconds_per_game_hour: Self::DEFAULT_SECONDS_PER_GAME_HOUR,
            rage_interval_seconds: Self::DEFAULT_RAGE_INTERVAL_SECONDS,
            bleed_divisor: Self::DEFAULT_BLEED_DIVISOR,
            seed: Self::DEFAULT_SEED,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Pulses in one game hour. Never zero.
    pub const fn pulses_per_game_hour(&self) -> u64 {
        let pulses = self.pulses_per_second as u64 * self.seconds_per_game_hour as u64;
        if pulses == 0 { 1 } else { pulses }
    }

    /// Delay between rage ticks, in pulses. Never zero.
    pub const fn rage_interval(&self) -> u64 {
        let pulses = self.pulses_per_second as u64 * self.rage_interval_seconds as u64;
        if pulses == 0 { 1 } else { pulses }
    }

    /// Delay between bleed ticks of a character at or below the stunned stance.
    pub const fn bleed_interval(&self) -> u64 {
        let divisor = if self.bleed_divisor == 0 {
            1
        } else {
            self.bleed_divisor as u64
        };
        let pulses = self.pulses_per_game_hour() / divisor;
        if pulses == 0 { 1 } else { pulses }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timings_match_ten_pulses_per_second() {
        let config = EngineConfig::new();
        // 10 pulses/s * 75 s per game hour
        assert_eq!(config.pulses_per_game_hour(), 750);
        assert_eq!(config.rage_interval(), 40);
        assert_eq!(config.bleed_interval(), 187);
    }

    #[test]
    fn degenerate_values_never_produce_zero_delays() {
        let config = EngineConfig {
            pulses_per_second: 0,
            seconds_per_game_hour: 0,
            rage_interval_seconds: 0,
            bleed_divisor: 0,
            seed: 0,
        };
        assert_eq!(config.pulses_per_game_hour(), 1);
        assert_eq!(config.rage_interval(), 1);
        assert_eq!(config.bleed_interval(), 1);
    }
}
