//! Configuration oracle for exposing engine timing to the handlers.

use crate::config::EngineConfig;

/// Provides access to runtime configuration values.
pub trait ConfigOracle: Send + Sync {
    /// Pulses in one game hour; regen delays are derived from it.
    fn pulses_per_game_hour(&self) -> u64;

    /// Pulses between rage ticks.
    fn rage_interval(&self) -> u64;

    /// Pulses between bleed ticks.
    fn bleed_interval(&self) -> u64;

    /// Base seed for random rolls.
    fn seed(&self) -> u64;
}

impl ConfigOracle for EngineConfig {
    fn pulses_per_game_hour(&self) -> u64 {
        EngineConfig::pulses_per_game_hour(self)
    }

    fn rage_interval(&self) -> u64 {
        EngineConfig::rage_interval(self)
    }

    fn bleed_interval(&self) -> u64 {
        EngineConfig::bleed_interval(self)
    }

    fn seed(&self) -> u64 {
        self.seed
    }
}
