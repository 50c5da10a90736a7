//! Traits describing read-only world data and pluggable rules.
//!
//! Oracles expose item definitions, wear-off texts, regeneration rates, the
//! slow-death rule, attribute scaling, random rolls and timing configuration.
//! The [`Env`] aggregate bundles them so the engine can reach everything it
//! needs without hard coupling to concrete implementations.
mod config;
mod error;
mod items;
mod mortality;
mod rates;
mod rng;
mod scaling;
mod skills;

pub use config::ConfigOracle;
pub use error::OracleError;
pub use items::{ItemApply, ItemDefinition, ItemKind, ItemOracle, NoItems};
pub use mortality::{MortalityOracle, SlowDeath, StandardMortality};
pub use rates::{RateOracle, StandardRates};
pub use rng::{PcgRng, RngOracle, compute_seed, roll};
pub use scaling::{AttributeScaler, PercentScaling};
pub use skills::{SkillOracle, StandardSkills};

use crate::config::EngineConfig;

static NO_ITEMS: NoItems = NoItems;
static STANDARD_SKILLS: StandardSkills = StandardSkills;
static STANDARD_RATES: StandardRates = StandardRates;
static STANDARD_MORTALITY: StandardMortality = StandardMortality;
static IDENTITY_SCALING: PercentScaling = PercentScaling::IDENTITY;
static PCG: PcgRng = PcgRng;
static DEFAULT_CONFIG: EngineConfig = EngineConfig::new();

/// Aggregates the oracles consulted by the engine.
///
/// Every slot is always filled; [`Env::standard`] provides the built-in rules
/// and the `with_*` methods swap individual oracles.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    items: &'a dyn ItemOracle,
    skills: &'a dyn SkillOracle,
    rates: &'a dyn RateOracle,
    mortality: &'a dyn MortalityOracle,
    scaling: &'a dyn AttributeScaler,
    rng: &'a dyn RngOracle,
    config: &'a dyn ConfigOracle,
}

impl<'a> Env<'a> {
    pub fn new(
        items: &'a dyn ItemOracle,
        skills: &'a dyn SkillOracle,
        rates: &'a dyn RateOracle,
        mortality: &'a dyn MortalityOracle,
        scaling: &'a dyn AttributeScaler,
        rng: &'a dyn RngOracle,
        config: &'a dyn ConfigOracle,
    ) -> Self {
        Self {
            items,
            skills,
            rates,
            mortality,
            scaling,
            rng,
            config,
        }
    }

    /// Built-in rules with no items and default timing.
    pub fn standard() -> Self {
        Self::new(
            &NO_ITEMS,
            &STANDARD_SKILLS,
            &STANDARD_RATES,
            &STANDARD_MORTALITY,
            &IDENTITY_SCALING,
            &PCG,
            &DEFAULT_CONFIG,
        )
    }

    #[must_use]
    pub fn with_items(mut self, items: &'a dyn ItemOracle) -> Self {
        self.items = items;
        self
    }

    #[must_use]
    pub fn with_skills(mut self, skills: &'a dyn SkillOracle) -> Self {
        self.skills = skills;
        self
    }

    #[must_use]
    pub fn with_rates(mut self, rates: &'a dyn RateOracle) -> Self {
        self.rates = rates;
        self
    }

    #[must_use]
    pub fn with_mortality(mut self, mortality: &'a dyn MortalityOracle) -> Self {
        self.mortality = mortality;
        self
    }

    #[must_use]
    pub fn with_scaling(mut self, scaling: &'a dyn AttributeScaler) -> Self {
        self.scaling = scaling;
        self
    }

    #[must_use]
    pub fn with_rng(mut self, rng: &'a dyn RngOracle) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: &'a dyn ConfigOracle) -> Self {
        self.config = config;
        self
    }

    pub fn items(&self) -> &'a dyn ItemOracle {
        self.items
    }

    pub fn skills(&self) -> &'a dyn SkillOracle {
        self.skills
    }

    pub fn rates(&self) -> &'a dyn RateOracle {
        self.rates
    }

    pub fn mortality(&self) -> &'a dyn MortalityOracle {
        self.mortality
    }

    pub fn scaling(&self) -> &'a dyn AttributeScaler {
        self.scaling
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    pub fn config(&self) -> &'a dyn ConfigOracle {
        self.config
    }
}

impl Default for Env<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Env")
            .field("pulses_per_game_hour", &self.config.pulses_per_game_hour())
            .field("seed", &self.config.seed())
            .finish_non_exhaustive()
    }
}
