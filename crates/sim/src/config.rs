//! Simulation settings read from the environment.
use std::env;
use std::path::PathBuf;

/// Settings for one simulation run.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Directory holding `config.toml`, `items.ron` and `wear_off.ron`.
    pub data_dir: PathBuf,
    /// Pulses to simulate.
    pub pulses: u64,
    /// Overrides the seed from `config.toml` when set.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("crates/game/content/data"),
            pulses: 3_000,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CONTENT_DATA_DIR` - content directory (default: crates/game/content/data)
    /// - `SIM_PULSES` - number of pulses to run (default: 3000)
    /// - `SIM_SEED` - seed override for rage rolls
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("CONTENT_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(pulses) = read_env::<u64>("SIM_PULSES") {
            config.pulses = pulses;
        }
        config.seed = read_env::<u64>("SIM_SEED");

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
