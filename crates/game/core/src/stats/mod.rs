//! Stat bookkeeping.
//!
//! - [`limits`]: bounds, thresholds and ability-driven bonus tables
//! - `modify`: the apply primitive that moves one stat by one modifier
//! - `total`: the recomputer that rebuilds every derived stat
//! - [`snapshot`]: comparable capture of derived stats
pub mod limits;
mod modify;
pub mod snapshot;
mod total;

pub use limits::*;
pub use snapshot::StatsSnapshot;

pub(crate) use modify::apply_modifier;
