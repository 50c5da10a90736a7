//! Data-driven content and the oracles built from it.
//!
//! This crate provides loaders for RON/TOML data files and in-memory oracle
//! implementations the engine can consult:
//! - Item catalogs (data-driven via RON)
//! - Effect wear-off messages (data-driven via RON)
//! - Engine configuration (data-driven via TOML)
//!
//! Content is consumed through oracles and never appears in character state.

pub mod oracle;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use oracle::{ItemCatalog, WearOffTable};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemLoader, LoadResult, WearOffLoader};
