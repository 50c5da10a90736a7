//! In-memory oracles backed by loaded content.

mod items;
mod wear_off;

pub use items::ItemCatalog;
pub use wear_off::WearOffTable;
