//! Item system: types, catalog, equipment and loot drops.

pub mod catalog;
pub mod drops;
pub mod equipment;
pub mod types;

pub use catalog::{all_items, item_by_id, items_by_kind, items_by_rarity};
pub use drops::*;
pub use equipment::*;
pub use types::*;
