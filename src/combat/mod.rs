//! Attack table, per-encounter cooldowns and the damage exchange.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
