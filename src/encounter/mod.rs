//! Encounters and the distance-driven generator that produces them.

pub mod generator;
pub mod types;

pub use generator::*;
pub use types::*;
