//! Shared building blocks: tuning constants, rarity tiers and the clock.

pub mod clock;
pub mod constants;
pub mod rarity;

pub use clock::{Clock, ManualClock, SystemClock};
pub use rarity::Rarity;
