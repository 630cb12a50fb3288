//! Wayfarer - location-driven creature encounters and turn-based combat.
//!
//! Walked distance feeds an encounter generator; generated creatures can be
//! fought, caught or fled from; victories grant experience and loot that the
//! player equips. `session::GameSession` wires these together with storage,
//! notifications and a clock.

pub mod combat;
pub mod config;
pub mod core;
pub mod creatures;
pub mod encounter;
pub mod error;
pub mod items;
pub mod notify;
pub mod player;
pub mod session;
pub mod simulator;
pub mod storage;
