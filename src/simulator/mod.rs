//! Encounter balance simulator for Monte Carlo analysis.
//!
//! Walks many simulated players to look at:
//! - How far a walker travels between encounters
//! - Win rate and fight length at each level
//! - Item drop rates and how often drops become upgrades
//! - Distance needed to reach each level
//!
//! Every walker drives a real `GameSession`, so results match what the
//! engine does for an actual player.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, simulate_single_run, RunStats};
