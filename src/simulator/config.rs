//! Simulation configuration.

use crate::config::EngineConfig;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated walkers
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Total distance each walker covers, in meters
    pub walk_distance_meters: f64,

    /// Distance reported per GPS update, in meters
    pub step_meters: f64,

    /// Simulated time between GPS updates, in milliseconds
    pub step_interval_ms: i64,

    /// Fraction of encounters caught instead of fought (0.0 to 1.0)
    pub catch_rate: f64,

    /// Equip dropped items that beat what is currently worn
    pub auto_equip: bool,

    /// Level each walker starts at
    pub starting_level: u32,

    /// Engine tuning under test
    pub engine: EngineConfig,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            seed: None,
            walk_distance_meters: 50_000.0,
            // Roughly walking pace: 10 m every 7 s
            step_meters: 10.0,
            step_interval_ms: 7_000,
            catch_rate: 0.2,
            auto_equip: true,
            starting_level: 1,
            engine: EngineConfig::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small run for smoke-testing balance changes
    pub fn quick() -> Self {
        Self {
            num_runs: 20,
            walk_distance_meters: 10_000.0,
            ..Default::default()
        }
    }

    /// Long walks to look at the late level curve
    pub fn long_walk(kilometers: f64) -> Self {
        Self {
            num_runs: 50,
            walk_distance_meters: kilometers * 1_000.0,
            ..Default::default()
        }
    }

    /// Fight everything so every encounter can drop loot
    pub fn loot_analysis(num_runs: u32) -> Self {
        Self {
            num_runs,
            catch_rate: 0.0,
            ..Default::default()
        }
    }
}
