//! Encounter balance simulator CLI.
//!
//! Walks simulated players through the engine and reports how levels, fights
//! and loot play out.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                         # 200 walkers, 50 km each
//!   cargo run --bin simulate -- --quick --seed 42    # Reproducible smoke test
//!   cargo run --bin simulate -- --long 200 --level-curve

use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use wayfarer::config::EngineConfig;
use wayfarer::simulator::{run_simulation, SimConfig};

/// Command line arguments for the balance simulator.
#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(about = "Monte Carlo balance runs for the walking encounter engine")]
#[command(version)]
struct Args {
    /// Number of simulated walkers
    #[arg(short = 'n', long)]
    runs: Option<u32>,

    /// Random seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Distance each walker covers, in kilometers
    #[arg(short, long)]
    distance_km: Option<f64>,

    /// Fraction of encounters caught instead of fought
    #[arg(long)]
    catch_rate: Option<f64>,

    /// Small 20-run smoke test over 10 km
    #[arg(long, conflicts_with_all = ["long", "loot"])]
    quick: bool,

    /// Long walks of the given kilometers
    #[arg(long, value_name = "KM", conflicts_with = "loot")]
    long: Option<f64>,

    /// Fight every encounter so drop rates can be measured
    #[arg(long)]
    loot: bool,

    /// Engine tuning file (JSON) to test instead of the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Never equip dropped items
    #[arg(long)]
    no_equip: bool,

    /// Print the distance needed for each level
    #[arg(long)]
    level_curve: bool,

    /// Save the report as JSON next to the working directory
    #[arg(long)]
    json: bool,

    /// Print a line per run
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              WAYFARER BALANCE SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!(
        "  Walk:           {:.1} km",
        config.walk_distance_meters / 1_000.0
    );
    println!("  Catch Rate:     {:.0}%", config.catch_rate * 100.0);
    println!("  Auto Equip:     {}", config.auto_equip);
    println!(
        "  Min Distance:   {} m",
        config.engine.encounter.min_encounter_distance
    );
    println!("  Drop Chance:    {:.0}%", config.engine.loot.drop_chance * 100.0);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    info!("Running {} simulated walks", config.num_runs);
    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.level_curve {
        println!("{}", report.level_curve_text());
    }

    if args.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, report.to_json()) {
            eprintln!("Failed to write JSON report: {}", e);
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }

    ExitCode::SUCCESS
}

fn build_config(args: &Args) -> Result<SimConfig, String> {
    let mut config = if args.quick {
        SimConfig::quick()
    } else if let Some(km) = args.long {
        SimConfig::long_walk(km)
    } else if args.loot {
        SimConfig::loot_analysis(SimConfig::default().num_runs)
    } else {
        SimConfig::default()
    };

    if let Some(path) = &args.config {
        config.engine = EngineConfig::load(path).map_err(|e| e.to_string())?;
    }
    if let Some(runs) = args.runs {
        config.num_runs = runs;
    }
    if let Some(km) = args.distance_km {
        config.walk_distance_meters = km * 1_000.0;
    }
    if let Some(rate) = args.catch_rate {
        if !(0.0..=1.0).contains(&rate) {
            return Err(format!("catch rate must be between 0 and 1, got {}", rate));
        }
        config.catch_rate = rate;
    }
    if !config.walk_distance_meters.is_finite() || config.walk_distance_meters <= 0.0 {
        return Err(format!(
            "walk distance must be positive, got {} m",
            config.walk_distance_meters
        ));
    }
    config.seed = args.seed;
    config.auto_equip = !args.no_equip;
    config.verbosity = if args.verbose { 2 } else { 1 };

    Ok(config)
}
