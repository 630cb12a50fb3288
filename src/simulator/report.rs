//! Simulation report generation.

use super::runner::RunStats;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub walk_distance_meters: f64,

    // Progression
    pub avg_final_level: f64,
    pub level_distribution: BTreeMap<u32, u32>,
    /// Average distance at which level `i + 2` was reached, over the runs
    /// that reached it
    pub avg_distance_per_level: Vec<f64>,

    // Encounters
    pub avg_encounters: f64,
    pub encounters_per_km: f64,
    pub avg_victories: f64,
    pub avg_defeats: f64,
    pub avg_catches: f64,
    pub win_rate: f64,
    pub avg_exchanges_per_fight: f64,

    // Loot
    pub actual_drop_rate: f64,
    pub avg_items_dropped: f64,
    pub avg_items_lost_inventory_full: f64,
    pub avg_upgrades_equipped: f64,

    // Individual run stats for detailed analysis
    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        values.sum::<f64>() / count as f64
    }
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, walk_distance_meters: f64) -> Self {
        let n = runs.len();
        let avg = |f: fn(&RunStats) -> f64| mean(runs.iter().map(f), n);

        let mut level_distribution = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
        }

        let max_levels = runs
            .iter()
            .map(|r| r.level_up_distances.len())
            .max()
            .unwrap_or(0);
        let avg_distance_per_level = (0..max_levels)
            .map(|i| {
                let reached: Vec<f64> = runs
                    .iter()
                    .filter_map(|r| r.level_up_distances.get(i).copied())
                    .collect();
                mean(reached.iter().copied(), reached.len())
            })
            .collect();

        let total_encounters: u64 = runs.iter().map(|r| r.encounters as u64).sum();
        let total_victories: u64 = runs.iter().map(|r| r.victories as u64).sum();
        let total_defeats: u64 = runs.iter().map(|r| r.defeats as u64).sum();
        let total_fights = total_victories + total_defeats;
        let total_drops: u64 = runs.iter().map(|r| r.items_dropped as u64).sum();
        let total_exchanges: u64 = runs.iter().map(|r| r.exchanges).sum();
        let total_km = runs.iter().map(|r| r.total_distance).sum::<f64>() / 1_000.0;

        let ratio = |num: u64, den: u64| if den == 0 { 0.0 } else { num as f64 / den as f64 };

        Self {
            num_runs: n as u32,
            walk_distance_meters,
            avg_final_level: avg(|r| r.final_level as f64),
            level_distribution,
            avg_distance_per_level,
            avg_encounters: avg(|r| r.encounters as f64),
            encounters_per_km: if total_km > 0.0 {
                total_encounters as f64 / total_km
            } else {
                0.0
            },
            avg_victories: avg(|r| r.victories as f64),
            avg_defeats: avg(|r| r.defeats as f64),
            avg_catches: avg(|r| r.catches as f64),
            win_rate: ratio(total_victories, total_fights),
            avg_exchanges_per_fight: ratio(total_exchanges, total_fights),
            actual_drop_rate: ratio(total_drops, total_victories),
            avg_items_dropped: avg(|r| r.items_dropped as f64),
            avg_items_lost_inventory_full: avg(|r| r.items_lost_inventory_full as f64),
            avg_upgrades_equipped: avg(|r| r.upgrades_equipped as f64),
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {}, {:.1} km each\n\n",
            self.num_runs,
            self.walk_distance_meters / 1_000.0
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Level:     {:.1}\n", self.avg_final_level));
        for (level, count) in &self.level_distribution {
            let pct = *count as f64 / self.num_runs.max(1) as f64 * 100.0;
            let bar = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Level {:3}: {:>5.1}% {}\n", level, pct, bar));
        }
        report.push('\n');

        report.push_str("── ENCOUNTERS ───────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Encounters:      {:.1}\n", self.avg_encounters));
        report.push_str(&format!("  Encounters per km:   {:.2}\n", self.encounters_per_km));
        report.push_str(&format!("  Avg Victories:       {:.1}\n", self.avg_victories));
        report.push_str(&format!("  Avg Defeats:         {:.1}\n", self.avg_defeats));
        report.push_str(&format!("  Avg Catches:         {:.1}\n", self.avg_catches));
        report.push_str(&format!("  Win Rate:            {:.1}%\n", self.win_rate * 100.0));
        report.push_str(&format!(
            "  Exchanges per Fight: {:.1}\n\n",
            self.avg_exchanges_per_fight
        ));

        report.push_str("── LOOT ─────────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Actual Drop Rate:    {:.1}%\n",
            self.actual_drop_rate * 100.0
        ));
        report.push_str(&format!("  Avg Items Dropped:   {:.1}\n", self.avg_items_dropped));
        report.push_str(&format!(
            "  Avg Lost (bag full): {:.1}\n",
            self.avg_items_lost_inventory_full
        ));
        report.push_str(&format!(
            "  Avg Upgrades Equipped: {:.1}\n\n",
            self.avg_upgrades_equipped
        ));

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let rating = if self.win_rate > 0.98 {
            "TOO EASY - Players almost never lose"
        } else if self.win_rate > 0.8 {
            "GOOD - Occasional defeats"
        } else if self.win_rate > 0.5 {
            "HARD - Frequent defeats"
        } else {
            "TOO HARD - Most fights are lost"
        };
        report.push_str(&format!("  Fight Rating:    {}\n", rating));
        if self.encounters_per_km < 1.0 {
            report.push_str("  ⚠️  Fewer than one encounter per km - walks feel empty?\n");
        }
        if self.avg_items_lost_inventory_full > 0.0 {
            report.push_str("  ⚠️  Inventory fills up - drops are being turned away\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Distance needed for each level, averaged over runs.
    pub fn level_curve_text(&self) -> String {
        let mut report = String::new();
        report.push_str("── LEVEL CURVE ──────────────────────────────────────────────────\n");
        report.push_str("  Level   Avg Distance (km)\n");
        report.push_str("  ─────   ─────────────────\n");
        for (i, meters) in self.avg_distance_per_level.iter().enumerate() {
            report.push_str(&format!("  {:5}   {:>10.2}\n", i + 2, meters / 1_000.0));
        }
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(level: u32, victories: u32, defeats: u32, distances: Vec<f64>) -> RunStats {
        RunStats {
            final_level: level,
            total_distance: 5_000.0,
            encounters: victories + defeats,
            victories,
            defeats,
            exchanges: (victories + defeats) as u64 * 3,
            items_dropped: victories / 2,
            level_up_distances: distances,
            ..Default::default()
        }
    }

    #[test]
    fn test_report_generation() {
        let runs = vec![
            run(3, 8, 2, vec![400.0, 1_200.0]),
            run(2, 6, 0, vec![600.0]),
        ];
        let report = SimReport::from_runs(runs, 5_000.0);
        assert_eq!(report.num_runs, 2);
        assert!((report.avg_final_level - 2.5).abs() < 1e-9);
        assert!((report.win_rate - 14.0 / 16.0).abs() < 1e-9);
        assert!((report.encounters_per_km - 1.6).abs() < 1e-9);
        assert_eq!(report.avg_distance_per_level, vec![500.0, 1_200.0]);
        assert_eq!(report.level_distribution.get(&3), Some(&1));
        assert!((report.avg_exchanges_per_fight - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_report_has_no_nan() {
        let report = SimReport::from_runs(Vec::new(), 1_000.0);
        assert_eq!(report.avg_final_level, 0.0);
        assert_eq!(report.win_rate, 0.0);
        assert!(report.to_text().contains("SIMULATION REPORT"));
    }

    #[test]
    fn test_json_omits_run_stats() {
        let report = SimReport::from_runs(vec![run(2, 1, 0, vec![10.0])], 100.0);
        let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert!(value.get("run_stats").is_none());
        assert_eq!(value["num_runs"], 1);
    }
}
