//! Per-run statistics and the aggregated simulation report.

use crate::build_info::{BUILD_COMMIT, BUILD_DATE};
use crate::runner::ObstacleKind;
use serde::Serialize;

/// Outcome of a single simulated session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub score: u64,
    pub frames: u64,
    /// Reached the frame cap without crashing.
    pub survived: bool,
    pub jumps: u64,
    pub misses: u64,
    /// Spawns per shape, in `ObstacleKind::ALL` order.
    pub spawned: [u64; 3],
    /// Frames between consecutive spawns (the first counts from frame 0).
    pub spawn_intervals: Vec<u64>,
    /// Shape of the obstacle that ended the run.
    pub killer: Option<ObstacleKind>,
}

impl RunStats {
    pub fn record_spawn(&mut self, kind: ObstacleKind) {
        self.spawned[kind_index(kind)] += 1;
    }

    pub fn record_interval(&mut self, frames: u64) {
        self.spawn_intervals.push(frames);
    }

    pub fn spawned_total(&self) -> u64 {
        self.spawned.iter().sum()
    }
}

fn kind_index(kind: ObstacleKind) -> usize {
    match kind {
        ObstacleKind::Standard => 0,
        ObstacleKind::Wide => 1,
        ObstacleKind::Tall => 2,
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub build_commit: &'static str,
    pub build_date: &'static str,

    pub num_runs: u32,
    pub runs_survived: u32,
    pub max_frames_per_run: u64,

    pub avg_score: f64,
    pub min_score: u64,
    pub max_score: u64,
    pub median_score: u64,

    pub avg_jumps: f64,
    pub avg_misses: f64,

    /// Total spawns per shape across all runs, in `ObstacleKind::ALL` order.
    pub spawned_by_kind: [u64; 3],
    /// Crashes per shape, in `ObstacleKind::ALL` order.
    pub deaths_by_kind: [u64; 3],

    pub min_spawn_interval: u64,
    pub max_spawn_interval: u64,
    pub avg_spawn_interval: f64,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, max_frames_per_run: u64) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;
        let runs_survived = runs.iter().filter(|r| r.survived).count() as u32;

        let avg_score = runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor;
        let min_score = runs.iter().map(|r| r.score).min().unwrap_or(0);
        let max_score = runs.iter().map(|r| r.score).max().unwrap_or(0);
        let median_score = {
            let mut sorted: Vec<u64> = runs.iter().map(|r| r.score).collect();
            sorted.sort_unstable();
            sorted.get(sorted.len() / 2).copied().unwrap_or(0)
        };

        let avg_jumps = runs.iter().map(|r| r.jumps as f64).sum::<f64>() / divisor;
        let avg_misses = runs.iter().map(|r| r.misses as f64).sum::<f64>() / divisor;

        let mut spawned_by_kind = [0u64; 3];
        let mut deaths_by_kind = [0u64; 3];
        for run in &runs {
            for (total, count) in spawned_by_kind.iter_mut().zip(run.spawned.iter()) {
                *total += count;
            }
            if let Some(kind) = run.killer {
                deaths_by_kind[kind_index(kind)] += 1;
            }
        }

        let intervals = runs.iter().flat_map(|r| r.spawn_intervals.iter().copied());
        let (count, sum, min, max) = intervals.fold(
            (0u64, 0u64, u64::MAX, 0u64),
            |(count, sum, min, max), i| (count + 1, sum + i, min.min(i), max.max(i)),
        );
        let (min_spawn_interval, avg_spawn_interval) = if count == 0 {
            (0, 0.0)
        } else {
            (min, sum as f64 / count as f64)
        };

        Self {
            build_commit: BUILD_COMMIT,
            build_date: BUILD_DATE,
            num_runs,
            runs_survived,
            max_frames_per_run,
            avg_score,
            min_score,
            max_score,
            median_score,
            avg_jumps,
            avg_misses,
            spawned_by_kind,
            deaths_by_kind,
            min_spawn_interval,
            max_spawn_interval: max,
            avg_spawn_interval,
            run_stats: runs,
        }
    }

    /// Share of runs that reached the frame cap, as a percentage.
    pub fn survival_rate(&self) -> f64 {
        if self.num_runs == 0 {
            return 0.0;
        }
        self.runs_survived as f64 / self.num_runs as f64 * 100.0
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str(&format!(
            "                  (build {} {})\n",
            self.build_commit, self.build_date
        ));
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} survived {} frames ({:.1}%)\n\n",
            self.num_runs,
            self.runs_survived,
            self.max_frames_per_run,
            self.survival_rate()
        ));

        report.push_str("── SCORE ────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:     {:.1}\n", self.avg_score));
        report.push_str(&format!("  Min Score:     {}\n", self.min_score));
        report.push_str(&format!("  Median Score:  {}\n", self.median_score));
        report.push_str(&format!("  Max Score:     {}\n", self.max_score));
        report.push_str(&format!("  Avg Jumps:     {:.1}\n", self.avg_jumps));
        report.push_str(&format!("  Avg Misses:    {:.1}\n\n", self.avg_misses));

        report.push_str("── OBSTACLES ────────────────────────────────────────────────────\n");
        report.push_str("  Shape       Spawned   Deaths\n");
        report.push_str("  ─────       ───────   ──────\n");
        for (i, kind) in ObstacleKind::ALL.iter().enumerate() {
            report.push_str(&format!(
                "  {:<10} {:>8} {:>8}\n",
                kind.name(),
                self.spawned_by_kind[i],
                self.deaths_by_kind[i]
            ));
        }
        report.push('\n');

        report.push_str("── SPAWN SPACING (frames) ───────────────────────────────────────\n");
        report.push_str(&format!("  Min Interval:  {}\n", self.min_spawn_interval));
        report.push_str(&format!("  Avg Interval:  {:.1}\n", self.avg_spawn_interval));
        report.push_str(&format!("  Max Interval:  {}\n", self.max_spawn_interval));

        report
    }

    /// Generate a JSON report.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
