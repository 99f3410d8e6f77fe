//! Report Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete benchmark session report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Session metadata (timestamp, system, configuration)
    pub meta: ReportMeta,
    /// Per-strategy figures, in benchmark order
    pub strategies: Vec<StrategyReport>,
    /// Named pairwise speedup ratios
    pub speedups: Vec<SpeedupReport>,
    /// Hardware-utilization figures; absent when the reference pair was
    /// filtered out of the session
    pub efficiency: Option<EfficiencyReport>,
    /// Totals for a quick glance
    pub summary: ReportSummary,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Harness version
    pub version: String,
    /// UTC time the report was generated
    pub timestamp: DateTime<Utc>,
    /// Host details
    pub system: SystemInfo,
    /// Configuration the session ran with
    pub config: ReportConfig,
}

/// Host details captured alongside the results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system name
    pub os: String,
    /// CPU architecture
    pub arch: String,
    /// CPU model, "Unknown" where not discoverable
    pub cpu: String,
    /// Available hardware parallelism
    pub cpu_cores: u32,
}

/// Session configuration captured in report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Workload size
    pub collection_size: usize,
    /// Timed runs per strategy
    pub repetitions: usize,
    /// CPU phase toggle
    pub cpu_intensive: bool,
    /// Memory phase toggle
    pub memory_intensive: bool,
    /// CPU phase inner-loop steps
    pub inner_loop_iterations: u32,
    /// Scratch buffer size in bytes
    pub memory_chunk_size: usize,
    /// Inter-run pause in milliseconds
    pub cooldown_ms: u64,
    /// Worker threads for the parallel strategies
    pub workers: usize,
}

/// One strategy's figures in the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyReport {
    /// Strategy display name
    pub name: String,
    /// Whether the strategy ran on the worker pool
    pub parallel: bool,
    /// Raw per-repetition durations in run order
    pub runs_ms: Vec<u64>,
    /// Mean duration
    pub average_ms: f64,
    /// Percentage of the baseline (slowest = 100)
    pub relative_performance: f64,
}

/// A named pairwise speedup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeedupReport {
    /// Strategy expected to be slower
    pub slower: String,
    /// Strategy expected to be faster
    pub faster: String,
    /// `slower_avg / faster_avg`
    pub ratio: f64,
    /// True when the expected-slower strategy actually won
    pub inverted: bool,
}

/// Parallel-efficiency figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EfficiencyReport {
    /// Worker pool size
    pub workers: usize,
    /// Linear-scaling ceiling
    pub theoretical_speedup: f64,
    /// Observed sequential/parallel ratio
    pub actual_speedup: f64,
    /// Observed as a percentage of the ceiling
    pub efficiency_percent: f64,
}

/// Report summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Strategies measured
    pub strategies: usize,
    /// Timed runs across the whole session
    pub total_runs: usize,
    /// The sum every strategy agreed on
    pub verified_sum: i64,
    /// Wall-clock duration of the whole session in milliseconds
    pub total_duration_ms: u64,
}
