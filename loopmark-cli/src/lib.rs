#![warn(missing_docs)]
//! Loopmark CLI Library
//!
//! Wires the benchmark together: configuration layering (defaults,
//! optional `loopmark.toml`, CLI flags), strategy filtering, the
//! repetition driver, statistics, and report output.
//!
//! # Example
//!
//! ```ignore
//! fn main() {
//!     if let Err(err) = loopmark_cli::run() {
//!         eprintln!("error: {err:#}");
//!         std::process::exit(1);
//!     }
//! }
//! ```

mod config_file;
mod driver;
mod metadata;

pub use config_file::LoopmarkConfig;
pub use driver::{Driver, SessionOutcome, StrategyRecord};
pub use metadata::build_report_meta;

use anyhow::Context;
use clap::Parser;
use loopmark_core::{BenchConfig, Strategy, worker_count};
use loopmark_report::{
    EfficiencyReport, OutputFormat, Report, ReportSummary, SpeedupReport, StrategyReport,
    format_human_output, generate_csv_report, generate_json_report,
};
use loopmark_stats::{RunSet, compute_speedup, parallel_efficiency, summarize};
use rayon::ThreadPoolBuilder;
use regex::Regex;
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

/// The named pairings reported in the speed-comparison section,
/// as (expected slower, expected faster).
const SPEEDUP_PAIRS: [(Strategy, Strategy); 4] = [
    (Strategy::IndexedLoop, Strategy::ParallelChunks),
    (Strategy::CursorLoop, Strategy::ParallelChunks),
    (Strategy::IteratorPipeline, Strategy::ParallelPipeline),
    (Strategy::IndexedLoop, Strategy::CursorLoop),
];

/// Loopmark CLI arguments
#[derive(Parser, Debug)]
#[command(name = "loopmark")]
#[command(author, version, about = "Loopmark - iteration strategy benchmark")]
pub struct Cli {
    /// Filter strategies by regex pattern
    #[arg(default_value = ".*")]
    pub filter: String,

    /// Number of items in the workload
    #[arg(long)]
    pub size: Option<usize>,

    /// Timed runs per strategy
    #[arg(long, short = 'r')]
    pub repetitions: Option<usize>,

    /// Inner-loop steps of the CPU phase
    #[arg(long)]
    pub inner_iterations: Option<u32>,

    /// Scratch buffer size in bytes for the memory phase
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Disable the CPU-bound phase of the item processor
    #[arg(long)]
    pub no_cpu: bool,

    /// Disable the memory-bound phase of the item processor
    #[arg(long)]
    pub no_memory: bool,

    /// Pause before each timed run (e.g. "500ms", "0s")
    #[arg(long)]
    pub cooldown: Option<String>,

    /// Worker threads for the parallel strategies (0 = all cores)
    #[arg(long, short = 'j')]
    pub threads: Option<usize>,

    /// Output format: human, json, csv
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// List strategies without running
    #[arg(long)]
    pub list: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the Loopmark CLI. This is the entry point for the binary.
pub fn run() -> anyhow::Result<()> {
    run_with_cli(Cli::parse())
}

/// Run the Loopmark CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("loopmark_cli=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("loopmark_cli=info")
            .init();
    }

    // loopmark.toml fills gaps; CLI flags win.
    let file_config = LoopmarkConfig::discover().unwrap_or_default();
    let config = resolve_bench_config(&cli, &file_config)?;

    let strategies = filter_strategies(&cli.filter)?;

    if cli.list {
        list_strategies(&strategies);
        return Ok(());
    }

    let threads = cli.threads.unwrap_or(file_config.runner.threads);
    if threads > 0 {
        ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .ok();
    }
    let workers = worker_count();

    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(&file_config.output.format)
        .parse()
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    let output_path = cli
        .output
        .clone()
        .or_else(|| file_config.output.path.as_ref().map(PathBuf::from));

    println!(
        "Benchmarking with collection size: {}",
        config.collection_size
    );
    println!(
        "CPU intensive operations: {} (iterations: {})",
        config.cpu_intensive, config.inner_loop_iterations
    );
    println!(
        "Memory intensive operations: {} (chunk size: {} bytes)",
        config.memory_intensive, config.memory_chunk_size
    );
    println!(
        "Running each strategy {} times on {} worker thread(s)\n",
        config.repetitions, workers
    );

    let outcome = Driver::new(config.clone(), strategies).run()?;
    let report = build_report(&outcome, &config, workers)?;

    let output = match format {
        OutputFormat::Human => format_human_output(&report),
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Csv => generate_csv_report(&report),
    };

    if let Some(path) = output_path {
        let mut file = std::fs::File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        file.write_all(output.as_bytes())?;
        println!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }

    Ok(())
}

/// Layer CLI flags over the config file over compiled-in defaults.
pub fn resolve_bench_config(cli: &Cli, file: &LoopmarkConfig) -> anyhow::Result<BenchConfig> {
    let cooldown = match &cli.cooldown {
        Some(s) => LoopmarkConfig::parse_duration(s)
            .with_context(|| format!("invalid --cooldown '{}'", s))?,
        None => LoopmarkConfig::parse_duration(&file.runner.cooldown).with_context(|| {
            format!(
                "invalid cooldown '{}' in loopmark.toml",
                file.runner.cooldown
            )
        })?,
    };

    Ok(BenchConfig {
        collection_size: cli.size.unwrap_or(file.workload.size),
        repetitions: cli.repetitions.unwrap_or(file.runner.repetitions),
        cpu_intensive: !cli.no_cpu && file.workload.cpu_intensive,
        memory_intensive: !cli.no_memory && file.workload.memory_intensive,
        inner_loop_iterations: cli
            .inner_iterations
            .unwrap_or(file.workload.inner_iterations),
        memory_chunk_size: cli.chunk_size.unwrap_or(file.workload.chunk_size),
        cooldown,
    })
}

/// Select strategies whose name matches the filter pattern.
fn filter_strategies(pattern: &str) -> anyhow::Result<Vec<Strategy>> {
    let re = Regex::new(pattern)
        .map_err(|e| anyhow::anyhow!("invalid filter '{}': {}", pattern, e))?;

    let selected: Vec<Strategy> = Strategy::ALL
        .into_iter()
        .filter(|s| re.is_match(s.name()))
        .collect();

    anyhow::ensure!(
        !selected.is_empty(),
        "filter '{}' matched no strategies",
        pattern
    );
    Ok(selected)
}

fn list_strategies(strategies: &[Strategy]) {
    println!("Loopmark strategies:");
    for strategy in strategies {
        let kind = if strategy.is_parallel() {
            "parallel"
        } else {
            "sequential"
        };
        println!("  {} ({})", strategy, kind);
    }
    println!("{} strategies.", strategies.len());
}

/// Assemble the final report from a completed session.
///
/// Speedup pairs and the efficiency figure are skipped (with a warning)
/// when an involved average truncates to zero at millisecond resolution;
/// a ratio against zero has no meaning.
pub fn build_report(
    outcome: &SessionOutcome,
    config: &BenchConfig,
    workers: usize,
) -> anyhow::Result<Report> {
    let run_sets: Vec<RunSet> = outcome
        .records
        .iter()
        .map(|r| RunSet::new(r.strategy.name(), r.runs_ms.clone()))
        .collect();
    let summaries = summarize(&run_sets)?;

    let averages: HashMap<&str, f64> = outcome
        .records
        .iter()
        .zip(&summaries)
        .map(|(record, summary)| (record.strategy.name(), summary.average_ms))
        .collect();

    let mut speedups = Vec::new();
    for (slower, faster) in SPEEDUP_PAIRS {
        let (Some(&slower_avg), Some(&faster_avg)) =
            (averages.get(slower.name()), averages.get(faster.name()))
        else {
            continue;
        };
        if slower_avg <= 0.0 || faster_avg <= 0.0 {
            tracing::warn!(
                slower = slower.name(),
                faster = faster.name(),
                "skipping speedup: average truncates to zero milliseconds"
            );
            continue;
        }
        let ratio = compute_speedup(slower.name(), slower_avg, faster.name(), faster_avg)?;
        speedups.push(SpeedupReport {
            inverted: ratio.inverted(),
            slower: ratio.slower,
            faster: ratio.faster,
            ratio: ratio.ratio,
        });
    }

    let efficiency = match (
        averages.get(Strategy::IndexedLoop.name()),
        averages.get(Strategy::ParallelChunks.name()),
    ) {
        (Some(&sequential), Some(&parallel)) if sequential > 0.0 && parallel > 0.0 => {
            let eff = parallel_efficiency(sequential, parallel, workers)?;
            Some(EfficiencyReport {
                workers: eff.workers,
                theoretical_speedup: eff.theoretical_speedup,
                actual_speedup: eff.actual_speedup,
                efficiency_percent: eff.efficiency_percent,
            })
        }
        _ => None,
    };

    let strategies: Vec<StrategyReport> = outcome
        .records
        .iter()
        .zip(summaries)
        .map(|(record, summary)| StrategyReport {
            name: summary.name,
            parallel: record.strategy.is_parallel(),
            runs_ms: summary.runs_ms,
            average_ms: summary.average_ms,
            relative_performance: summary.relative_performance,
        })
        .collect();

    let total_runs = strategies.iter().map(|s| s.runs_ms.len()).sum();

    Ok(Report {
        meta: build_report_meta(config, workers),
        summary: ReportSummary {
            strategies: strategies.len(),
            total_runs,
            verified_sum: outcome.verified_sum,
            total_duration_ms: outcome.total_duration_ms,
        },
        strategies,
        speedups,
        efficiency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic_outcome() -> SessionOutcome {
        let runs = [
            (Strategy::IndexedLoop, 40u64),
            (Strategy::CursorLoop, 42),
            (Strategy::IteratorPipeline, 44),
            (Strategy::CallbackFold, 46),
            (Strategy::ParallelChunks, 10),
            (Strategy::ParallelPipeline, 11),
        ];
        SessionOutcome {
            records: runs
                .iter()
                .map(|&(strategy, ms)| StrategyRecord {
                    strategy,
                    runs_ms: vec![ms],
                    sums: vec![999],
                })
                .collect(),
            verified_sum: 999,
            total_duration_ms: 193,
        }
    }

    #[test]
    fn filter_matches_all_by_default() {
        let strategies = filter_strategies(".*").unwrap();
        assert_eq!(strategies.len(), 6);
        assert_eq!(strategies, Strategy::ALL.to_vec());
    }

    #[test]
    fn filter_selects_parallel_family() {
        let strategies = filter_strategies("^parallel").unwrap();
        assert_eq!(
            strategies,
            vec![Strategy::ParallelChunks, Strategy::ParallelPipeline]
        );
    }

    #[test]
    fn filter_rejects_no_match_and_bad_regex() {
        assert!(filter_strategies("zzz").is_err());
        assert!(filter_strategies("[").is_err());
    }

    #[test]
    fn cli_flags_override_file_config() {
        let cli = Cli::parse_from([
            "loopmark",
            "--size",
            "500",
            "--no-memory",
            "--cooldown",
            "0s",
            "--repetitions",
            "2",
        ]);
        let config = resolve_bench_config(&cli, &LoopmarkConfig::default()).unwrap();

        assert_eq!(config.collection_size, 500);
        assert_eq!(config.repetitions, 2);
        assert!(config.cpu_intensive);
        assert!(!config.memory_intensive);
        assert!(config.cooldown.is_zero());
        // Untouched knobs fall through to defaults
        assert_eq!(config.inner_loop_iterations, 100);
        assert_eq!(config.memory_chunk_size, 4096);
    }

    #[test]
    fn defaults_reproduce_canonical_constants() {
        let cli = Cli::parse_from(["loopmark"]);
        let config = resolve_bench_config(&cli, &LoopmarkConfig::default()).unwrap();
        assert_eq!(config, BenchConfig::default());
    }

    #[test]
    fn report_carries_all_sections() {
        let outcome = synthetic_outcome();
        let report = build_report(&outcome, &BenchConfig::default(), 8).unwrap();

        assert_eq!(report.strategies.len(), 6);
        assert_eq!(report.summary.total_runs, 6);
        assert_eq!(report.summary.verified_sum, 999);
        assert_eq!(report.speedups.len(), 4);

        // Slowest strategy anchors the relative scale
        let callback = &report.strategies[3];
        assert_eq!(callback.name, "callback-fold");
        assert_eq!(callback.relative_performance, 100.0);

        let efficiency = report.efficiency.unwrap();
        assert_eq!(efficiency.actual_speedup, 4.0);
        assert_eq!(efficiency.efficiency_percent, 50.0);
    }

    #[test]
    fn report_flags_inverted_pairings() {
        let mut outcome = synthetic_outcome();
        // Make the cursor loop beat the indexed loop
        outcome.records[0].runs_ms = vec![50];
        outcome.records[1].runs_ms = vec![25];

        let report = build_report(&outcome, &BenchConfig::default(), 8).unwrap();
        let pair = report
            .speedups
            .iter()
            .find(|s| s.slower == "indexed-loop" && s.faster == "cursor-loop")
            .unwrap();
        assert_eq!(pair.ratio, 2.0);
        assert!(!pair.inverted);

        // And the reverse: indexed faster than cursor
        let mut outcome = synthetic_outcome();
        outcome.records[0].runs_ms = vec![25];
        outcome.records[1].runs_ms = vec![50];
        let report = build_report(&outcome, &BenchConfig::default(), 8).unwrap();
        let pair = report
            .speedups
            .iter()
            .find(|s| s.slower == "indexed-loop" && s.faster == "cursor-loop")
            .unwrap();
        assert_eq!(pair.ratio, 0.5);
        assert!(pair.inverted);
    }

    #[test]
    fn report_skips_ratios_over_zero_averages() {
        let mut outcome = synthetic_outcome();
        for record in &mut outcome.records {
            record.runs_ms = vec![0];
        }
        let report = build_report(&outcome, &BenchConfig::default(), 8).unwrap();
        assert!(report.speedups.is_empty());
        assert!(report.efficiency.is_none());
    }

    #[test]
    fn report_with_filtered_strategies() {
        // Only the two parallel strategies survive filtering: no named
        // pairing applies and there is no sequential reference for the
        // efficiency figure.
        let mut outcome = synthetic_outcome();
        outcome.records.drain(0..4);

        let report = build_report(&outcome, &BenchConfig::default(), 8).unwrap();
        assert_eq!(report.strategies.len(), 2);
        assert!(report.speedups.is_empty());
        assert!(report.efficiency.is_none());
    }
}
