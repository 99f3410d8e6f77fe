//! Benchmark Driver
//!
//! Runs the repetition loop: for each repetition, every selected strategy
//! is timed once over the shared workload, with an optional cooldown
//! pause before each timed run. The workload is generated once, before
//! any stopwatch starts, and never touched again.
//!
//! Every run's computed sum is recorded alongside its duration. After the
//! loop the sums are cross-checked: all strategies across all repetitions
//! must agree, otherwise the comparison is meaningless and the session
//! fails rather than reporting corrupted figures.

use anyhow::{Context, bail, ensure};
use indicatif::{ProgressBar, ProgressStyle};
use loopmark_core::{BenchConfig, Stopwatch, Strategy, Workload, time_run};

/// One strategy's recorded runs over a session.
#[derive(Debug, Clone)]
pub struct StrategyRecord {
    /// The strategy these runs belong to
    pub strategy: Strategy,
    /// Elapsed whole milliseconds, one entry per repetition, in run order
    pub runs_ms: Vec<u64>,
    /// The sum each run computed, kept for cross-checking only
    pub sums: Vec<i64>,
}

/// Everything a completed session produced.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    /// Per-strategy records in benchmark order
    pub records: Vec<StrategyRecord>,
    /// The single sum every run agreed on
    pub verified_sum: i64,
    /// Wall-clock duration of the whole session, cooldowns included
    pub total_duration_ms: u64,
}

/// Drives repeated strategy invocations and collects their timings.
pub struct Driver {
    config: BenchConfig,
    strategies: Vec<Strategy>,
    show_progress: bool,
}

impl Driver {
    /// Create a driver for the given configuration and strategy set.
    pub fn new(config: BenchConfig, strategies: Vec<Strategy>) -> Self {
        Self {
            config,
            strategies,
            show_progress: true,
        }
    }

    /// Toggle the terminal progress bar (tests run without one).
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the full session: `repetitions` timed passes over every
    /// selected strategy.
    pub fn run(&self) -> anyhow::Result<SessionOutcome> {
        ensure!(
            self.config.repetitions > 0,
            "repetitions must be at least 1"
        );
        ensure!(!self.strategies.is_empty(), "no strategies selected");

        let session_watch = Stopwatch::start();

        tracing::info!(
            items = self.config.collection_size,
            "preparing benchmark workload"
        );
        let workload = Workload::generate(self.config.collection_size);

        let mut records: Vec<StrategyRecord> = self
            .strategies
            .iter()
            .map(|&strategy| StrategyRecord {
                strategy,
                runs_ms: Vec::with_capacity(self.config.repetitions),
                sums: Vec::with_capacity(self.config.repetitions),
            })
            .collect();

        let total_runs = (self.config.repetitions * self.strategies.len()) as u64;
        let progress = if self.show_progress {
            ProgressBar::new(total_runs)
        } else {
            ProgressBar::hidden()
        };
        progress.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        for repetition in 1..=self.config.repetitions {
            tracing::info!(
                repetition,
                total = self.config.repetitions,
                "starting repetition"
            );

            for (index, strategy) in self.strategies.iter().enumerate() {
                // Hygiene pause: let the previous run's allocations settle
                // before the next stopwatch starts.
                if !self.config.cooldown.is_zero() {
                    std::thread::sleep(self.config.cooldown);
                }

                progress.set_message(strategy.name());
                let (sum, elapsed_ms) = time_run(|| strategy.run(&workload, &self.config));
                tracing::debug!(
                    strategy = strategy.name(),
                    repetition,
                    elapsed_ms,
                    "run complete"
                );

                records[index].runs_ms.push(elapsed_ms);
                records[index].sums.push(sum);
                progress.inc(1);
            }
        }

        progress.finish_and_clear();

        let verified_sum =
            verify_sums(&records).context("strategy results diverged; timings are not comparable")?;

        Ok(SessionOutcome {
            records,
            verified_sum,
            total_duration_ms: session_watch.elapsed_ms(),
        })
    }
}

/// Check that every run of every strategy computed the same sum.
fn verify_sums(records: &[StrategyRecord]) -> anyhow::Result<i64> {
    let reference = records[0].sums[0];

    for record in records {
        for (run, &sum) in record.sums.iter().enumerate() {
            if sum != reference {
                bail!(
                    "strategy '{}' computed {} on repetition {}, expected {}",
                    record.strategy,
                    sum,
                    run + 1,
                    reference
                );
            }
        }
    }

    Ok(reference)
}
