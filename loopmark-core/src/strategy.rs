//! Iteration Strategies
//!
//! Six ways of computing `sum(process_item(x))` over the workload. The
//! four sequential variants differ only in traversal mechanics; the two
//! parallel variants fan the same work out across Rayon's pool. All six
//! are required to produce the identical sum for a given workload and
//! configuration, so the only observable difference is execution time.
//!
//! The parallel variants avoid per-element synchronization entirely:
//! each worker reduces its share to a local partial sum and the partials
//! are merged only after the parallel region joins. Integer addition is
//! associative and commutative, so merge order cannot change the result.
//! A panic on any worker propagates out of the parallel region and fails
//! the whole invocation rather than silently dropping a contribution.

use crate::config::BenchConfig;
use crate::process::process_item;
use crate::workload::Workload;
use rayon::prelude::*;
use std::fmt;

/// One of the six benchmarked iteration strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Position-based loop over `0..len`, accumulating into a scalar
    IndexedLoop,
    /// Iterator loop over the elements themselves
    CursorLoop,
    /// Lazy `map` pipeline reduced with `sum`
    IteratorPipeline,
    /// Per-element callback expressed as a pure `fold` reduction
    CallbackFold,
    /// Chunked data-parallel loop, one local partial sum per worker
    ParallelChunks,
    /// Declarative parallel map-reduce pipeline
    ParallelPipeline,
}

impl Strategy {
    /// Every strategy, in canonical benchmark order.
    pub const ALL: [Strategy; 6] = [
        Strategy::IndexedLoop,
        Strategy::CursorLoop,
        Strategy::IteratorPipeline,
        Strategy::CallbackFold,
        Strategy::ParallelChunks,
        Strategy::ParallelPipeline,
    ];

    /// Stable display name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::IndexedLoop => "indexed-loop",
            Strategy::CursorLoop => "cursor-loop",
            Strategy::IteratorPipeline => "iterator-pipeline",
            Strategy::CallbackFold => "callback-fold",
            Strategy::ParallelChunks => "parallel-chunks",
            Strategy::ParallelPipeline => "parallel-pipeline",
        }
    }

    /// Whether this strategy fans out across the worker pool.
    pub fn is_parallel(&self) -> bool {
        matches!(self, Strategy::ParallelChunks | Strategy::ParallelPipeline)
    }

    /// Run this strategy over the full workload and return the sum.
    pub fn run(&self, workload: &Workload, config: &BenchConfig) -> i64 {
        let data = workload.items();
        match self {
            Strategy::IndexedLoop => run_indexed(data, config),
            Strategy::CursorLoop => run_cursor(data, config),
            Strategy::IteratorPipeline => run_pipeline(data, config),
            Strategy::CallbackFold => run_callback_fold(data, config),
            Strategy::ParallelChunks => run_parallel_chunks(data, config),
            Strategy::ParallelPipeline => run_parallel_pipeline(data, config),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Indexed access is the point of this variant, not an oversight.
#[allow(clippy::needless_range_loop)]
fn run_indexed(data: &[i64], config: &BenchConfig) -> i64 {
    let mut sum = 0i64;
    for i in 0..data.len() {
        sum += process_item(data[i], config);
    }
    sum
}

fn run_cursor(data: &[i64], config: &BenchConfig) -> i64 {
    let mut sum = 0i64;
    for &item in data {
        sum += process_item(item, config);
    }
    sum
}

fn run_pipeline(data: &[i64], config: &BenchConfig) -> i64 {
    data.iter().map(|&item| process_item(item, config)).sum()
}

fn run_callback_fold(data: &[i64], config: &BenchConfig) -> i64 {
    data.iter()
        .fold(0i64, |acc, &item| acc + process_item(item, config))
}

/// Contiguous chunks, one per worker. Each chunk reduces to a local
/// partial sum; the partials merge only after every worker has finished,
/// so no lock is held while elements are being processed.
fn run_parallel_chunks(data: &[i64], config: &BenchConfig) -> i64 {
    let workers = rayon::current_num_threads().max(1);
    let chunk_len = data.len().div_ceil(workers).max(1);

    data.par_chunks(chunk_len)
        .map(|chunk| {
            chunk
                .iter()
                .map(|&item| process_item(item, config))
                .sum::<i64>()
        })
        .sum()
}

fn run_parallel_pipeline(data: &[i64], config: &BenchConfig) -> i64 {
    data.par_iter()
        .map(|&item| process_item(item, config))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> BenchConfig {
        BenchConfig {
            collection_size: 64,
            cpu_intensive: true,
            memory_intensive: true,
            inner_loop_iterations: 5,
            memory_chunk_size: 256,
            ..BenchConfig::default()
        }
    }

    #[test]
    fn test_all_strategies_agree() {
        let config = small_config();
        let workload = Workload::generate(config.collection_size);

        let sums: Vec<i64> = Strategy::ALL
            .iter()
            .map(|s| s.run(&workload, &config))
            .collect();

        for (strategy, sum) in Strategy::ALL.iter().zip(&sums) {
            assert_eq!(
                *sum, sums[0],
                "{} diverged from indexed-loop",
                strategy
            );
        }
    }

    #[test]
    fn test_identity_sum_when_phases_disabled() {
        let config = BenchConfig {
            cpu_intensive: false,
            memory_intensive: false,
            ..BenchConfig::default()
        };
        let workload = Workload::generate(10);

        for strategy in Strategy::ALL {
            assert_eq!(strategy.run(&workload, &config), 55, "{}", strategy);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        // Partitioning and merge order must not change the sum.
        let config = BenchConfig {
            cpu_intensive: true,
            memory_intensive: false,
            inner_loop_iterations: 10,
            ..BenchConfig::default()
        };
        let workload = Workload::generate(1000);

        let sequential = Strategy::IndexedLoop.run(&workload, &config);
        assert_eq!(Strategy::ParallelChunks.run(&workload, &config), sequential);
        assert_eq!(
            Strategy::ParallelPipeline.run(&workload, &config),
            sequential
        );
    }

    #[test]
    fn test_empty_workload() {
        let config = small_config();
        let workload = Workload::generate(0);
        for strategy in Strategy::ALL {
            assert_eq!(strategy.run(&workload, &config), 0, "{}", strategy);
        }
    }

    #[test]
    fn test_names_are_stable() {
        assert_eq!(Strategy::IndexedLoop.name(), "indexed-loop");
        assert_eq!(Strategy::ParallelPipeline.to_string(), "parallel-pipeline");
        assert!(Strategy::ParallelChunks.is_parallel());
        assert!(!Strategy::CallbackFold.is_parallel());
    }

    #[test]
    fn test_repeated_runs_are_deterministic() {
        let config = small_config();
        let workload = Workload::generate(config.collection_size);

        let first = Strategy::ParallelPipeline.run(&workload, &config);
        for _ in 0..3 {
            assert_eq!(Strategy::ParallelPipeline.run(&workload, &config), first);
        }
    }
}
