#![warn(missing_docs)]
//! Loopmark Core - Workload and Strategy Runtime
//!
//! This crate provides the measured half of the benchmark:
//! - `Workload` generation (the fixed input sequence)
//! - `process_item`, the synthetic CPU/memory transform applied per element
//! - `Stopwatch`/`time_run` wall-clock timing
//! - The six iteration strategies (four sequential, two Rayon-based parallel)
//!
//! Everything here is deterministic: given the same `BenchConfig` and
//! workload, every strategy produces the same sum on every run.

mod config;
mod measure;
mod process;
mod strategy;
mod workload;

pub use config::BenchConfig;
pub use measure::{Stopwatch, time_run};
pub use process::process_item;
pub use strategy::Strategy;
pub use workload::Workload;

/// Number of worker threads the parallel strategies will fan out across.
///
/// This is Rayon's current global pool size, which defaults to the host's
/// available hardware parallelism unless bounded by the caller.
pub fn worker_count() -> usize {
    rayon::current_num_threads().max(1)
}
