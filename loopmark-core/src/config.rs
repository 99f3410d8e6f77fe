//! Benchmark Configuration
//!
//! All knobs are fixed before the first timed run and passed by reference
//! into every component; nothing reads mutable global state.

use std::time::Duration;

/// Configuration for a benchmark session.
///
/// Constructed once at startup (defaults, optionally layered with a config
/// file and CLI flags) and treated as read-only for the session's duration.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Number of items in the workload sequence
    pub collection_size: usize,
    /// How many times each strategy is timed
    pub repetitions: usize,
    /// Enable the CPU-bound phase of the item processor
    pub cpu_intensive: bool,
    /// Enable the memory-bound phase of the item processor
    pub memory_intensive: bool,
    /// Inner-loop step count of the CPU phase
    pub inner_loop_iterations: u32,
    /// Byte size of the scratch buffer allocated per processed item
    pub memory_chunk_size: usize,
    /// Pause between timed runs, a best-effort hygiene step against
    /// cross-run allocator interference
    pub cooldown: Duration,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            collection_size: 1_000_000,
            repetitions: 5,
            cpu_intensive: true,
            memory_intensive: true,
            inner_loop_iterations: 100,
            memory_chunk_size: 4096,
            cooldown: Duration::from_millis(500),
        }
    }
}
