//! Wall-Clock Timing
//!
//! A monotonic stopwatch brackets exactly one strategy invocation.
//! Workload generation happens before the watch starts, and the watch is
//! created fresh for every timed run. Durations are reported in whole
//! milliseconds; sub-millisecond noise is out of scope for this harness.

use std::time::{Duration, Instant};

/// Monotonic stopwatch for a single benchmark run.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Start a new stopwatch.
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time since the watch was started.
    #[inline(always)]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time in whole milliseconds.
    #[inline(always)]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }
}

/// Time one strategy invocation and return `(sum, elapsed_ms)`.
///
/// The computed sum passes through `black_box` so the compiler cannot
/// discard the work even when a caller ignores the value.
pub fn time_run<F>(run: F) -> (i64, u64)
where
    F: FnOnce() -> i64,
{
    let watch = Stopwatch::start();
    let sum = std::hint::black_box(run());
    (sum, watch.elapsed_ms())
}
