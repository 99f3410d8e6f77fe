#![warn(missing_docs)]
//! Loopmark Statistical Aggregation
//!
//! Turns per-strategy duration records into the session's comparison
//! figures:
//! - per-strategy averages and baseline-relative performance percentages
//! - pairwise speedup ratios with inverse framing when the expected
//!   loser wins
//! - parallel efficiency against the host's available parallelism
//!
//! There is deliberately no machinery beyond these: no variance, no
//! percentiles, no resampling. The harness compares averages.

mod comparison;
mod summary;

pub use comparison::{ParallelEfficiency, SpeedupRatio, compute_speedup, parallel_efficiency};
pub use summary::{RunSet, StrategySummary, average, summarize};

use thiserror::Error;

/// Errors from statistics computation.
///
/// Both variants are fatal to the session: a benchmark either completes
/// with usable figures or the whole run is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// A strategy recorded no runs, so its average is undefined.
    #[error("strategy '{strategy}' produced no runs to average")]
    EmptyRuns {
        /// Name of the strategy with an empty run set
        strategy: String,
    },
    /// A zero average cannot anchor a ratio.
    #[error("strategy '{strategy}' has a zero average; ratio is undefined")]
    ZeroAverage {
        /// Name of the strategy whose average is zero
        strategy: String,
    },
}
