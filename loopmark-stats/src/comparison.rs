//! Pairwise Comparison
//!
//! Named speedup ratios between strategy pairs and the parallel-efficiency
//! figure that relates observed speedup to the theoretical linear maximum
//! on the host. Ratios are computed from averages only; the callers decide
//! which pairs are worth naming.

use crate::StatsError;
use std::fmt;

/// Speedup of one strategy over another.
///
/// Constructed from an expected-slower / expected-faster pair; when the
/// expectation turns out backwards the ratio is reported in its inverse
/// framing instead of being clamped or hidden.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedupRatio {
    /// Strategy expected to be slower
    pub slower: String,
    /// Strategy expected to be faster
    pub faster: String,
    /// `slower_avg / faster_avg`; below 1.0 the expectation was wrong
    pub ratio: f64,
}

impl SpeedupRatio {
    /// Whether the expected-slower strategy actually won.
    pub fn inverted(&self) -> bool {
        self.ratio < 1.0
    }

    /// The winning side's speedup factor, always >= 1.
    pub fn winning_factor(&self) -> f64 {
        if self.inverted() {
            1.0 / self.ratio
        } else {
            self.ratio
        }
    }
}

impl fmt::Display for SpeedupRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inverted() {
            write!(
                f,
                "{} is {:.2}x faster than {}",
                self.slower,
                self.winning_factor(),
                self.faster
            )
        } else {
            write!(
                f,
                "{} is {:.2}x faster than {}",
                self.faster, self.ratio, self.slower
            )
        }
    }
}

/// Compute the speedup ratio between two strategies' averages.
///
/// Symmetric by construction: swapping the two sides yields the
/// reciprocal ratio.
pub fn compute_speedup(
    slower: &str,
    slower_avg_ms: f64,
    faster: &str,
    faster_avg_ms: f64,
) -> Result<SpeedupRatio, StatsError> {
    if faster_avg_ms <= 0.0 {
        return Err(StatsError::ZeroAverage {
            strategy: faster.to_string(),
        });
    }
    if slower_avg_ms <= 0.0 {
        return Err(StatsError::ZeroAverage {
            strategy: slower.to_string(),
        });
    }

    Ok(SpeedupRatio {
        slower: slower.to_string(),
        faster: faster.to_string(),
        ratio: slower_avg_ms / faster_avg_ms,
    })
}

/// Observed parallel speedup measured against the theoretical linear
/// maximum for the worker count.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallelEfficiency {
    /// Size of the worker pool the parallel strategies ran on
    pub workers: usize,
    /// Linear-scaling ceiling, `workers` as a factor
    pub theoretical_speedup: f64,
    /// `sequential_avg / parallel_avg`
    pub actual_speedup: f64,
    /// `actual / theoretical * 100`
    pub efficiency_percent: f64,
}

/// Relate an observed sequential/parallel pair to the linear maximum.
pub fn parallel_efficiency(
    sequential_avg_ms: f64,
    parallel_avg_ms: f64,
    workers: usize,
) -> Result<ParallelEfficiency, StatsError> {
    if parallel_avg_ms <= 0.0 {
        return Err(StatsError::ZeroAverage {
            strategy: "parallel".to_string(),
        });
    }

    let workers = workers.max(1);
    let theoretical_speedup = workers as f64;
    let actual_speedup = sequential_avg_ms / parallel_avg_ms;
    let efficiency_percent = (actual_speedup / theoretical_speedup) * 100.0;

    Ok(ParallelEfficiency {
        workers,
        theoretical_speedup,
        actual_speedup,
        efficiency_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_direction() {
        let speedup = compute_speedup("seq", 100.0, "par", 25.0).unwrap();
        assert_eq!(speedup.ratio, 4.0);
        assert!(!speedup.inverted());
        assert_eq!(speedup.to_string(), "par is 4.00x faster than seq");
    }

    #[test]
    fn test_inverse_framing() {
        // The "slower" side winning flips the sentence, not the math.
        let speedup = compute_speedup("seq", 20.0, "par", 40.0).unwrap();
        assert_eq!(speedup.ratio, 0.5);
        assert!(speedup.inverted());
        assert_eq!(speedup.winning_factor(), 2.0);
        assert_eq!(speedup.to_string(), "seq is 2.00x faster than par");
    }

    #[test]
    fn test_symmetry_is_reciprocal() {
        let forward = compute_speedup("a", 120.0, "b", 30.0).unwrap();
        let swapped = compute_speedup("b", 30.0, "a", 120.0).unwrap();
        assert!((forward.ratio * swapped.ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_average_is_error() {
        assert!(matches!(
            compute_speedup("a", 0.0, "b", 10.0),
            Err(StatsError::ZeroAverage { .. })
        ));
        assert!(matches!(
            compute_speedup("a", 10.0, "b", 0.0),
            Err(StatsError::ZeroAverage { .. })
        ));
    }

    #[test]
    fn test_efficiency_formula() {
        // 4x actual speedup on 8 workers = 50% of linear.
        let eff = parallel_efficiency(100.0, 25.0, 8).unwrap();
        assert_eq!(eff.theoretical_speedup, 8.0);
        assert_eq!(eff.actual_speedup, 4.0);
        assert_eq!(eff.efficiency_percent, 50.0);
    }

    #[test]
    fn test_efficiency_single_worker() {
        // One worker: actual speedup IS the efficiency.
        let eff = parallel_efficiency(100.0, 100.0, 1).unwrap();
        assert_eq!(eff.efficiency_percent, 100.0);

        // workers below 1 are clamped rather than dividing by zero
        let eff = parallel_efficiency(100.0, 50.0, 0).unwrap();
        assert_eq!(eff.workers, 1);
        assert_eq!(eff.efficiency_percent, 200.0);
    }

    #[test]
    fn test_efficiency_zero_parallel_average() {
        assert!(matches!(
            parallel_efficiency(100.0, 0.0, 4),
            Err(StatsError::ZeroAverage { .. })
        ));
    }
}
