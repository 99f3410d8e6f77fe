//! Per-Strategy Summaries
//!
//! Averages each strategy's recorded durations and expresses every
//! strategy relative to the session baseline. The baseline is the SLOWEST
//! average: it scores exactly 100 and every faster strategy scores
//! proportionally above it.

use crate::StatsError;

/// One strategy's recorded durations over a session.
#[derive(Debug, Clone)]
pub struct RunSet {
    /// Strategy display name
    pub name: String,
    /// Elapsed whole milliseconds, one entry per repetition, in run order
    pub runs_ms: Vec<u64>,
}

impl RunSet {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, runs_ms: Vec<u64>) -> Self {
        Self {
            name: name.into(),
            runs_ms,
        }
    }
}

/// Aggregated figures for one strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategySummary {
    /// Strategy display name
    pub name: String,
    /// The raw per-repetition durations the average was computed from
    pub runs_ms: Vec<u64>,
    /// Mean duration in milliseconds
    pub average_ms: f64,
    /// `baseline / average * 100`, where baseline is the maximum average
    /// across the session. 100 marks the slowest strategy.
    pub relative_performance: f64,
}

/// Average a strategy's run durations.
///
/// An empty run set is a configuration error (repetitions misconfigured
/// to zero) and is surfaced rather than defaulted.
pub fn average(name: &str, runs_ms: &[u64]) -> Result<f64, StatsError> {
    if runs_ms.is_empty() {
        return Err(StatsError::EmptyRuns {
            strategy: name.to_string(),
        });
    }
    Ok(runs_ms.iter().sum::<u64>() as f64 / runs_ms.len() as f64)
}

/// Summarize a whole session: averages plus baseline-relative figures.
///
/// Returns summaries in the same order as `records`.
pub fn summarize(records: &[RunSet]) -> Result<Vec<StrategySummary>, StatsError> {
    let averages: Vec<f64> = records
        .iter()
        .map(|r| average(&r.name, &r.runs_ms))
        .collect::<Result<_, _>>()?;

    let baseline = averages.iter().cloned().fold(0.0f64, f64::max);

    Ok(records
        .iter()
        .zip(averages)
        .map(|(record, average_ms)| {
            // Sub-millisecond runs can truncate to a zero average; report
            // those as on par with the baseline instead of dividing by zero.
            let relative_performance = if average_ms > 0.0 {
                (baseline / average_ms) * 100.0
            } else {
                100.0
            };
            StrategySummary {
                name: record.name.clone(),
                runs_ms: record.runs_ms.clone(),
                average_ms,
                relative_performance,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average() {
        assert_eq!(average("x", &[10, 20, 30]).unwrap(), 20.0);
        assert_eq!(average("x", &[7]).unwrap(), 7.0);
    }

    #[test]
    fn test_average_empty_is_error() {
        let err = average("cursor-loop", &[]).unwrap_err();
        assert_eq!(
            err,
            StatsError::EmptyRuns {
                strategy: "cursor-loop".to_string()
            }
        );
    }

    #[test]
    fn test_baseline_is_slowest() {
        let records = vec![
            RunSet::new("fast", vec![10, 10, 10]),
            RunSet::new("slow", vec![40, 40, 40]),
            RunSet::new("mid", vec![20, 20, 20]),
        ];
        let summaries = summarize(&records).unwrap();

        // The slowest strategy anchors the scale at exactly 100; faster
        // strategies score proportionally above it.
        assert_eq!(summaries[1].relative_performance, 100.0);
        assert_eq!(summaries[0].relative_performance, 400.0);
        assert_eq!(summaries[2].relative_performance, 200.0);

        for summary in &summaries {
            assert!(summary.relative_performance >= 100.0);
        }
    }

    #[test]
    fn test_summary_order_preserved() {
        let records = vec![
            RunSet::new("a", vec![5]),
            RunSet::new("b", vec![10]),
        ];
        let summaries = summarize(&records).unwrap();
        assert_eq!(summaries[0].name, "a");
        assert_eq!(summaries[1].name, "b");
    }

    #[test]
    fn test_summarize_propagates_empty_runs() {
        let records = vec![
            RunSet::new("ok", vec![5]),
            RunSet::new("broken", vec![]),
        ];
        assert!(matches!(
            summarize(&records),
            Err(StatsError::EmptyRuns { .. })
        ));
    }

    #[test]
    fn test_zero_average_reports_par() {
        let records = vec![
            RunSet::new("instant", vec![0, 0]),
            RunSet::new("slow", vec![10, 10]),
        ];
        let summaries = summarize(&records).unwrap();
        assert_eq!(summaries[0].relative_performance, 100.0);
    }
}
