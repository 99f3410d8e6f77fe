//! CSV Output
//!
//! One row per strategy; raw run durations are packed into a single
//! semicolon-separated column so the file stays rectangular regardless
//! of repetition count.

use crate::report::Report;

/// Generate a CSV report, one row per strategy.
pub fn generate_csv_report(report: &Report) -> String {
    let mut output = String::new();
    output.push_str("strategy,parallel,average_ms,relative_performance,runs_ms\n");

    for strategy in &report.strategies {
        let runs: Vec<String> = strategy.runs_ms.iter().map(|ms| ms.to_string()).collect();
        output.push_str(&format!(
            "{},{},{:.2},{:.2},{}\n",
            strategy.name,
            strategy.parallel,
            strategy.average_ms,
            strategy.relative_performance,
            runs.join(";")
        ));
    }

    output
}
