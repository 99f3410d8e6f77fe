//! Human-Readable Output
//!
//! Terminal text mirroring the session's three result sections: the
//! per-strategy summary, the named speed comparisons, and the hardware
//! utilization epilogue.

use crate::report::Report;

/// Format a report for terminal display.
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("Loopmark Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    let config = &report.meta.config;
    output.push_str(&format!(
        "Workload: {} items, {} repetitions per strategy\n",
        config.collection_size, config.repetitions
    ));
    output.push_str(&format!(
        "CPU phase: {} ({} inner steps)  Memory phase: {} ({} byte chunks)\n\n",
        on_off(config.cpu_intensive),
        config.inner_loop_iterations,
        on_off(config.memory_intensive),
        config.memory_chunk_size
    ));

    output.push_str("Results Summary\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');

    let name_width = report
        .strategies
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or(18);

    for strategy in &report.strategies {
        let runs: Vec<String> = strategy.runs_ms.iter().map(|ms| ms.to_string()).collect();
        output.push_str(&format!(
            "  {:<width$}  {:>8.0} ms average ({} ms) - {:.2}% relative performance\n",
            strategy.name,
            strategy.average_ms,
            runs.join(", "),
            strategy.relative_performance,
            width = name_width
        ));
    }

    if !report.speedups.is_empty() {
        output.push_str("\nSpeed Comparisons\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for speedup in &report.speedups {
            let (winner, loser, factor) = if speedup.inverted {
                (&speedup.slower, &speedup.faster, 1.0 / speedup.ratio)
            } else {
                (&speedup.faster, &speedup.slower, speedup.ratio)
            };
            output.push_str(&format!(
                "  {} is {:.2}x faster than {}\n",
                winner, factor, loser
            ));
        }
    }

    if let Some(efficiency) = &report.efficiency {
        output.push_str("\nHardware Utilization\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!("  Worker threads: {}\n", efficiency.workers));
        output.push_str(&format!(
            "  Theoretical maximum speedup: {:.2}x\n",
            efficiency.theoretical_speedup
        ));
        output.push_str(&format!(
            "  Actual parallel speedup: {:.2}x\n",
            efficiency.actual_speedup
        ));
        output.push_str(&format!(
            "  Parallel efficiency: {:.2}% of theoretical maximum\n",
            efficiency.efficiency_percent
        ));
    }

    output.push_str("\nSummary\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "  Strategies: {}  Runs: {}  Verified sum: {}\n",
        report.summary.strategies, report.summary.total_runs, report.summary.verified_sum
    ));
    output.push_str(&format!(
        "  Session duration: {} ms\n",
        report.summary.total_duration_ms
    ));

    output
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
