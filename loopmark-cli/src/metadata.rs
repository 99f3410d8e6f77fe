//! System Metadata Collection
//!
//! Captures host details for report metadata. Linux-specific data (CPU
//! model) gracefully degrades to "Unknown" on other platforms.

use chrono::Utc;
use loopmark_core::BenchConfig;
use loopmark_report::{ReportConfig, ReportMeta, SystemInfo};

/// Build report metadata for the session.
pub fn build_report_meta(config: &BenchConfig, workers: usize) -> ReportMeta {
    let system = SystemInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        cpu: get_cpu_model().unwrap_or_else(|| "Unknown".to_string()),
        cpu_cores: available_cores(),
    };

    ReportMeta {
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        system,
        config: ReportConfig {
            collection_size: config.collection_size,
            repetitions: config.repetitions,
            cpu_intensive: config.cpu_intensive,
            memory_intensive: config.memory_intensive,
            inner_loop_iterations: config.inner_loop_iterations,
            memory_chunk_size: config.memory_chunk_size,
            cooldown_ms: config.cooldown.as_millis() as u64,
            workers,
        },
    }
}

/// Get CPU model name from /proc/cpuinfo (Linux only)
fn get_cpu_model() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/proc/cpuinfo")
            .ok()
            .and_then(|content| {
                content
                    .lines()
                    .find(|l| l.starts_with("model name"))
                    .and_then(|l| l.split(':').nth(1))
                    .map(|s| s.trim().to_string())
            })
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

/// Available hardware parallelism
fn available_cores() -> u32 {
    std::thread::available_parallelism()
        .map(|n| n.get() as u32)
        .unwrap_or(1)
}
