//! Configuration loading from loopmark.toml
//!
//! All knobs have compiled-in defaults; a `loopmark.toml` discovered by
//! walking up from the current directory can override them, and CLI flags
//! override both.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Loopmark configuration file contents
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoopmarkConfig {
    /// Workload shape and processor intensity
    #[serde(default)]
    pub workload: WorkloadConfig,
    /// Repetition and scheduling knobs
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Report output selection
    #[serde(default)]
    pub output: OutputConfig,
}

/// Workload shape and item-processor intensity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of items in the workload
    #[serde(default = "default_size")]
    pub size: usize,
    /// Enable the CPU-bound phase
    #[serde(default = "default_true")]
    pub cpu_intensive: bool,
    /// Enable the memory-bound phase
    #[serde(default = "default_true")]
    pub memory_intensive: bool,
    /// Inner-loop steps of the CPU phase
    #[serde(default = "default_inner_iterations")]
    pub inner_iterations: u32,
    /// Scratch buffer size in bytes
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            cpu_intensive: default_true(),
            memory_intensive: default_true(),
            inner_iterations: default_inner_iterations(),
            chunk_size: default_chunk_size(),
        }
    }
}

/// Repetition and scheduling knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Timed runs per strategy
    #[serde(default = "default_repetitions")]
    pub repetitions: usize,
    /// Pause before each timed run (e.g. "500ms", "1s")
    #[serde(default = "default_cooldown")]
    pub cooldown: String,
    /// Worker threads for the parallel strategies (0 = all cores)
    #[serde(default)]
    pub threads: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            repetitions: default_repetitions(),
            cooldown: default_cooldown(),
            threads: 0,
        }
    }
}

/// Report output selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human", "json", "csv"
    #[serde(default = "default_format")]
    pub format: String,
    /// Output file path (stdout when unset)
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            path: None,
        }
    }
}

fn default_size() -> usize {
    1_000_000
}
fn default_true() -> bool {
    true
}
fn default_inner_iterations() -> u32 {
    100
}
fn default_chunk_size() -> usize {
    4096
}
fn default_repetitions() -> usize {
    5
}
fn default_cooldown() -> String {
    "500ms".to_string()
}
fn default_format() -> String {
    "human".to_string()
}

impl LoopmarkConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from the
    /// current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("loopmark.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# Loopmark Configuration

[workload]
# Number of items in the workload
size = 1000000
# CPU-bound phase of the item processor
cpu_intensive = true
# Memory-bound phase of the item processor
memory_intensive = true
# Inner-loop steps of the CPU phase
inner_iterations = 100
# Scratch buffer size in bytes
chunk_size = 4096

[runner]
# Timed runs per strategy
repetitions = 5
# Pause before each timed run
cooldown = "500ms"
# Worker threads for the parallel strategies (0 = all cores)
threads = 0

[output]
# Default output format: human, json, csv
format = "human"
# Output file (uncomment to write instead of printing)
# path = "loopmark-report.json"
"#
        .to_string()
    }

    /// Parse a duration string (e.g. "500ms", "2s", "1m")
    pub fn parse_duration(s: &str) -> anyhow::Result<Duration> {
        let s = s.trim();
        if s.is_empty() {
            return Err(anyhow::anyhow!("Empty duration string"));
        }

        let (num_part, unit_part) = s
            .char_indices()
            .find(|(_, c)| c.is_alphabetic())
            .map(|(i, _)| s.split_at(i))
            .unwrap_or((s, "s"));

        let value: f64 = num_part
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid duration number: {}", num_part))?;

        let nanos: u64 = match unit_part.to_lowercase().as_str() {
            "ns" => 1,
            "us" => 1_000,
            "ms" => 1_000_000,
            "s" | "" => 1_000_000_000,
            "m" | "min" => 60_000_000_000,
            _ => return Err(anyhow::anyhow!("Unknown duration unit: {}", unit_part)),
        };

        Ok(Duration::from_nanos((value * nanos as f64) as u64))
    }
}
