//! Item Processor
//!
//! The synthetic per-element transform every strategy applies. Two phases,
//! each individually toggleable:
//!
//! - CPU phase: a data-dependent arithmetic chain with a transcendental
//!   call per step, which keeps the loop non-vectorizable and the per-item
//!   cost stable across strategies.
//! - Memory phase: a freshly allocated scratch buffer per call (never
//!   pooled), filled by a linear-congruential recurrence and then scanned
//!   with an XOR fold. The allocation itself is part of the measured load.
//!
//! Deterministic: the same `item` and `BenchConfig` always produce the
//! same result. With both phases disabled the transform is the identity.

use crate::config::BenchConfig;

/// Apply the synthetic transform to one workload element.
///
/// The returned value must be consumed by the caller (the strategies sum
/// it); that data dependency is what keeps the computation alive under
/// optimization.
pub fn process_item(item: i64, config: &BenchConfig) -> i64 {
    let mut result = item;

    if config.cpu_intensive {
        for step in 0..config.inner_loop_iterations {
            // Signed remainder keeps parity with runs where the sine
            // adjustment drives the accumulator negative.
            result = (result * 31 + step as i64) % 997;
            let sine = (result as f64 * 0.01).sin();
            result += (sine * 10.0) as i64;
        }
    }

    if config.memory_intensive {
        let mut buffer = vec![0u8; config.memory_chunk_size];

        let fill = buffer.len().min(1000);
        for byte in buffer.iter_mut().take(fill) {
            *byte = (result & 0xFF) as u8;
            result = (result * 7 + 1) % (i32::MAX as i64);
        }

        // Fold every 10th byte back in so the scan cannot be elided.
        let scan = buffer.len().min(100);
        for (i, &byte) in buffer.iter().enumerate().take(scan) {
            if i % 10 == 0 {
                result ^= byte as i64;
            }
        }
    }

    result
}
