//! Fixed-length sample window for one channel

use std::collections::VecDeque;

/// Sliding window over the most recent samples of a channel.
///
/// The window always holds exactly `capacity` samples. It starts out filled
/// with zeros, so the average reads low until `capacity` real samples have
/// been pushed. `capacity` must be non-zero; `AppConfig::validate` rejects a
/// zero window before any buffer is built.
#[derive(Debug, Clone)]
pub struct ChannelBuffer {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl ChannelBuffer {
    /// Create a zero-filled window of `capacity` samples
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "channel window must hold at least one sample");
        Self {
            samples: std::iter::repeat(0.0).take(capacity).collect(),
            capacity,
        }
    }

    /// Append `value` and drop the oldest sample
    pub fn push(&mut self, value: f64) {
        self.samples.pop_front();
        self.samples.push_back(value);
    }

    /// Arithmetic mean over the whole window
    pub fn average(&self) -> f64 {
        self.samples.iter().sum::<f64>() / self.capacity as f64
    }

    pub fn latest(&self) -> f64 {
        self.samples.back().copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Samples, oldest first
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }
}
