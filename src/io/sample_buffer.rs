//! Bounded sliding-window sample buffer

use std::collections::VecDeque;

/// Bounded FIFO buffer holding the most recent luminance samples
///
/// Capacity is fixed at construction. Pushing beyond capacity evicts the
/// oldest samples, so the buffer always holds the latest `capacity`
/// samples in chronological order. Single producer; `push` never fails.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    data: VecDeque<f32>,
    capacity: usize,
}

impl SampleBuffer {
    /// Create a buffer holding at most `capacity` samples
    pub fn new(capacity: usize) -> Self {
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting from the front if the buffer is full
    pub fn push(&mut self, sample: f32) {
        if self.capacity == 0 {
            return;
        }
        while self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(sample);
    }

    /// Current contents in chronological order (oldest first)
    ///
    /// Returns an owned copy; repeated calls do not affect the buffer.
    pub fn snapshot(&self) -> Vec<f32> {
        self.data.iter().copied().collect()
    }

    /// Number of samples currently buffered
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` if no samples are buffered
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Maximum number of samples the buffer holds
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// `true` once the buffer holds at least `min_fill_fraction` of its
    /// capacity
    pub fn is_ready(&self, min_fill_fraction: f64) -> bool {
        self.data.len() as f64 >= self.capacity as f64 * min_fill_fraction
    }

    /// Discard all buffered samples
    pub fn clear(&mut self) {
        self.data.clear();
    }
}
