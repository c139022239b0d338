//! Keep-last-N buffer for smoothing hit-test samples.

use std::collections::VecDeque;

use crate::vec3::Vec3;

/// A bounded buffer of recent position samples.
///
/// Hit-test results jitter frame to frame; feeding the mean of the last few
/// samples into a measurement instead of the raw point steadies the far
/// endpoint. When full, pushing evicts the oldest sample.
///
/// # Example
///
/// ```
/// use ruler_math::{SampleBuffer, Vec3};
///
/// let mut buffer = SampleBuffer::new(3);
/// buffer.push(Vec3::new(1.0, 0.0, 0.0));
/// buffer.push(Vec3::new(3.0, 0.0, 0.0));
///
/// assert_eq!(buffer.mean(), Some(Vec3::new(2.0, 0.0, 0.0)));
/// ```
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    /// Maximum capacity.
    capacity: usize,

    /// Samples in arrival order.
    samples: VecDeque<Vec3>,
}

impl SampleBuffer {
    /// Creates a buffer keeping at most `capacity` samples (clamped to ≥ 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            samples: VecDeque::with_capacity(capacity.max(1)),
        }
    }

    /// Returns the capacity of the buffer.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of buffered samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if no samples are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns true if the buffer is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.samples.len() >= self.capacity
    }

    /// Removes all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Pushes a sample, evicting the oldest when at capacity.
    pub fn push(&mut self, sample: Vec3) {
        if self.is_full() {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Returns the most recent sample.
    #[must_use]
    pub fn latest(&self) -> Option<Vec3> {
        self.samples.back().copied()
    }

    /// Returns the arithmetic mean of the buffered samples.
    ///
    /// `None` when the buffer is empty.
    #[must_use]
    pub fn mean(&self) -> Option<Vec3> {
        crate::vec3::average(self.samples.iter().copied())
    }
}
