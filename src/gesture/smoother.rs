//! Exponential moving average for the tracked hand position
//!
//! Removes per-frame jitter from the palm X coordinate before swipe deltas
//! are computed. Fixed 0.2/0.8 blend - heavier history than the One Euro
//! family because the wheel only needs slow horizontal drags, not fast
//! strikes.

/// Weight given to the new sample; history gets the remainder.
pub const EMA_ALPHA: f32 = 0.2;

/// Low-pass filter over a single scalar signal
pub struct EmaSmoother {
    value: Option<f32>,
}

impl EmaSmoother {
    pub fn new() -> Self {
        Self { value: None }
    }

    /// Filter one raw sample.
    ///
    /// The first sample after a reset passes through unchanged so hand
    /// acquisition has no smoothing lag.
    pub fn filter(&mut self, raw: f32) -> f32 {
        let next = match self.value {
            Some(prev) => prev * (1.0 - EMA_ALPHA) + raw * EMA_ALPHA,
            None => raw,
        };
        self.value = Some(next);
        next
    }

    /// Clear history (hand lost).
    pub fn reset(&mut self) {
        self.value = None;
    }

    pub fn is_initialized(&self) -> bool {
        self.value.is_some()
    }
}

impl Default for EmaSmoother {
    fn default() -> Self {
        Self::new()
    }
}
