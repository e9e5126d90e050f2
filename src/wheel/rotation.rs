//! Rotation controller - smoothed angular offset of the card wheel
//!
//! Current and target offsets are unbounded degrees (never wrapped), so
//! multi-revolution shuffle spins accumulate without discontinuity. Each
//! render tick the current offset takes a fixed fraction of the remaining
//! gap, which reads as a decelerating, physical spin.

/// Fraction of the remaining gap covered per tick; smaller = more inertia.
pub const SMOOTHING: f64 = 0.12;

/// Degrees of target motion per unit of normalized swipe delta.
pub const SWIPE_GAIN: f64 = 600.0;

/// One shuffle impulse: five full turns.
pub const SHUFFLE_SPIN_DEGREES: f64 = 1800.0;

/// Current vs. desired angular offset of the wheel
pub struct RotationState {
    current: f64,
    target: f64,
}

impl RotationState {
    pub fn new() -> Self {
        Self {
            current: 0.0,
            target: 0.0,
        }
    }

    /// One render tick of exponential approach. The caller suppresses this
    /// while a draw is in progress.
    pub fn tick(&mut self) {
        self.current += (self.target - self.current) * SMOOTHING;
    }

    /// Apply a swipe delta (normalized units) to the target.
    pub fn swipe(&mut self, delta: f32) {
        self.target += delta as f64 * SWIPE_GAIN;
    }

    /// Queue a shuffle spin. Composes additively with any unfinished spin.
    pub fn shuffle(&mut self) {
        self.target += SHUFFLE_SPIN_DEGREES;
    }

    /// Kill residual velocity without moving the wheel: the target snaps to
    /// wherever the wheel currently is.
    pub fn stop(&mut self) {
        self.target = self.current;
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    #[cfg(test)]
    pub(crate) fn set(&mut self, current: f64, target: f64) {
        self.current = current;
        self.target = target;
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new()
    }
}
