//! Hold timers and the shared cooldown gate
//!
//! A held gesture only fires after its condition has been continuously true
//! for a minimum duration, fires exactly once per run, and is followed by a
//! cooldown window during which no held gesture is evaluated at all.

/// Debounce timer for one held gesture (fist or pinch)
pub struct HoldTimer {
    min_hold_ms: f64,
    started: Option<f64>,
}

impl HoldTimer {
    pub fn new(min_hold_ms: f64) -> Self {
        Self {
            min_hold_ms,
            started: None,
        }
    }

    /// Advance the timer with this frame's condition. Returns true exactly
    /// once per continuous run, when the hold duration is exceeded.
    ///
    /// Firing clears the start timestamp, so holding longer never refires.
    /// A false condition clears the timestamp with no action on release.
    pub fn update(&mut self, condition: bool, now_ms: f64) -> bool {
        if !condition {
            self.started = None;
            return false;
        }
        match self.started {
            None => {
                self.started = Some(now_ms);
                false
            }
            Some(start) if now_ms - start > self.min_hold_ms => {
                self.started = None;
                true
            }
            Some(_) => false,
        }
    }

    /// Drop any partial hold (hand lost or evaluation suppressed).
    pub fn clear(&mut self) {
        self.started = None;
    }

    pub fn is_armed(&self) -> bool {
        self.started.is_some()
    }
}

/// Post-trigger suppression window shared by both held gestures.
///
/// Modeled as a deadline timestamp rather than a deferred flag unset, so
/// expiry needs no host timer and the gate is trivially testable.
pub struct CooldownGate {
    until_ms: f64,
}

impl CooldownGate {
    pub fn new() -> Self {
        Self { until_ms: 0.0 }
    }

    pub fn engage(&mut self, now_ms: f64, window_ms: f64) {
        self.until_ms = now_ms + window_ms;
    }

    pub fn is_active(&self, now_ms: f64) -> bool {
        now_ms < self.until_ms
    }
}

impl Default for CooldownGate {
    fn default() -> Self {
        Self::new()
    }
}
