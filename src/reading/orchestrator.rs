//! Reading orchestrator - draw lifecycle and staged reveal scheduling
//!
//! Phase machine `Idle -> Drawing -> Idle`: a pinch-draw enters Drawing,
//! only a two-hand reset leaves it. Reveal animation steps are deadline
//! events polled against the clock rather than host timers; each event
//! carries the session id it was scheduled under, so events left over from
//! a torn-down reading are inert no-ops instead of faults.

use rand::Rng;

use super::deck::{draw_reading, ReadingEntry, READING_SIZE};

/// Delay before a drawn card flies to its fan slot.
pub const ENTER_DELAY_MS: f64 = 200.0;

/// Further delay (after entering) before the glow state is applied.
pub const GLOW_DELAY_MS: f64 = 800.0;

/// Orchestrator phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawPhase {
    Idle,
    Drawing,
}

/// Kind of staged reveal step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealKind {
    /// Fly to the fan slot (with 180° rotation if reversed).
    Enter,
    Glow,
}

/// A deadline event scheduled against a specific draw session
#[derive(Clone, Copy, Debug)]
struct RevealEvent {
    at_ms: f64,
    session: u64,
    slot: usize,
    kind: RevealKind,
}

/// A due reveal step, ready for the rendering side to apply
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealEffect {
    pub slot: usize,
    pub kind: RevealKind,
    pub entry: ReadingEntry,
}

/// Owns the draw phase, the active reading, and its pending reveal events
pub struct ReadingOrchestrator {
    phase: DrawPhase,
    /// Bumped on every begin and reset; pending events from other sessions
    /// are stale and fire as no-ops.
    session: u64,
    reading: Option<[ReadingEntry; READING_SIZE]>,
    pending: Vec<RevealEvent>,
    overlay: bool,
}

impl ReadingOrchestrator {
    pub fn new() -> Self {
        Self {
            phase: DrawPhase::Idle,
            session: 0,
            reading: None,
            pending: Vec::new(),
            overlay: false,
        }
    }

    /// Start a draw. Returns false (and does nothing) if one is already in
    /// progress - a second trigger while Drawing is a no-op.
    pub fn begin<R: Rng>(&mut self, now_ms: f64, rng: &mut R) -> bool {
        if self.phase == DrawPhase::Drawing {
            return false;
        }

        self.session += 1;
        self.phase = DrawPhase::Drawing;
        self.overlay = true;
        self.reading = Some(draw_reading(rng));

        for slot in 0..READING_SIZE {
            self.pending.push(RevealEvent {
                at_ms: now_ms + ENTER_DELAY_MS,
                session: self.session,
                slot,
                kind: RevealKind::Enter,
            });
            self.pending.push(RevealEvent {
                at_ms: now_ms + ENTER_DELAY_MS + GLOW_DELAY_MS,
                session: self.session,
                slot,
                kind: RevealKind::Glow,
            });
        }
        true
    }

    /// Tear the active reading down and return to Idle. Idempotent; never
    /// touches rotation state. Pending reveal events are left queued but
    /// their session no longer matches, so they drain as no-ops.
    pub fn reset(&mut self) {
        self.session += 1;
        self.phase = DrawPhase::Idle;
        self.overlay = false;
        self.reading = None;
    }

    /// Drain events whose deadline has passed. Stale events (scheduled under
    /// a torn-down session) are discarded silently.
    pub fn poll(&mut self, now_ms: f64) -> Vec<RevealEffect> {
        let mut due = Vec::new();
        let session = self.session;
        let reading = self.reading;

        self.pending.retain(|ev| {
            if ev.at_ms > now_ms {
                return true;
            }
            if ev.session == session {
                if let Some(reading) = reading {
                    due.push(RevealEffect {
                        slot: ev.slot,
                        kind: ev.kind,
                        entry: reading[ev.slot],
                    });
                }
            }
            false
        });

        due
    }

    pub fn is_drawing(&self) -> bool {
        self.phase == DrawPhase::Drawing
    }

    pub fn overlay_active(&self) -> bool {
        self.overlay
    }

    pub fn reading(&self) -> Option<&[ReadingEntry; READING_SIZE]> {
        self.reading.as_ref()
    }
}

impl Default for ReadingOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
