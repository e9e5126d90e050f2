//! Wheel application state and JS bridge
//!
//! Composes the gesture engine, rotation controller and reading
//! orchestrator, and routes debounced actions between them. The perception
//! callback (`on_hand_frame`) and the render tick (`wheel_tick`) interleave
//! on the browser event loop but never run in parallel, so plain
//! thread-local state is safe.

use std::cell::RefCell;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use super::landmarks::{FrameError, FrameSample};
use crate::gesture::{GestureAction, GestureEngine};
use crate::reading::{ReadingOrchestrator, RevealEffect, RevealKind};
use crate::wheel::{fan_offset_px, wheel_placements, RotationState, CARD_COUNT};

impl From<FrameError> for JsValue {
    fn from(err: FrameError) -> Self {
        match err {
            FrameError::TooManyHands(n) => {
                JsValue::from_str(&format!("Too many hands in frame: {}", n))
            }
            FrameError::BadLength { expected, got } => JsValue::from_str(&format!(
                "Bad landmark buffer length: {} (expected {})",
                got, expected
            )),
        }
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Everything the tarot wheel core owns
pub struct WheelApp {
    engine: GestureEngine,
    rotation: RotationState,
    orchestrator: ReadingOrchestrator,
    rng: SmallRng,
    /// Reveal steps that came due but have not been handed to JS yet.
    due_effects: Vec<RevealEffect>,
}

impl WheelApp {
    pub fn new(seed: u64) -> Self {
        Self {
            engine: GestureEngine::new(),
            rotation: RotationState::new(),
            orchestrator: ReadingOrchestrator::new(),
            rng: SmallRng::seed_from_u64(seed),
            due_effects: Vec::new(),
        }
    }

    /// Perception callback: classify one frame and route the actions.
    pub fn ingest_frame(&mut self, frame: &FrameSample, now_ms: f64) {
        let drawing = self.orchestrator.is_drawing();
        for action in self.engine.process(frame, now_ms, drawing) {
            match action {
                GestureAction::Swipe(delta) => self.rotation.swipe(delta),
                GestureAction::Shuffle => self.rotation.shuffle(),
                GestureAction::Draw => {
                    self.orchestrator.begin(now_ms, &mut self.rng);
                }
                GestureAction::Stop => self.rotation.stop(),
                GestureAction::Reset => self.orchestrator.reset(),
            }
        }
    }

    /// Render tick: advance the wheel (unless frozen by a draw) and collect
    /// reveal steps whose deadline has passed.
    pub fn advance(&mut self, now_ms: f64) {
        if !self.orchestrator.is_drawing() {
            self.rotation.tick();
        }
        self.due_effects.extend(self.orchestrator.poll(now_ms));
    }

    pub fn drain_due_effects(&mut self) -> Vec<RevealEffect> {
        std::mem::take(&mut self.due_effects)
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    pub fn orchestrator(&self) -> &ReadingOrchestrator {
        &self.orchestrator
    }
}

impl Default for WheelApp {
    fn default() -> Self {
        Self::new(0x7a707)
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static APP: RefCell<WheelApp> = RefCell::new(WheelApp::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Reseed the deck RNG (called once at startup with e.g. Date.now()).
#[wasm_bindgen]
pub fn seed_wheel(seed: u32) {
    APP.with(|app| {
        *app.borrow_mut() = WheelApp::new(seed as u64);
    });
}

/// Perception callback. `flat` is `[x, y, z] * 21 * num_hands`.
/// A malformed buffer logs a warning and drops the frame.
#[wasm_bindgen]
pub fn on_hand_frame(flat: &[f32], num_hands: usize) {
    let frame = match FrameSample::parse(flat, num_hands) {
        Ok(frame) => frame,
        Err(err) => {
            web_sys::console::warn_1(&JsValue::from(err));
            return;
        }
    };

    let now = js_sys::Date::now();
    APP.with(|app| {
        app.borrow_mut().ingest_frame(&frame, now);
    });
}

/// Render tick. Returns `[x, y, angle] * 22` card transforms for the ring.
#[wasm_bindgen]
pub fn wheel_tick(view_w: f32, view_h: f32) -> Vec<f32> {
    let now = js_sys::Date::now();
    APP.with(|app| {
        let mut app = app.borrow_mut();
        app.advance(now);

        let placements = wheel_placements(app.rotation().current(), view_w, view_h);
        let mut flat = Vec::with_capacity(CARD_COUNT * 3);
        for p in placements.iter() {
            flat.push(p.x);
            flat.push(p.y);
            flat.push(p.angle);
        }
        flat
    })
}

/// Drain due reveal steps, flat-encoded per step:
/// `[slot, kind (0 = enter, 1 = glow), card index, reversed (0/1), fan x]`.
#[wasm_bindgen]
pub fn drain_reveal_events() -> Vec<f32> {
    APP.with(|app| {
        let mut flat = Vec::new();
        for effect in app.borrow_mut().drain_due_effects() {
            flat.push(effect.slot as f32);
            flat.push(match effect.kind {
                RevealKind::Enter => 0.0,
                RevealKind::Glow => 1.0,
            });
            flat.push(effect.entry.card() as f32);
            flat.push(if effect.entry.is_reversed() { 1.0 } else { 0.0 });
            flat.push(fan_offset_px(effect.slot));
        }
        flat
    })
}

/// Whether the dark overlay should be shown.
#[wasm_bindgen]
pub fn overlay_active() -> bool {
    APP.with(|app| app.borrow().orchestrator().overlay_active())
}

/// Whether a reading is currently displayed (wheel frozen).
#[wasm_bindgen]
pub fn is_drawing() -> bool {
    APP.with(|app| app.borrow().orchestrator().is_drawing())
}

/// Current wheel offset in degrees (unbounded).
#[wasm_bindgen]
pub fn current_offset() -> f64 {
    APP.with(|app| app.borrow().rotation().current())
}
