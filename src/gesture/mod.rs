//! Gesture module - smoothing, classification and debounce
//!
//! Re-exports only. All logic in submodules.

mod engine;
mod geometry;
mod hold;
mod smoother;

pub use engine::{
    GestureAction, GestureEngine, DRAW_COOLDOWN_MS, FIST_HOLD_MS, PINCH_HOLD_MS,
    SHUFFLE_COOLDOWN_MS, SWIPE_DEAD_ZONE,
};
pub use geometry::{
    is_fist, palm_distance, pinch_distance, HANDS_APART_DIST, HANDS_TOGETHER_DIST, PINCH_DIST,
};
pub use hold::{CooldownGate, HoldTimer};
pub use smoother::{EmaSmoother, EMA_ALPHA};
