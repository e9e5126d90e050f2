//! Tarot Wheel Web - gesture-controlled card wheel
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! The host page runs MediaPipe Hands and pushes landmark frames into
//! `on_hand_frame`; the render loop calls `wheel_tick` once per
//! requestAnimationFrame and applies the returned transforms as CSS.

pub mod bridge;
pub mod gesture;
pub mod reading;
pub mod wheel;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    current_offset, drain_reveal_events, is_drawing, on_hand_frame, overlay_active, seed_wheel,
    wheel_tick,
};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the wheel core with an RNG seed (e.g. Date.now()).
#[wasm_bindgen]
pub fn init(seed: u32) {
    seed_wheel(seed);
    console_log!("✅ Tarot wheel core ready ({} cards)", wheel::CARD_COUNT);
}
