//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

pub mod landmarks;
mod wheel_app;

pub use landmarks::{
    FrameError, FrameSample, HandSample, Landmark,
    // Constants
    FINGERTIPS, FLOATS_PER_LANDMARK, INDEX_TIP, LANDMARKS_PER_HAND, MAX_HANDS, MIDDLE_TIP,
    PALM_CENTER, PINKY_TIP, RING_TIP, THUMB_TIP, WRIST,
};

pub use wheel_app::{
    // WASM entry points
    current_offset,
    drain_reveal_events,
    is_drawing,
    on_hand_frame,
    overlay_active,
    seed_wheel,
    wheel_tick,
    // Internal API
    WheelApp,
};
