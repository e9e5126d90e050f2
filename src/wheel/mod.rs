//! Wheel module - rotation smoothing and ring layout
//!
//! Re-exports only. All logic in submodules.

mod layout;
mod rotation;

pub use layout::{
    fan_offset_px, wheel_placements, CardPlacement, CARD_ANCHOR_X, CARD_ANCHOR_Y, CARD_COUNT,
    CENTER_DROP, FAN_SPACING_PX, RADIUS,
};
pub use rotation::{RotationState, SHUFFLE_SPIN_DEGREES, SMOOTHING, SWIPE_GAIN};
