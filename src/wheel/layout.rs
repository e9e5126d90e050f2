//! Wheel layout - screen placement of the 22-card ring
//!
//! The ring's circle center sits horizontally centered, 200 px below the
//! bottom edge of the viewport, so only the top arc of the wheel is visible.
//! Pure geometry; the rendering side applies the resulting transforms as CSS.

use std::f32::consts::PI;

use crate::reading::DECK_SIZE;

pub const CARD_COUNT: usize = DECK_SIZE;
pub const RADIUS: f32 = 500.0;

/// How far the circle center hangs below the viewport bottom.
pub const CENTER_DROP: f32 = 200.0;

/// Card anchor offset (half-width / full-height of the card element).
pub const CARD_ANCHOR_X: f32 = 60.0;
pub const CARD_ANCHOR_Y: f32 = 200.0;

/// Horizontal spacing of revealed cards in the three-card fan.
pub const FAN_SPACING_PX: f32 = 260.0;

/// Screen transform for one wheel card
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardPlacement {
    pub x: f32,
    pub y: f32,
    /// Rotation in degrees, matching the card's angular slot on the ring.
    pub angle: f32,
}

/// Compute all card placements for the given wheel offset and viewport.
pub fn wheel_placements(offset_deg: f64, view_w: f32, view_h: f32) -> [CardPlacement; CARD_COUNT] {
    let center_x = view_w / 2.0;
    let center_y = view_h + CENTER_DROP;
    let step = 360.0 / CARD_COUNT as f32;

    let mut placements = [CardPlacement::default(); CARD_COUNT];
    for (i, p) in placements.iter_mut().enumerate() {
        let angle = i as f32 * step + offset_deg as f32;
        let rad = angle * PI / 180.0;
        *p = CardPlacement {
            x: center_x + RADIUS * rad.sin() - CARD_ANCHOR_X,
            y: center_y - RADIUS * rad.cos() - CARD_ANCHOR_Y,
            angle,
        };
    }
    placements
}

/// Horizontal offset from screen center for reveal slot 0..3
/// (left / center / right by draw order).
pub fn fan_offset_px(slot: usize) -> f32 {
    (slot as f32 - 1.0) * FAN_SPACING_PX
}
