//! Hand geometry predicates
//!
//! Pure functions from landmark positions to gesture conditions. All
//! distances are in normalized image coordinates, so thresholds are
//! resolution-independent.

use nalgebra::{distance, Point2};

use crate::bridge::landmarks::{HandSample, Landmark, FINGERTIPS, INDEX_TIP, PALM_CENTER, THUMB_TIP};

/// Two palms closer than this read as "hands together" (stop).
pub const HANDS_TOGETHER_DIST: f32 = 0.12;

/// Two palms further apart than this read as "hands apart" (reset).
pub const HANDS_APART_DIST: f32 = 0.4;

/// Thumb tip to index tip distance below this reads as a pinch.
pub const PINCH_DIST: f32 = 0.06;

fn to_point(l: Landmark) -> Point2<f32> {
    Point2::new(l.x, l.y)
}

/// Distance between two hands' palm-center landmarks.
pub fn palm_distance(a: &HandSample, b: &HandSample) -> f32 {
    distance(&to_point(a.point(PALM_CENTER)), &to_point(b.point(PALM_CENTER)))
}

/// Distance between the thumb tip and index fingertip of one hand.
pub fn pinch_distance(hand: &HandSample) -> f32 {
    distance(&to_point(hand.point(THUMB_TIP)), &to_point(hand.point(INDEX_TIP)))
}

/// A hand is a fist when every non-thumb fingertip sits below the
/// palm-center in image coordinates (y grows downward), i.e. curled in.
pub fn is_fist(hand: &HandSample) -> bool {
    let palm_y = hand.point(PALM_CENTER).y;
    FINGERTIPS.iter().all(|&i| hand.point(i).y > palm_y)
}
