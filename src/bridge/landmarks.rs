//! Hand landmark data model and frame parsing
//!
//! Receives MediaPipe Hands landmarks from JavaScript as a flat Float32Array
//! and turns them into an immutable per-frame sample for the gesture engine.
//! Coordinates are clamped to [0,1] on parse - the perception side does not
//! guarantee range.

// ============================================================================
// HAND LANDMARK INDICES (MediaPipe Hands - 21 per hand)
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
/// Middle-finger MCP doubles as the palm-center reference point.
pub const PALM_CENTER: usize = 9;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// The four non-thumb fingertips, used for fist detection.
pub const FINGERTIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

pub const LANDMARKS_PER_HAND: usize = 21;
/// MediaPipe sends x, y, z per landmark; z is unused here.
pub const FLOATS_PER_LANDMARK: usize = 3;
pub const MAX_HANDS: usize = 2;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single 2D landmark point (normalized coordinates, 0-1)
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

/// One hand's full landmark set for a single frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandSample {
    pub points: [Landmark; LANDMARKS_PER_HAND],
}

impl Default for HandSample {
    fn default() -> Self {
        Self {
            points: [Landmark::default(); LANDMARKS_PER_HAND],
        }
    }
}

impl HandSample {
    pub fn point(&self, index: usize) -> Landmark {
        self.points[index]
    }
}

/// All hands seen in one camera frame (0, 1, or 2)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameSample {
    hands: [HandSample; MAX_HANDS],
    num_hands: usize,
}

/// Errors from parsing the flat landmark array
#[derive(Debug, PartialEq, Eq)]
pub enum FrameError {
    TooManyHands(usize),
    BadLength { expected: usize, got: usize },
}

impl FrameSample {
    /// Parse a flat `[x, y, z] * 21 * num_hands` array from the perception side.
    pub fn parse(flat: &[f32], num_hands: usize) -> Result<Self, FrameError> {
        if num_hands > MAX_HANDS {
            return Err(FrameError::TooManyHands(num_hands));
        }
        let expected = num_hands * LANDMARKS_PER_HAND * FLOATS_PER_LANDMARK;
        if flat.len() < expected {
            return Err(FrameError::BadLength {
                expected,
                got: flat.len(),
            });
        }

        let mut hands = [HandSample::default(); MAX_HANDS];
        for (h, hand) in hands.iter_mut().enumerate().take(num_hands) {
            for (i, point) in hand.points.iter_mut().enumerate() {
                let base = (h * LANDMARKS_PER_HAND + i) * FLOATS_PER_LANDMARK;
                *point = Landmark {
                    x: flat[base].clamp(0.0, 1.0),
                    y: flat[base + 1].clamp(0.0, 1.0),
                };
            }
        }

        Ok(Self { hands, num_hands })
    }

    /// Build a frame from already-parsed hands (tests and internal code).
    pub fn from_hands(hands: &[HandSample]) -> Self {
        let mut out = Self::default();
        out.num_hands = hands.len().min(MAX_HANDS);
        out.hands[..out.num_hands].copy_from_slice(&hands[..out.num_hands]);
        out
    }

    pub fn num_hands(&self) -> usize {
        self.num_hands
    }

    pub fn hands(&self) -> &[HandSample] {
        &self.hands[..self.num_hands]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_hand() {
        let mut flat = vec![0.0f32; LANDMARKS_PER_HAND * FLOATS_PER_LANDMARK];
        flat[PALM_CENTER * 3] = 0.5;
        flat[PALM_CENTER * 3 + 1] = 0.7;

        let frame = FrameSample::parse(&flat, 1).unwrap();
        assert_eq!(frame.num_hands(), 1);
        let palm = frame.hands()[0].point(PALM_CENTER);
        assert_eq!(palm, Landmark { x: 0.5, y: 0.7 });
    }

    #[test]
    fn parse_clamps_out_of_range() {
        let mut flat = vec![0.0f32; LANDMARKS_PER_HAND * FLOATS_PER_LANDMARK];
        flat[0] = -0.3;
        flat[1] = 1.8;

        let frame = FrameSample::parse(&flat, 1).unwrap();
        let wrist = frame.hands()[0].point(WRIST);
        assert_eq!(wrist, Landmark { x: 0.0, y: 1.0 });
    }

    #[test]
    fn parse_rejects_short_buffer() {
        let flat = vec![0.0f32; 10];
        assert_eq!(
            FrameSample::parse(&flat, 1),
            Err(FrameError::BadLength {
                expected: 63,
                got: 10
            })
        );
    }

    #[test]
    fn parse_rejects_three_hands() {
        assert_eq!(FrameSample::parse(&[], 3), Err(FrameError::TooManyHands(3)));
    }

    #[test]
    fn empty_frame_has_no_hands() {
        let frame = FrameSample::parse(&[], 0).unwrap();
        assert_eq!(frame.num_hands(), 0);
        assert!(frame.hands().is_empty());
    }
}
