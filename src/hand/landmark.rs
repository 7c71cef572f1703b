use glam::Vec2;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Landmark indices
// ---------------------------------------------------------------------------

/// Number of landmarks in a complete hand detection.
pub const LANDMARK_COUNT: usize = 21;

/// Wrist.
pub const WRIST: usize = 0;
/// Thumb carpometacarpal joint.
pub const THUMB_CMC: usize = 1;
/// Thumb metacarpophalangeal joint.
pub const THUMB_MCP: usize = 2;
/// Thumb interphalangeal joint.
pub const THUMB_IP: usize = 3;
/// Thumb tip.
pub const THUMB_TIP: usize = 4;
/// Index knuckle.
pub const INDEX_MCP: usize = 5;
/// Index second knuckle.
pub const INDEX_PIP: usize = 6;
/// Index third knuckle.
pub const INDEX_DIP: usize = 7;
/// Index tip.
pub const INDEX_TIP: usize = 8;
/// Middle knuckle.
pub const MIDDLE_MCP: usize = 9;
/// Middle second knuckle.
pub const MIDDLE_PIP: usize = 10;
/// Middle third knuckle.
pub const MIDDLE_DIP: usize = 11;
/// Middle tip.
pub const MIDDLE_TIP: usize = 12;
/// Ring knuckle.
pub const RING_MCP: usize = 13;
/// Ring second knuckle.
pub const RING_PIP: usize = 14;
/// Ring third knuckle.
pub const RING_DIP: usize = 15;
/// Ring tip.
pub const RING_TIP: usize = 16;
/// Pinky knuckle.
pub const PINKY_MCP: usize = 17;
/// Pinky second knuckle.
pub const PINKY_PIP: usize = 18;
/// Pinky third knuckle.
pub const PINKY_DIP: usize = 19;
/// Pinky tip.
pub const PINKY_TIP: usize = 20;

/// Most hands a single frame carries. Extra detections are dropped.
pub const MAX_HANDS: usize = 2;

// ---------------------------------------------------------------------------
// Landmark
// ---------------------------------------------------------------------------

/// One normalized hand point.
///
/// `x` and `y` are in `[0, 1]` image space with y pointing down. `z` is
/// relative depth; more negative is closer to the camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal image coordinate.
    pub x: f32,
    /// Vertical image coordinate (down is positive).
    pub y: f32,
    /// Relative depth.
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    /// Construct a landmark.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Image-plane position, ignoring depth.
    #[inline]
    #[must_use]
    pub fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Image-plane distance to another landmark.
    #[inline]
    #[must_use]
    pub fn distance_2d(self, other: Self) -> f32 {
        self.xy().distance(other.xy())
    }

    fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

// ---------------------------------------------------------------------------
// Handedness
// ---------------------------------------------------------------------------

/// Handedness label as reported by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    /// Detector reported a left hand.
    Left,
    /// Detector reported a right hand.
    Right,
}

impl Handedness {
    /// The opposite label, for a horizontally mirrored preview.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

// ---------------------------------------------------------------------------
// Hand
// ---------------------------------------------------------------------------

/// A single detected hand.
///
/// The landmark list is kept exactly as the detector delivered it, so a
/// truncated detection is representable. Use [`Hand::landmarks`] to get the
/// fixed 21-point view; it is `None` for anything malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    /// Detected points in anatomical index order.
    pub landmarks: Vec<Landmark>,
    /// Reported handedness.
    pub handedness: Handedness,
}

impl Hand {
    /// Build a hand from raw points.
    #[must_use]
    pub fn new(landmarks: Vec<Landmark>, handedness: Handedness) -> Self {
        Self {
            landmarks,
            handedness,
        }
    }

    /// Build a hand from `(x, y)` pairs with zero depth.
    #[must_use]
    pub fn from_points(points: &[(f32, f32)], handedness: Handedness) -> Self {
        Self::new(
            points.iter().map(|&(x, y)| Landmark::new(x, y, 0.0)).collect(),
            handedness,
        )
    }

    /// The complete 21-point set, or `None` if the detection is short or
    /// carries non-finite coordinates.
    #[must_use]
    pub fn landmarks(&self) -> Option<&[Landmark; LANDMARK_COUNT]> {
        let points: &[Landmark; LANDMARK_COUNT] = self
            .landmarks
            .get(..LANDMARK_COUNT)
            .and_then(|s| s.try_into().ok())?;
        points.iter().all(|p| p.is_finite()).then_some(points)
    }

    /// Whether all 21 points are present and finite.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.landmarks().is_some()
    }

    /// Wrist landmark, if the detection is complete.
    #[must_use]
    pub fn wrist(&self) -> Option<Landmark> {
        self.landmarks().map(|lm| lm[WRIST])
    }
}

// ---------------------------------------------------------------------------
// FrameHands
// ---------------------------------------------------------------------------

/// All hands detected in one frame, capped at [`MAX_HANDS`].
///
/// Carries no state across frames; controllers keep their own history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameHands {
    hands: Vec<Hand>,
}

impl FrameHands {
    /// Wrap a detection list, dropping anything past [`MAX_HANDS`].
    #[must_use]
    pub fn new(mut hands: Vec<Hand>) -> Self {
        if hands.len() > MAX_HANDS {
            log::debug!(
                "dropping {} extra hand detection(s)",
                hands.len() - MAX_HANDS
            );
            hands.truncate(MAX_HANDS);
        }
        Self { hands }
    }

    /// A frame with no hands.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Detected hands, in detector order.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Number of detected hands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hands.len()
    }

    /// Whether no hand was detected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}

impl From<Vec<Hand>> for FrameHands {
    fn from(hands: Vec<Hand>) -> Self {
        Self::new(hands)
    }
}
