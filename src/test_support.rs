//! Synthetic hand poses for driving the controllers in tests.
//!
//! Fingers point up the image (toward smaller y) from a wrist at the given
//! position. Extended fingers reach 0.21 above the wrist; curled fingers
//! fold their tip back to 0.07, below their own knuckle.

use crate::hand::{Hand, Handedness, Landmark, LANDMARK_COUNT};

/// Where the thumb tip sits.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Thumb {
    /// Away from the index finger.
    Rest,
    /// Touching the index knuckle (thumb-tap).
    OnIndexKnuckle,
    /// Touching the index tip (pinch).
    OnIndexTip,
}

const FINGER_X: [f32; 4] = [-0.03, -0.01, 0.01, 0.03];

/// Build a hand. `extended` is index, middle, ring, pinky.
pub(crate) fn pose(
    wrist: (f32, f32),
    extended: [bool; 4],
    thumb: Thumb,
) -> Hand {
    let (wx, wy) = wrist;
    let mut points = [Landmark::default(); LANDMARK_COUNT];
    points[0] = Landmark::new(wx, wy, 0.0);

    for (finger, &dx) in FINGER_X.iter().enumerate() {
        let base = 5 + finger * 4;
        let x = wx + dx;
        let rises: [f32; 4] = if extended[finger] {
            [0.10, 0.15, 0.18, 0.21]
        } else {
            [0.10, 0.14, 0.11, 0.07]
        };
        for (joint, rise) in rises.iter().enumerate() {
            points[base + joint] = Landmark::new(x, wy - rise, 0.0);
        }
    }

    points[1] = Landmark::new(wx - 0.04, wy - 0.02, 0.0);
    points[2] = Landmark::new(wx - 0.07, wy - 0.05, 0.0);
    points[3] = Landmark::new(wx - 0.09, wy - 0.08, 0.0);
    points[4] = match thumb {
        Thumb::Rest => Landmark::new(wx - 0.11, wy - 0.10, 0.0),
        Thumb::OnIndexKnuckle => {
            let knuckle = points[5];
            Landmark::new(knuckle.x - 0.01, knuckle.y, 0.0)
        }
        Thumb::OnIndexTip => {
            let tip = points[8];
            Landmark::new(tip.x - 0.01, tip.y, 0.0)
        }
    };

    Hand::new(points.to_vec(), Handedness::Right)
}

pub(crate) fn open_hand(x: f32, y: f32) -> Hand {
    pose((x, y), [true; 4], Thumb::Rest)
}

pub(crate) fn fist(x: f32, y: f32) -> Hand {
    pose((x, y), [false; 4], Thumb::Rest)
}

pub(crate) fn finger_gun(x: f32, y: f32) -> Hand {
    pose((x, y), [true, false, false, false], Thumb::Rest)
}

pub(crate) fn finger_gun_tapping(x: f32, y: f32) -> Hand {
    pose((x, y), [true, false, false, false], Thumb::OnIndexKnuckle)
}

pub(crate) fn pinching(x: f32, y: f32) -> Hand {
    pose((x, y), [true; 4], Thumb::OnIndexTip)
}

pub(crate) fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}
