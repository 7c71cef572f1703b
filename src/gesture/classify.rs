//! Stateless per-hand gesture predicates.
//!
//! Every predicate takes a [`Hand`] and answers `false` / `None` for a
//! malformed detection (fewer than 21 points or non-finite coordinates), so a
//! single bad frame can never take down the frame loop.

use crate::hand::{
    Hand, Landmark, INDEX_MCP, INDEX_PIP, INDEX_TIP, LANDMARK_COUNT,
    MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP, RING_PIP, RING_TIP,
    THUMB_TIP, WRIST,
};
use crate::options::PointerStyle;

/// Tip/PIP pairs for index, middle, ring, pinky.
const FINGER_TIP_PIP: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

/// Curled fingers needed for a fist. Pinky detection is unreliable, so one
/// finger may disagree.
const FIST_MIN_CURLED: usize = 3;

/// Curled fingers (of middle/ring/pinky) needed alongside an extended index.
const POINTER_MIN_CURLED: usize = 2;

/// A finger is curled when its tip is closer to the wrist than its PIP joint.
#[inline]
fn is_curled(
    points: &[Landmark; LANDMARK_COUNT],
    tip: usize,
    pip: usize,
) -> bool {
    let wrist = points[WRIST];
    points[tip].distance_2d(wrist) < points[pip].distance_2d(wrist)
}

fn curled_count(
    points: &[Landmark; LANDMARK_COUNT],
    pairs: &[(usize, usize)],
) -> usize {
    pairs
        .iter()
        .filter(|&&(tip, pip)| is_curled(points, tip, pip))
        .count()
}

/// At least three of the four fingers are curled toward the wrist.
#[must_use]
pub fn is_fist(hand: &Hand) -> bool {
    hand.landmarks().is_some_and(|points| {
        curled_count(points, &FINGER_TIP_PIP) >= FIST_MIN_CURLED
    })
}

/// Complement of [`is_fist`] for well-formed hands. A malformed detection is
/// neither open nor a fist.
#[must_use]
pub fn is_open_hand(hand: &Hand) -> bool {
    hand.is_complete() && !is_fist(hand)
}

/// "Finger gun": index extended away from the wrist, and at least two of
/// middle/ring/pinky curled.
#[must_use]
pub fn is_finger_gun(hand: &Hand) -> bool {
    hand.landmarks().is_some_and(|points| {
        let wrist = points[WRIST];
        points[INDEX_TIP].distance_2d(wrist)
            > points[INDEX_PIP].distance_2d(wrist)
            && others_curled(points)
    })
}

/// Image-space pointer: index tip above its knuckle in the image, and at
/// least two of middle/ring/pinky curled.
#[must_use]
pub fn is_pointer_gesture(hand: &Hand) -> bool {
    hand.landmarks().is_some_and(|points| {
        points[INDEX_TIP].y < points[INDEX_MCP].y && others_curled(points)
    })
}

fn others_curled(points: &[Landmark; LANDMARK_COUNT]) -> bool {
    curled_count(points, &FINGER_TIP_PIP[1..]) >= POINTER_MIN_CURLED
}

/// Pointer test for the configured style.
#[must_use]
pub fn is_pointing(hand: &Hand, style: PointerStyle) -> bool {
    match style {
        PointerStyle::FingerGun => is_finger_gun(hand),
        PointerStyle::ImageSpace => is_pointer_gesture(hand),
    }
}

/// Thumb tip to index tip, in normalized image units.
#[must_use]
pub fn pinch_distance(hand: &Hand) -> Option<f32> {
    hand.landmarks()
        .map(|points| points[THUMB_TIP].distance_2d(points[INDEX_TIP]))
}

/// Thumb tip to index knuckle, in normalized image units.
#[must_use]
pub fn thumb_tap_distance(hand: &Hand) -> Option<f32> {
    hand.landmarks()
        .map(|points| points[THUMB_TIP].distance_2d(points[INDEX_MCP]))
}
