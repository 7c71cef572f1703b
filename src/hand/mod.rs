//! Hand landmark data as delivered by the external landmark detector.
//!
//! A [`Hand`] is one detection: 21 normalized points plus the handedness
//! label the detector reported. [`FrameHands`] groups the (at most two)
//! detections of a single video frame.

mod landmark;

pub use landmark::{
    FrameHands, Hand, Handedness, Landmark, INDEX_DIP, INDEX_MCP, INDEX_PIP,
    INDEX_TIP, LANDMARK_COUNT, MAX_HANDS, MIDDLE_DIP, MIDDLE_MCP, MIDDLE_PIP,
    MIDDLE_TIP, PINKY_DIP, PINKY_MCP, PINKY_PIP, PINKY_TIP, RING_DIP,
    RING_MCP, RING_PIP, RING_TIP, THUMB_CMC, THUMB_IP, THUMB_MCP, THUMB_TIP,
    WRIST,
};
