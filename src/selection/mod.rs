//! Gesture-driven object selection.
//!
//! [`SelectionController`] decides each frame whether the hands are
//! navigating or pointing, steers the camera controller accordingly and
//! resolves tap/flick picks against a [`SceneHost`](crate::scene::SceneHost).

mod controller;
mod cursor;
mod highlight;

pub use controller::{InteractionMode, SelectionController, SelectionEvent};
pub use cursor::{pixel_to_ndc, SmoothedCursor};
pub use highlight::Highlight;
