// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Hand-gesture camera steering and object selection for live 3D scenes.
//!
//! Handorbit turns per-frame hand landmarks (21 normalized points per hand,
//! as produced by common hand-tracking models) into orbit, pan and zoom
//! motion for a look-at camera, and into point-and-tap picking of named
//! objects in a scene.
//!
//! # Key entry points
//!
//! - [`engine::GestureEngine`] - per-frame orchestration
//! - [`camera::HandCameraController`] - gesture-driven orbit camera with
//!   inertia and a floor clamp
//! - [`selection::SelectionController`] - finger-gun selection mode,
//!   smoothed cursor and highlight
//! - [`scene::Scene`] - pickable objects, the name registry and animation
//!   callbacks
//! - [`options::Options`] - runtime configuration with TOML presets
//! - [`input::ReplaySource`] - landmark frames replayed from JSON lines
//!
//! # Frame flow
//!
//! Each frame the engine pulls hands from a [`input::LandmarkSource`],
//! classifies them with the [`gesture`] predicates, lets the selection
//! controller decide whether the camera navigates, coasts or brakes, and
//! then runs the scene's animation callbacks. Nothing in a frame is fatal:
//! source and callback failures are logged and the loop carries on.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod hand;
pub mod input;
pub mod options;
pub mod scene;
pub mod selection;
pub mod util;

#[cfg(test)]
mod test_support;

pub use engine::{FrameReport, GestureEngine};
pub use error::HandOrbitError;
pub use options::Options;
