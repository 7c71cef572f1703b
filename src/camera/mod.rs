//! Camera system for hand-steered scene viewing.
//!
//! Provides an orbital camera with rotation, panning, zoom, inertia and a
//! floor clamp, driven by hand landmarks instead of a mouse.

/// Hand-driven orbit/pan/zoom controller.
pub mod controller;
/// Core camera struct, matrices and picking rays.
pub mod core;
/// Per-axis velocity and friction.
pub mod inertia;
/// Spherical placement and limit clamping.
pub mod orbit;

pub use self::core::Camera;
pub use controller::{CameraGesture, ControlMode, HandCameraController};
pub use inertia::{FrictionRegime, Inertia};
pub use orbit::Orbit;
