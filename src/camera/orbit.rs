//! Spherical camera placement around a pan target, with the floor clamp.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::options::CameraOptions;

/// Spherical coordinates of the eye around `target`.
///
/// `phi` is measured from straight above (+Y), so `phi = π/2` is level with
/// the target and larger values look up from below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    /// Azimuth around the Y axis.
    pub theta: f32,
    /// Elevation from the +Y axis.
    pub phi: f32,
    /// Distance from the target.
    pub radius: f32,
    /// Point the camera orbits and looks at.
    pub target: Vec3,
}

impl Orbit {
    /// Starting placement from options, around `target`.
    #[must_use]
    pub fn from_options(options: &CameraOptions, target: Vec3) -> Self {
        let mut orbit = Self {
            theta: options.initial_theta,
            phi: options.initial_phi,
            radius: options.initial_radius,
            target,
        };
        orbit.clamp(options);
        orbit
    }

    /// World-space eye position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        self.target
            + self.radius
                * Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta)
    }

    /// Lowest target height for which some elevation in
    /// `[phi_min, phi_max]` keeps the eye above the floor at every radius.
    #[must_use]
    pub fn min_target_y(options: &CameraOptions) -> f32 {
        floor_y(options) - options.radius_min * options.phi_min.cos().max(0.0)
    }

    /// Elevation limit at the current radius and target height so that the
    /// eye stays at or above `ground_y + floor_offset`.
    #[must_use]
    pub fn dynamic_phi_max(&self, options: &CameraOptions) -> f32 {
        let limit = options.phi_max.max(options.phi_min);
        if self.radius <= f32::EPSILON {
            return limit;
        }
        // eye.y = target.y + r·cos φ ≥ floor  ⇔  cos φ ≥ (floor − target.y) / r
        let cos_min = (floor_y(options) - self.target.y) / self.radius;
        if cos_min <= -1.0 {
            return limit;
        }
        cos_min.min(1.0).acos().min(limit).max(options.phi_min)
    }

    /// Wrap azimuth into `[0, 2π)`, then apply radius, target-height and
    /// elevation limits, in that order.
    pub fn clamp(&mut self, options: &CameraOptions) {
        let theta = self.theta.rem_euclid(TAU);
        // rem_euclid can round up to TAU for tiny negative angles
        self.theta = if theta < TAU { theta } else { 0.0 };
        self.radius = self.radius.clamp(
            options.radius_min,
            options.radius_max.max(options.radius_min),
        );
        self.target.y = self.target.y.max(Self::min_target_y(options));
        let phi_max = self.dynamic_phi_max(options);
        self.phi = self.phi.clamp(options.phi_min, phi_max);
    }
}

fn floor_y(options: &CameraOptions) -> f32 {
    options.ground_y + options.floor_offset
}
