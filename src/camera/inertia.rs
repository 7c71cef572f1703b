//! Per-axis orbit velocity with geometric decay.

use crate::options::CameraOptions;

/// Which friction factor applies while coasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrictionRegime {
    /// Ordinary release: stops quickly.
    #[default]
    Normal,
    /// Released straight out of a fast swipe: coasts for a long time.
    GlobeSpin,
}

/// Velocity of the three orbit axes, in radians (or world units for the
/// radius) per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Inertia {
    /// Azimuth velocity.
    pub theta: f32,
    /// Elevation velocity.
    pub phi: f32,
    /// Radius velocity.
    pub radius: f32,
    /// Active friction selector.
    pub regime: FrictionRegime,
}

impl Inertia {
    /// Zero every axis and fall back to normal friction.
    pub fn stop(&mut self) {
        *self = Self::default();
    }

    /// Whether any axis is still moving.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.theta != 0.0 || self.phi != 0.0 || self.radius != 0.0
    }

    /// Per-frame retention factor for the active regime.
    #[must_use]
    pub fn friction(&self, options: &CameraOptions) -> f32 {
        match self.regime {
            FrictionRegime::Normal => options.friction,
            FrictionRegime::GlobeSpin => options.globe_spin_friction,
        }
        .clamp(0.0, 1.0)
    }

    /// Shrink every axis by the active friction, snapping anything below
    /// the cutoff to exactly zero.
    pub fn decay(&mut self, options: &CameraOptions) {
        let friction = self.friction(options);
        let cutoff = options.inertia_cutoff;
        for v in [&mut self.theta, &mut self.phi, &mut self.radius] {
            *v *= friction;
            if v.abs() < cutoff {
                *v = 0.0;
            }
        }
        if !self.is_moving() {
            self.regime = FrictionRegime::Normal;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decay_is_monotonic_and_reaches_zero() {
        let options = CameraOptions::default();
        let mut inertia = Inertia {
            theta: 0.05,
            phi: -0.03,
            radius: 0.2,
            regime: FrictionRegime::Normal,
        };
        let mut frames = 0;
        while inertia.is_moving() {
            let before = inertia;
            inertia.decay(&options);
            for (b, a) in [
                (before.theta, inertia.theta),
                (before.phi, inertia.phi),
                (before.radius, inertia.radius),
            ] {
                if b != 0.0 {
                    assert!(a.abs() < b.abs());
                    assert!(a == 0.0 || a.signum() == b.signum());
                }
            }
            frames += 1;
            assert!(frames < 10_000);
        }
        assert_eq!(inertia, Inertia::default());
    }

    #[test]
    fn globe_spin_outlasts_normal_release() {
        let options = CameraOptions::default();
        let frames_to_stop = |regime| {
            let mut inertia = Inertia {
                theta: 0.05,
                regime,
                ..Inertia::default()
            };
            let mut frames = 0;
            while inertia.is_moving() {
                inertia.decay(&options);
                frames += 1;
            }
            frames
        };
        assert!(
            frames_to_stop(FrictionRegime::GlobeSpin)
                > 2 * frames_to_stop(FrictionRegime::Normal)
        );
    }

    #[test]
    fn stop_resets_regime() {
        let mut inertia = Inertia {
            theta: 1.0,
            regime: FrictionRegime::GlobeSpin,
            ..Inertia::default()
        };
        inertia.stop();
        assert!(!inertia.is_moving());
        assert_eq!(inertia.regime, FrictionRegime::Normal);
    }
}
