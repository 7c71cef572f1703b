//! Hand-driven orbit camera.
//!
//! Each frame the controller classifies the visible hands into one motion
//! mode and integrates it into an [`Orbit`]:
//!
//! | Hands                      | Mode                                  |
//! |----------------------------|---------------------------------------|
//! | none                       | coast on inertia (or brake)           |
//! | every hand a fist          | hold: coast or brake per [`FistPolicy`] |
//! | one fist + one open        | pan the target with the open wrist    |
//! | two open                   | zoom by wrist spread                  |
//! | one open (pinching)        | pinch zoom, when enabled              |
//! | one open                   | orbit by smoothed wrist motion        |
//!
//! Every "previous sample" tracker is dropped as soon as its mode is left,
//! so re-entering a mode never produces a delta spanning the gap.

use glam::{Vec2, Vec3};

use super::core::Camera;
use super::inertia::{FrictionRegime, Inertia};
use super::orbit::Orbit;
use crate::gesture::{is_fist, pinch_distance, PinchLatch};
use crate::hand::{Hand, MAX_HANDS};
use crate::options::{CameraOptions, FistPolicy, GestureOptions};

/// Caller-supplied hint for frames the controller should not steer from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlMode {
    /// Steer from the hands; coast when none are visible.
    #[default]
    Normal,
    /// Ignore the hands and coast on existing inertia.
    Coast,
    /// Ignore the hands and stop dead.
    Brake,
}

/// Motion mode the controller ran on the most recent frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraGesture {
    /// No update has run yet.
    #[default]
    Idle,
    /// Drifting on inertia with no steering input.
    Coasting,
    /// Hard stop requested by the caller.
    Braking,
    /// Every visible hand is a fist.
    Holding,
    /// Translating the target.
    Panning,
    /// Two-hand spread zoom.
    Zooming,
    /// Single-hand pinch zoom.
    PinchZooming,
    /// Single-hand orbit.
    Orbiting,
}

/// Previous-frame samples, one per motion mode.
#[derive(Debug, Clone, Copy, Default)]
struct Trackers {
    wrist: Option<Vec2>,
    spread: Option<f32>,
    pan: Option<Vec2>,
    pinch_y: Option<f32>,
}

/// Orbit/pan/zoom camera steered by hand landmarks.
pub struct HandCameraController {
    options: CameraOptions,
    orbit: Orbit,
    inertia: Inertia,
    smoothed: Vec2,
    trackers: Trackers,
    pinch: PinchLatch,
    gesture: CameraGesture,

    /// Camera pose, rewritten at the end of every update.
    pub camera: Camera,
}

impl HandCameraController {
    /// Create a controller orbiting the world origin.
    #[must_use]
    pub fn new(
        options: CameraOptions,
        gestures: &GestureOptions,
        aspect: f32,
    ) -> Self {
        let orbit = Orbit::from_options(&options, Vec3::ZERO);
        let camera = Camera {
            eye: orbit.eye(),
            target: orbit.target,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };
        Self {
            orbit,
            inertia: Inertia::default(),
            smoothed: Vec2::ZERO,
            trackers: Trackers::default(),
            pinch: PinchLatch::new(gestures.pinch_enter, gestures.pinch_exit),
            gesture: CameraGesture::Idle,
            camera,
            options,
        }
    }

    /// Start orbiting `target` instead of the origin.
    #[must_use]
    pub fn with_target(mut self, target: Vec3) -> Self {
        self.orbit.target = target;
        self.orbit.clamp(&self.options);
        self.update_camera_pos();
        self
    }

    /// Replace tuning parameters, keeping the current pose and velocity.
    pub fn apply_options(
        &mut self,
        options: CameraOptions,
        gestures: &GestureOptions,
    ) {
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
        self.pinch = PinchLatch::new(gestures.pinch_enter, gestures.pinch_exit);
        self.options = options;
        self.orbit.clamp(&self.options);
        self.update_camera_pos();
    }

    /// Current spherical placement.
    #[must_use]
    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }

    /// Current per-axis velocity.
    #[must_use]
    pub fn inertia(&self) -> &Inertia {
        &self.inertia
    }

    /// Motion mode of the most recent update.
    #[must_use]
    pub fn gesture(&self) -> CameraGesture {
        self.gesture
    }

    /// Active tuning parameters.
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Update the viewport aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Zero all velocity without moving the camera.
    pub fn stop_inertia(&mut self) {
        self.inertia.stop();
        self.smoothed = Vec2::ZERO;
    }

    /// Advance one frame.
    ///
    /// Malformed detections are ignored; if nothing usable is left the frame
    /// counts as having no hands.
    pub fn update(&mut self, hands: &[Hand], mode: ControlMode) {
        match mode {
            ControlMode::Brake => {
                self.clear_trackers();
                self.stop_inertia();
                self.gesture = CameraGesture::Braking;
            }
            ControlMode::Coast => {
                self.clear_trackers();
                self.coast();
                self.gesture = CameraGesture::Coasting;
            }
            ControlMode::Normal => {
                let usable: Vec<&Hand> = hands
                    .iter()
                    .filter(|h| h.is_complete())
                    .take(MAX_HANDS)
                    .collect();
                if usable.is_empty() {
                    self.clear_trackers();
                    self.coast();
                    self.gesture = CameraGesture::Coasting;
                } else {
                    self.steer(&usable);
                }
            }
        }

        self.orbit.clamp(&self.options);
        self.update_camera_pos();
    }

    // -- Mode dispatch --

    fn steer(&mut self, hands: &[&Hand]) {
        if hands.iter().all(|h| is_fist(h)) {
            self.hold();
            return;
        }

        if let [a, b] = hands {
            self.pinch.reset();
            self.trackers.pinch_y = None;
            let (fist_a, fist_b) = (is_fist(a), is_fist(b));
            if fist_a == fist_b {
                self.zoom(a, b);
            } else {
                let open = if fist_a { b } else { a };
                self.pan(open);
            }
            return;
        }

        let hand = hands[0];
        let pinching = self.options.pinch_zoom
            && self.pinch.update(pinch_distance(hand));
        if pinching {
            self.pinch_zoom(hand);
        } else {
            self.trackers.pinch_y = None;
            self.orbit_step(hand);
        }
    }

    fn hold(&mut self) {
        self.clear_trackers();
        match self.options.fist_policy {
            FistPolicy::Coast => self.coast(),
            FistPolicy::Brake => self.stop_inertia(),
        }
        self.gesture = CameraGesture::Holding;
    }

    // -- Motion modes --

    /// Integrate current velocity, then let it decay.
    fn coast(&mut self) {
        self.orbit.theta += self.inertia.theta;
        self.orbit.phi += self.inertia.phi;
        self.orbit.radius += self.inertia.radius;
        self.inertia.decay(&self.options);
    }

    fn pan(&mut self, open: &Hand) {
        let Some(wrist) = open.wrist().map(|w| w.xy()) else {
            return;
        };

        if let Some(prev) = self.trackers.pan {
            let delta = (wrist - prev) * self.options.pan_sensitivity;
            let forward = self.camera.forward();
            let right = forward.cross(Vec3::Y).normalize_or_zero();
            let up = right.cross(forward).normalize_or_zero();
            // image y points down; dragging down lowers the target
            self.orbit.target += right * delta.x - up * delta.y;
        }

        self.trackers = Trackers {
            pan: Some(wrist),
            ..Trackers::default()
        };
        self.stop_inertia();
        self.gesture = CameraGesture::Panning;
    }

    fn zoom(&mut self, a: &Hand, b: &Hand) {
        self.trackers.wrist = None;
        self.trackers.pan = None;
        self.smoothed = Vec2::ZERO;
        self.inertia.theta = 0.0;
        self.inertia.phi = 0.0;
        self.inertia.regime = FrictionRegime::Normal;
        self.gesture = CameraGesture::Zooming;

        let spread = match (a.wrist(), b.wrist()) {
            (Some(wa), Some(wb)) => wa.distance_2d(wb),
            _ => 0.0,
        };
        if spread <= f32::EPSILON {
            self.trackers.spread = None;
            return;
        }

        if let Some(prev) = self.trackers.spread {
            // hands moving apart pulls the camera in
            let wanted = self.orbit.radius
                - (spread - prev) * self.options.zoom_sensitivity;
            self.set_radius_with_velocity(wanted);
        }
        self.trackers.spread = Some(spread);
    }

    fn pinch_zoom(&mut self, hand: &Hand) {
        self.trackers.wrist = None;
        self.trackers.pan = None;
        self.trackers.spread = None;
        self.smoothed = Vec2::ZERO;
        self.inertia.theta = 0.0;
        self.inertia.phi = 0.0;
        self.inertia.regime = FrictionRegime::Normal;
        self.gesture = CameraGesture::PinchZooming;

        let Some(y) = hand.wrist().map(|w| w.y) else {
            return;
        };
        if let Some(prev) = self.trackers.pinch_y {
            // raising the pinched hand (smaller y) pulls the camera in
            let wanted = self.orbit.radius
                + (y - prev) * self.options.pinch_zoom_sensitivity;
            self.set_radius_with_velocity(wanted);
        }
        self.trackers.pinch_y = Some(y);
    }

    fn orbit_step(&mut self, hand: &Hand) {
        let Some(wrist) = hand.wrist().map(|w| w.xy()) else {
            return;
        };
        self.gesture = CameraGesture::Orbiting;

        match self.trackers.wrist {
            Some(prev) => {
                let raw = wrist - prev;
                let s = self.options.smoothing.clamp(0.0, 1.0);
                self.smoothed = self.smoothed * s + raw * (1.0 - s);

                let regime =
                    if raw.length() > self.options.fast_swipe_threshold {
                        FrictionRegime::GlobeSpin
                    } else {
                        FrictionRegime::Normal
                    };
                if regime != self.inertia.regime {
                    log::debug!("orbit friction regime -> {regime:?}");
                }
                self.inertia = Inertia {
                    theta: self.smoothed.x * self.options.orbit_sensitivity_x,
                    phi: self.smoothed.y * self.options.orbit_sensitivity_y,
                    radius: 0.0,
                    regime,
                };
                self.orbit.theta += self.inertia.theta;
                self.orbit.phi += self.inertia.phi;
            }
            // no previous sample yet: nothing steers this frame
            None => self.coast(),
        }

        self.trackers = Trackers {
            wrist: Some(wrist),
            ..Trackers::default()
        };
    }

    // -- Helpers --

    /// Move to `wanted` (clamped) and keep the applied step as radius
    /// velocity.
    fn set_radius_with_velocity(&mut self, wanted: f32) {
        let clamped = wanted.clamp(
            self.options.radius_min,
            self.options.radius_max.max(self.options.radius_min),
        );
        self.inertia.radius = clamped - self.orbit.radius;
        self.orbit.radius = clamped;
    }

    fn clear_trackers(&mut self) {
        self.trackers = Trackers::default();
        self.smoothed = Vec2::ZERO;
        self.pinch.reset();
    }

    fn update_camera_pos(&mut self) {
        self.camera.eye = self.orbit.eye();
        self.camera.target = self.orbit.target;
        self.camera.up = Vec3::Y;
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, TAU};

    use super::*;
    use crate::test_support::{self, approx};

    fn controller() -> HandCameraController {
        HandCameraController::new(
            CameraOptions::default(),
            &GestureOptions::default(),
            16.0 / 9.0,
        )
    }

    fn controller_with(options: CameraOptions) -> HandCameraController {
        HandCameraController::new(options, &GestureOptions::default(), 1.0)
    }

    #[test]
    fn single_hand_orbit_applies_smoothed_delta() {
        let mut c = controller();
        let theta0 = c.orbit().theta;
        let phi0 = c.orbit().phi;

        c.update(&[test_support::open_hand(0.50, 0.50)], ControlMode::Normal);
        assert_eq!(c.orbit().theta, theta0);

        c.update(&[test_support::open_hand(0.52, 0.48)], ControlMode::Normal);
        assert_eq!(c.gesture(), CameraGesture::Orbiting);
        // smoothed = 0.3·0 + 0.7·raw
        let d_theta = 0.7 * 0.02 * 3.0;
        let d_phi = 0.7 * -0.02 * 2.0;
        assert!(approx(c.orbit().theta - theta0, d_theta));
        assert!(approx(c.orbit().phi - phi0, d_phi));
        assert!(approx(c.inertia().theta, d_theta));
        assert!(approx(c.inertia().phi, d_phi));
        assert_eq!(c.inertia().regime, FrictionRegime::Normal);

        let theta1 = c.orbit().theta;
        c.update(&[], ControlMode::Coast);
        assert!(approx(c.orbit().theta, theta1 + d_theta));
        assert!(approx(c.inertia().theta, d_theta * 0.92));
        c.update(&[], ControlMode::Coast);
        assert!(approx(c.inertia().theta, d_theta * 0.92 * 0.92));
    }

    #[test]
    fn fast_swipe_selects_globe_spin_friction() {
        let mut c = controller();
        c.update(&[test_support::open_hand(0.30, 0.50)], ControlMode::Normal);
        c.update(&[test_support::open_hand(0.40, 0.50)], ControlMode::Normal);
        assert_eq!(c.inertia().regime, FrictionRegime::GlobeSpin);

        let v = c.inertia().theta;
        c.update(&[], ControlMode::Normal);
        assert!(approx(c.inertia().theta, v * 0.975));
    }

    #[test]
    fn slow_motion_selects_normal_friction() {
        let mut c = controller();
        c.update(&[test_support::open_hand(0.30, 0.50)], ControlMode::Normal);
        c.update(&[test_support::open_hand(0.31, 0.50)], ControlMode::Normal);
        assert_eq!(c.inertia().regime, FrictionRegime::Normal);
    }

    #[test]
    fn coasting_decays_to_exact_zero_without_sign_flip() {
        let mut c = controller();
        c.update(&[test_support::open_hand(0.30, 0.50)], ControlMode::Normal);
        c.update(&[test_support::open_hand(0.33, 0.50)], ControlMode::Normal);
        let mut previous = c.inertia().theta;
        assert!(previous > 0.0);
        for _ in 0..500 {
            c.update(&[], ControlMode::Coast);
            let v = c.inertia().theta;
            assert!(v >= 0.0);
            assert!(v == 0.0 || v < previous);
            previous = v;
        }
        assert_eq!(c.inertia().theta, 0.0);
    }

    #[test]
    fn brake_stops_motion_and_ignores_hands() {
        let mut c = controller();
        c.update(&[test_support::open_hand(0.30, 0.50)], ControlMode::Normal);
        c.update(&[test_support::open_hand(0.33, 0.50)], ControlMode::Normal);
        let theta = c.orbit().theta;
        c.update(&[test_support::open_hand(0.50, 0.50)], ControlMode::Brake);
        assert!(!c.inertia().is_moving());
        assert_eq!(c.orbit().theta, theta);
        assert_eq!(c.gesture(), CameraGesture::Braking);
    }

    #[test]
    fn coast_mode_ignores_present_hands() {
        let mut c = controller();
        let eye = c.camera.eye;
        for x in [0.40, 0.42, 0.44] {
            c.update(&[test_support::open_hand(x, 0.50)], ControlMode::Coast);
            assert_eq!(c.gesture(), CameraGesture::Coasting);
            assert_eq!(c.trackers.wrist, None);
        }
        assert_eq!(c.orbit().theta, FRAC_PI_2);
        assert_eq!(c.camera.eye, eye);
        assert!(!c.inertia().is_moving());

        // coasting frames leave no sample behind to orbit from
        c.update(&[test_support::open_hand(0.60, 0.50)], ControlMode::Normal);
        assert_eq!(c.orbit().theta, FRAC_PI_2);
    }

    #[test]
    fn long_sessions_keep_small_spins_moving() {
        let mut c = controller();
        c.orbit.theta = 20_000.0;
        c.update(&[], ControlMode::Brake);
        let start = c.orbit().theta;
        assert!((0.0..TAU).contains(&start));

        c.inertia.theta = 0.0009;
        let mut expected = 0.0;
        let mut v = 0.0009_f32;
        for _ in 0..10 {
            expected += v;
            v *= c.options.friction;
            c.update(&[], ControlMode::Coast);
            assert!((0.0..TAU).contains(&c.orbit().theta));
        }
        let moved = (c.orbit().theta - start).rem_euclid(TAU);
        assert!((moved - expected).abs() < 1e-4, "moved {moved}");
    }

    #[test]
    fn stop_inertia_keeps_pose() {
        let mut c = controller();
        c.update(&[test_support::open_hand(0.30, 0.50)], ControlMode::Normal);
        c.update(&[test_support::open_hand(0.33, 0.52)], ControlMode::Normal);
        let orbit = *c.orbit();
        c.stop_inertia();
        assert_eq!(*c.orbit(), orbit);
        assert!(!c.inertia().is_moving());
    }

    #[test]
    fn no_delta_across_a_gap() {
        let mut c = controller();
        c.update(&[test_support::open_hand(0.10, 0.50)], ControlMode::Normal);
        c.update(&[], ControlMode::Brake);
        let theta = c.orbit().theta;
        c.update(&[test_support::open_hand(0.90, 0.50)], ControlMode::Normal);
        assert_eq!(c.orbit().theta, theta);
    }

    #[test]
    fn fists_coast_by_default() {
        let mut c = controller();
        c.update(&[test_support::open_hand(0.30, 0.50)], ControlMode::Normal);
        c.update(&[test_support::open_hand(0.33, 0.50)], ControlMode::Normal);
        let v = c.inertia().theta;
        let theta = c.orbit().theta;

        c.update(&[test_support::fist(0.33, 0.50)], ControlMode::Normal);
        assert_eq!(c.gesture(), CameraGesture::Holding);
        assert!(approx(c.orbit().theta, theta + v));
        assert!(approx(c.inertia().theta, v * 0.92));
    }

    #[test]
    fn fists_brake_when_configured() {
        let mut c = controller_with(CameraOptions {
            fist_policy: FistPolicy::Brake,
            ..CameraOptions::default()
        });
        c.update(&[test_support::open_hand(0.30, 0.50)], ControlMode::Normal);
        c.update(&[test_support::open_hand(0.33, 0.50)], ControlMode::Normal);
        let theta = c.orbit().theta;
        c.update(
            &[test_support::fist(0.2, 0.5), test_support::fist(0.7, 0.5)],
            ControlMode::Normal,
        );
        assert!(!c.inertia().is_moving());
        assert_eq!(c.orbit().theta, theta);
    }

    #[test]
    fn two_open_hands_separating_zoom_in() {
        let mut c = controller();
        let r0 = c.orbit().radius;
        let frame = |spread: f32| {
            [
                test_support::open_hand(0.5 - spread / 2.0, 0.5),
                test_support::open_hand(0.5 + spread / 2.0, 0.5),
            ]
        };
        c.update(&frame(0.2), ControlMode::Normal);
        assert_eq!(c.orbit().radius, r0);
        c.update(&frame(0.3), ControlMode::Normal);
        assert_eq!(c.gesture(), CameraGesture::Zooming);
        assert!(approx(c.orbit().radius, r0 - 0.1 * 8.0));
        assert!(approx(c.inertia().radius, -0.8));
        assert_eq!(c.inertia().theta, 0.0);

        // release: zoom keeps coasting
        let r1 = c.orbit().radius;
        c.update(&[], ControlMode::Normal);
        assert!(c.orbit().radius < r1);
    }

    #[test]
    fn zoom_respects_radius_limits() {
        let options = CameraOptions {
            zoom_sensitivity: 100.0,
            ..CameraOptions::default()
        };
        let mut c = controller_with(options.clone());
        let r0 = c.orbit().radius;
        let frame = |spread: f32| {
            [
                test_support::open_hand(0.5 - spread / 2.0, 0.5),
                test_support::open_hand(0.5 + spread / 2.0, 0.5),
            ]
        };
        c.update(&frame(0.05), ControlMode::Normal);
        c.update(&frame(0.95), ControlMode::Normal);
        assert_eq!(c.orbit().radius, options.radius_min);
        // velocity is the step actually taken, not the requested one
        assert!(approx(c.inertia().radius, options.radius_min - r0));

        c.update(&frame(0.05), ControlMode::Normal);
        assert_eq!(c.orbit().radius, options.radius_max);
    }

    #[test]
    fn coincident_wrists_produce_no_zoom() {
        let mut c = controller();
        let r0 = c.orbit().radius;
        let same = [
            test_support::open_hand(0.5, 0.5),
            test_support::open_hand(0.5, 0.5),
        ];
        c.update(&same, ControlMode::Normal);
        c.update(&same, ControlMode::Normal);
        assert_eq!(c.orbit().radius, r0);
    }

    #[test]
    fn fist_plus_open_pans_target() {
        let mut c = controller();
        let target0 = c.orbit().target;
        c.update(
            &[test_support::fist(0.2, 0.5), test_support::open_hand(0.6, 0.5)],
            ControlMode::Normal,
        );
        c.update(
            &[test_support::fist(0.2, 0.5), test_support::open_hand(0.6, 0.45)],
            ControlMode::Normal,
        );
        assert_eq!(c.gesture(), CameraGesture::Panning);
        // hand moved up the image: target rises
        assert!(c.orbit().target.y > target0.y);
        assert!(!c.inertia().is_moving());
        // camera still aims at the (moved) target
        assert_eq!(c.camera.target, c.orbit().target);
    }

    #[test]
    fn pan_cannot_push_camera_below_floor() {
        let options = CameraOptions::default();
        let floor = options.ground_y + options.floor_offset;
        let mut c = controller();
        for i in 0..200 {
            c.update(
                &[
                    test_support::fist(0.2, 0.5),
                    test_support::open_hand(0.6, 0.1 + (i % 2) as f32 * 0.8),
                ],
                ControlMode::Normal,
            );
            // drag downward only
            if i % 2 == 1 {
                c.update(&[], ControlMode::Brake);
            }
            assert!(c.camera.eye.y >= floor - 1e-4);
        }
    }

    #[test]
    fn elevation_never_dips_below_floor() {
        let options = CameraOptions::default();
        let floor = options.ground_y + options.floor_offset;
        let mut c = controller();
        for step in 0..300 {
            let y = if step % 2 == 0 { 0.1 } else { 0.9 };
            // downward swings only: reset trackers between them
            c.update(&[test_support::open_hand(0.5, 0.1)], ControlMode::Normal);
            c.update(&[test_support::open_hand(0.5, y)], ControlMode::Normal);
            c.update(&[], ControlMode::Brake);
            assert!(c.camera.eye.y >= floor - 1e-4);
        }
        assert!(c.orbit().phi > FRAC_PI_2);
    }

    #[test]
    fn pinch_zoom_when_enabled() {
        let mut c = controller_with(CameraOptions {
            pinch_zoom: true,
            ..CameraOptions::default()
        });
        let r0 = c.orbit().radius;
        let theta0 = c.orbit().theta;
        c.update(&[test_support::pinching(0.5, 0.6)], ControlMode::Normal);
        c.update(&[test_support::pinching(0.55, 0.5)], ControlMode::Normal);
        assert_eq!(c.gesture(), CameraGesture::PinchZooming);
        assert!(approx(c.orbit().radius, r0 - 0.1 * 20.0));
        assert_eq!(c.orbit().theta, theta0);
    }

    #[test]
    fn pinch_orbits_when_disabled() {
        let mut c = controller();
        c.update(&[test_support::pinching(0.5, 0.6)], ControlMode::Normal);
        c.update(&[test_support::pinching(0.55, 0.5)], ControlMode::Normal);
        assert_eq!(c.gesture(), CameraGesture::Orbiting);
    }

    #[test]
    fn malformed_hands_count_as_none() {
        let mut c = controller();
        let short = Hand::from_points(
            &[(0.5, 0.5); 5],
            crate::hand::Handedness::Left,
        );
        c.update(&[short], ControlMode::Normal);
        assert_eq!(c.gesture(), CameraGesture::Coasting);
    }

    #[test]
    fn camera_tracks_orbit_every_frame() {
        let mut c = controller().with_target(Vec3::new(1.0, 2.0, 3.0));
        c.update(&[], ControlMode::Coast);
        assert_eq!(c.camera.eye, c.orbit().eye());
        assert_eq!(c.camera.target, Vec3::new(1.0, 2.0, 3.0));
        assert!(
            (c.camera.eye.distance(c.camera.target) - c.orbit().radius).abs()
                < 1e-4
        );
    }
}
