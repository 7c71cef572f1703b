use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What a frame where every visible hand is a fist does to existing motion.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FistPolicy {
    /// Stop tracking but let any inertia keep coasting.
    #[default]
    Coast,
    /// Stop tracking and zero all velocity.
    Brake,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orbit camera projection, sensitivity, inertia and limit parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 110.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Azimuth radians per normalized unit of horizontal wrist motion.
    #[schemars(title = "Orbit Speed X", range(min = 0.5, max = 10.0), extend("step" = 0.1))]
    pub orbit_sensitivity_x: f32,
    /// Elevation radians per normalized unit of vertical wrist motion.
    #[schemars(title = "Orbit Speed Y", range(min = 0.5, max = 10.0), extend("step" = 0.1))]
    pub orbit_sensitivity_y: f32,
    /// World units of target motion per normalized unit of wrist motion.
    #[schemars(title = "Pan Speed", range(min = 1.0, max = 50.0), extend("step" = 0.5))]
    pub pan_sensitivity: f32,
    /// Radius change per normalized unit of two-hand spread change.
    #[schemars(title = "Zoom Speed", range(min = 1.0, max = 30.0), extend("step" = 0.5))]
    pub zoom_sensitivity: f32,
    /// Radius change per normalized unit of vertical motion while pinching.
    #[schemars(title = "Pinch Zoom Speed", range(min = 1.0, max = 60.0), extend("step" = 0.5))]
    pub pinch_zoom_sensitivity: f32,
    /// Exponential smoothing of orbit deltas (0 = raw, 1 = frozen).
    #[schemars(title = "Smoothing", range(min = 0.0, max = 0.95), extend("step" = 0.05))]
    pub smoothing: f32,
    /// Per-frame velocity retention after an ordinary release.
    #[schemars(title = "Friction", range(min = 0.5, max = 0.99), extend("step" = 0.01))]
    pub friction: f32,
    /// Per-frame velocity retention after a fast swipe.
    #[schemars(title = "Globe Spin Friction", range(min = 0.5, max = 0.999), extend("step" = 0.001))]
    pub globe_spin_friction: f32,
    /// Raw per-frame wrist displacement that counts as a fast swipe.
    #[schemars(title = "Fast Swipe Threshold", range(min = 0.005, max = 0.2), extend("step" = 0.005))]
    pub fast_swipe_threshold: f32,
    /// Velocities below this magnitude snap to zero while coasting.
    #[schemars(skip)]
    pub inertia_cutoff: f32,
    /// Smallest elevation angle (radians from straight above).
    #[schemars(skip)]
    pub phi_min: f32,
    /// Largest elevation angle before the floor clamp is applied.
    #[schemars(skip)]
    pub phi_max: f32,
    /// Closest orbit radius.
    #[schemars(title = "Min Distance", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub radius_min: f32,
    /// Farthest orbit radius.
    #[schemars(title = "Max Distance", range(min = 5.0, max = 200.0), extend("step" = 1.0))]
    pub radius_max: f32,
    /// Azimuth at construction.
    #[schemars(skip)]
    pub initial_theta: f32,
    /// Elevation at construction.
    #[schemars(skip)]
    pub initial_phi: f32,
    /// Radius at construction.
    #[schemars(skip)]
    pub initial_radius: f32,
    /// World height of the ground plane.
    #[schemars(skip)]
    pub ground_y: f32,
    /// Minimum camera clearance above the ground plane.
    #[schemars(title = "Floor Clearance", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub floor_offset: f32,
    /// Let a single pinching hand drive zoom instead of orbit.
    #[schemars(title = "Pinch Zoom")]
    pub pinch_zoom: bool,
    /// Behaviour when every visible hand is a fist.
    #[schemars(title = "Fist Policy")]
    pub fist_policy: FistPolicy,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 200.0,
            orbit_sensitivity_x: 3.0,
            orbit_sensitivity_y: 2.0,
            pan_sensitivity: 15.0,
            zoom_sensitivity: 8.0,
            pinch_zoom_sensitivity: 20.0,
            smoothing: 0.3,
            friction: 0.92,
            globe_spin_friction: 0.975,
            fast_swipe_threshold: 0.04,
            inertia_cutoff: 1e-4,
            phi_min: 0.1,
            phi_max: std::f32::consts::PI - 0.1,
            radius_min: 2.0,
            radius_max: 40.0,
            initial_theta: std::f32::consts::FRAC_PI_2,
            initial_phi: std::f32::consts::FRAC_PI_2,
            initial_radius: 12.0,
            ground_y: -5.0,
            floor_offset: 0.5,
            pinch_zoom: false,
            fist_policy: FistPolicy::Coast,
        }
    }
}
