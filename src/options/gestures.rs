use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which test recognizes the pointing ("finger gun") pose.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PointerStyle {
    /// Index tip farther from the wrist than its PIP joint.
    #[default]
    FingerGun,
    /// Index tip above its knuckle in image space.
    ImageSpace,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gestures", inline)]
#[serde(default)]
/// Classifier and debouncer thresholds, in normalized image units.
pub struct GestureOptions {
    /// Thumb-to-knuckle distance that closes a tap.
    #[schemars(title = "Tap Close", range(min = 0.01, max = 0.1), extend("step" = 0.005))]
    pub tap_enter: f32,
    /// Thumb-to-knuckle distance that re-arms the tap.
    #[schemars(title = "Tap Open", range(min = 0.02, max = 0.15), extend("step" = 0.005))]
    pub tap_exit: f32,
    /// Thumb-to-index-tip distance that engages a pinch.
    #[schemars(title = "Pinch Close", range(min = 0.01, max = 0.15), extend("step" = 0.005))]
    pub pinch_enter: f32,
    /// Thumb-to-index-tip distance that releases a pinch.
    #[schemars(title = "Pinch Open", range(min = 0.02, max = 0.2), extend("step" = 0.005))]
    pub pinch_exit: f32,
    /// Downward index-tip motion per frame that counts as a flick.
    #[schemars(title = "Flick Speed", range(min = 0.01, max = 0.2), extend("step" = 0.005))]
    pub flick_velocity: f32,
    /// Minimum time between two flicks.
    #[schemars(title = "Flick Cooldown (ms)", range(min = 0.0, max = 3000.0), extend("step" = 50.0))]
    pub flick_cooldown_ms: f64,
    /// Pointer pose test.
    #[schemars(title = "Pointer Style")]
    pub pointer_style: PointerStyle,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            tap_enter: 0.045,
            tap_exit: 0.07,
            pinch_enter: 0.06,
            pinch_exit: 0.09,
            flick_velocity: 0.04,
            flick_cooldown_ms: 800.0,
            pointer_style: PointerStyle::FingerGun,
        }
    }
}
