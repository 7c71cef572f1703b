use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Gesture that fires a pick while selecting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SelectTrigger {
    /// Thumb closes onto the index knuckle.
    #[default]
    ThumbTap,
    /// Index tip flicks downward.
    Flick,
}

/// Where the pick ray is cast from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SelectAim {
    /// The smoothed fingertip cursor.
    #[default]
    Cursor,
    /// The middle of the viewport.
    ScreenCenter,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Selection", inline)]
#[serde(default)]
/// Selection-mode debouncing, cursor and highlight parameters.
pub struct SelectionOptions {
    /// Consecutive pointing frames before selection mode starts.
    #[schemars(title = "Enter Frames", range(min = 1, max = 30))]
    pub enter_frames: u32,
    /// Consecutive non-pointing frames before selection mode ends.
    #[schemars(title = "Exit Frames", range(min = 1, max = 30))]
    pub exit_frames: u32,
    /// Cursor low-pass factor (0 = raw, 1 = frozen).
    #[schemars(title = "Cursor Smoothing", range(min = 0.0, max = 0.95), extend("step" = 0.05))]
    pub cursor_smoothing: f32,
    /// Pick trigger gesture.
    #[schemars(title = "Trigger")]
    pub trigger: SelectTrigger,
    /// Pick ray origin.
    #[schemars(title = "Aim")]
    pub aim: SelectAim,
    /// Emissive colour applied to the selected object.
    #[schemars(skip)]
    pub highlight_emissive: [f32; 3],
    /// Emissive intensity applied to the selected object.
    #[schemars(title = "Highlight Intensity", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub highlight_intensity: f32,
    /// Viewport width in pixels.
    #[schemars(skip)]
    pub viewport_width: f32,
    /// Viewport height in pixels.
    #[schemars(skip)]
    pub viewport_height: f32,
    /// Mirror the cursor horizontally to match a selfie-view preview.
    #[schemars(title = "Mirror Cursor")]
    pub mirror_x: bool,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            enter_frames: 4,
            exit_frames: 6,
            cursor_smoothing: 0.35,
            trigger: SelectTrigger::ThumbTap,
            aim: SelectAim::Cursor,
            highlight_emissive: [1.0, 0.0, 1.0],
            highlight_intensity: 0.35,
            viewport_width: 1280.0,
            viewport_height: 720.0,
            mirror_x: true,
        }
    }
}
