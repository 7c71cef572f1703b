//! Frame orchestration: the engine that ties hands, camera, selection
//! and scene together.

mod accessors;
mod options;

use glam::{Vec2, Vec3};

use crate::camera::{CameraGesture, HandCameraController};
use crate::hand::{FrameHands, Hand};
use crate::input::LandmarkSource;
use crate::options::Options;
use crate::scene::{AnimationCallbacks, Scene, SceneHost};
use crate::selection::{InteractionMode, SelectionController, SelectionEvent};
use crate::util::frame_timing::FrameTiming;

/// Target FPS for wall-clock pacing in the replay binary.
pub const TARGET_FPS: u32 = 30;

/// Everything one frame produced, for the host to render or log.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Frame counter, starting at 1.
    pub frame: u64,
    /// Capture timestamp the frame ran at.
    pub timestamp_ms: f64,
    /// Complete hands after the per-frame cap.
    pub hands: usize,
    /// Whether the landmark source delivered this frame.
    pub source_ok: bool,
    /// Camera eye position.
    pub eye: Vec3,
    /// Camera look-at target.
    pub target: Vec3,
    /// Camera motion mode for this frame.
    pub camera_gesture: CameraGesture,
    /// Navigation or selection.
    pub mode: InteractionMode,
    /// Smoothed cursor in viewport pixels, when shown.
    pub cursor: Option<Vec2>,
    /// Result of a pick fired this frame.
    pub selection: Option<SelectionEvent>,
    /// Currently selected registered name.
    pub selected: Option<String>,
    /// Animation callbacks that failed this frame.
    pub animation_failures: usize,
    /// Smoothed frame rate of the capture clock.
    pub fps: f32,
}

/// Per-frame orchestration of gesture input, camera and selection.
///
/// # Frame loop
///
/// Call [`tick`](Self::tick) once per captured frame with the landmark
/// source. It pulls the frame's hands, runs the selection controller
/// (which steers the camera with the right mode), runs the animation
/// callbacks and returns a [`FrameReport`]. Nothing inside a tick is
/// allowed to end the loop: source failures and failing callbacks are
/// logged and the frame carries on.
///
/// # Scene
///
/// The engine owns a [`Scene`]; register pickable objects through
/// [`scene_mut`](Self::scene_mut). Per-frame animations go through
/// [`animations_mut`](Self::animations_mut).
pub struct GestureEngine {
    pub(crate) options: Options,
    pub(crate) active_preset: Option<String>,
    pub(crate) camera_controller: HandCameraController,
    pub(crate) selection: SelectionController,
    pub(crate) scene: Scene,
    pub(crate) animations: AnimationCallbacks,
    pub(crate) frame_timing: FrameTiming,
    frame: u64,
}

impl GestureEngine {
    /// Create an engine with an empty scene.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self::with_scene(options, Scene::new())
    }

    /// Create an engine around an existing scene.
    #[must_use]
    pub fn with_scene(options: Options, scene: Scene) -> Self {
        let aspect = aspect_of(&options);
        Self {
            camera_controller: HandCameraController::new(
                options.camera.clone(),
                &options.gestures,
                aspect,
            ),
            selection: SelectionController::new(
                options.selection.clone(),
                &options.gestures,
            ),
            scene,
            animations: AnimationCallbacks::new(),
            frame_timing: FrameTiming::new(TARGET_FPS),
            active_preset: None,
            frame: 0,
            options,
        }
    }

    /// Run one frame, pulling hands from `source`.
    pub fn tick(
        &mut self,
        source: &mut dyn LandmarkSource,
        timestamp_ms: f64,
    ) -> FrameReport {
        match source.detect(timestamp_ms) {
            Ok(hands) => {
                self.run_frame(FrameHands::new(hands), timestamp_ms, true)
            }
            Err(e) => {
                log::error!("landmark source failed at {timestamp_ms} ms: {e}");
                self.run_frame(FrameHands::empty(), timestamp_ms, false)
            }
        }
    }

    /// Run one frame with hands the host already detected.
    pub fn tick_hands(
        &mut self,
        hands: Vec<Hand>,
        timestamp_ms: f64,
    ) -> FrameReport {
        self.run_frame(FrameHands::new(hands), timestamp_ms, true)
    }

    fn run_frame(
        &mut self,
        frame: FrameHands,
        timestamp_ms: f64,
        source_ok: bool,
    ) -> FrameReport {
        self.frame += 1;

        let selection = self.selection.update(
            frame.hands(),
            timestamp_ms,
            &mut self.camera_controller,
            &mut self.scene,
        );
        if let Some(event) = &selection {
            log::info!("frame {}: {event:?}", self.frame);
        }

        let dt = self.frame_timing.end_frame_at(timestamp_ms);
        let failures = self.animations.tick(dt);

        let camera = &self.camera_controller.camera;
        FrameReport {
            frame: self.frame,
            timestamp_ms,
            hands: frame
                .hands()
                .iter()
                .filter(|h| h.is_complete())
                .count(),
            source_ok,
            eye: camera.eye,
            target: camera.target,
            camera_gesture: self.camera_controller.gesture(),
            mode: self.selection.mode(),
            cursor: self.selection.cursor(),
            selection,
            selected: self.scene.selected_name().map(str::to_owned),
            animation_failures: failures.len(),
            fps: self.frame_timing.fps(),
        }
    }

    /// Update the viewport size used for the cursor and projection.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.options.selection.viewport_width = width as f32;
        self.options.selection.viewport_height = height as f32;
        self.camera_controller.resize(width, height);
        self.selection.set_viewport(width as f32, height as f32);
    }

    /// Drop the selection, every scene object and every animation.
    pub fn clear_scene(&mut self) {
        self.selection.clear_selection(&mut self.scene);
        self.scene = Scene::new();
        self.animations.clear();
    }
}

fn aspect_of(options: &Options) -> f32 {
    let s = &options.selection;
    if s.viewport_height > 0.0 {
        s.viewport_width / s.viewport_height
    } else {
        1.0
    }
}
