//! Read-only queries and scene access for [`GestureEngine`].

use super::GestureEngine;
use crate::camera::{Camera, HandCameraController};
use crate::options::Options;
use crate::scene::{AnimationCallbacks, NodeId, Scene, SceneHost};
use crate::selection::InteractionMode;

// ── Camera ──

impl GestureEngine {
    /// Current camera pose and projection.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera_controller.camera
    }

    /// The hand camera controller.
    #[must_use]
    pub fn camera_controller(&self) -> &HandCameraController {
        &self.camera_controller
    }

    /// Zero camera velocity without moving it.
    pub fn stop_inertia(&mut self) {
        self.camera_controller.stop_inertia();
    }
}

// ── Selection ──

impl GestureEngine {
    /// Navigation or selection.
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.selection.mode()
    }

    /// Currently selected registered name.
    #[must_use]
    pub fn selected_name(&self) -> Option<&str> {
        self.scene.selected_name()
    }

    /// Drop the selection and restore its materials.
    pub fn clear_selection(&mut self) {
        self.selection.clear_selection(&mut self.scene);
    }
}

// ── Scene access ──

impl GestureEngine {
    /// The pickable scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene, for registering and removing objects.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Remove a registration, restoring the highlight first if it was the
    /// selected object.
    pub fn unregister(&mut self, name: &str) -> Option<NodeId> {
        if self.scene.selected_name() == Some(name) {
            self.selection.clear_selection(&mut self.scene);
        }
        self.scene.unregister(name)
    }

    /// Drop every registration along with the selection and its highlight.
    pub fn clear_registry(&mut self) {
        self.selection.clear_selection(&mut self.scene);
        self.scene.clear_registry();
    }

    /// Per-frame animation callbacks.
    pub fn animations_mut(&mut self) -> &mut AnimationCallbacks {
        &mut self.animations
    }

    /// Frames run so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}

// ── Options ──

impl GestureEngine {
    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Name of the last loaded or saved preset.
    #[must_use]
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }
}
