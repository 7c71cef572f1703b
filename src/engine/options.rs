//! Options methods for GestureEngine

use std::path::Path;

use super::{aspect_of, GestureEngine};
use crate::options::Options;

impl GestureEngine {
    /// Replace options and apply all changes to subsystems.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.apply_options();
    }

    /// Push current option values to the camera and selection
    /// controllers. Camera pose and the current selection are kept.
    pub fn apply_options(&mut self) {
        let gestures = &self.options.gestures;
        self.camera_controller
            .apply_options(self.options.camera.clone(), gestures);
        self.camera_controller.camera.aspect = aspect_of(&self.options);
        self.selection
            .apply_options(self.options.selection.clone(), gestures);
    }

    /// Load a named preset from the presets directory.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path) {
            Ok(opts) => {
                log::info!("Loaded preset '{name}'");
                self.set_options(opts);
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to load preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named preset.
    /// Returns true on success.
    pub fn save_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("Saved preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to save preset '{name}': {e}");
                false
            }
        }
    }
}
