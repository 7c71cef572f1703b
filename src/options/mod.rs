//! Centralized interaction options with TOML preset support.
//!
//! All tweakable settings (camera motion, gesture thresholds, selection
//! behaviour) are consolidated here. Options serialize to/from TOML for
//! presets stored in `assets/presets/`.

mod camera;
mod gestures;
mod selection;

use std::path::Path;

pub use camera::{CameraOptions, FistPolicy};
pub use gestures::{GestureOptions, PointerStyle};
use schemars::JsonSchema;
pub use selection::{SelectAim, SelectTrigger, SelectionOptions};
use serde::{Deserialize, Serialize};

use crate::error::HandOrbitError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbit camera parameters.
    pub camera: CameraOptions,
    /// Gesture classifier thresholds.
    pub gestures: GestureOptions,
    /// Selection mode parameters.
    pub selection: SelectionOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, HandOrbitError> {
        let content =
            std::fs::read_to_string(path).map_err(HandOrbitError::Io)?;
        toml::from_str(&content)
            .map_err(|e| HandOrbitError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), HandOrbitError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| HandOrbitError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(HandOrbitError::Io)?;
        }
        std::fs::write(path, content).map_err(HandOrbitError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
friction = 0.8
fist_policy = "brake"

[selection]
trigger = "flick"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.friction, 0.8);
        assert_eq!(opts.camera.fist_policy, FistPolicy::Brake);
        assert_eq!(opts.selection.trigger, SelectTrigger::Flick);
        // Everything else should be default
        assert_eq!(opts.camera.smoothing, 0.3);
        assert_eq!(opts.selection.enter_frames, 4);
        assert_eq!(opts.gestures.pointer_style, PointerStyle::FingerGun);
    }

    #[test]
    fn hysteresis_defaults_are_ordered() {
        let opts = Options::default();
        assert!(opts.gestures.tap_enter < opts.gestures.tap_exit);
        assert!(opts.gestures.pinch_enter < opts.gestures.pinch_exit);
        assert!(opts.selection.enter_frames <= opts.selection.exit_frames);
        assert!(opts.camera.friction < opts.camera.globe_spin_friction);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("handorbit-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.camera.zoom_sensitivity = 4.0;
        opts.save(&dir.join("slow_zoom.toml")).unwrap();

        let loaded = Options::load(&dir.join("slow_zoom.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["slow_zoom".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir()
            .join(format!("handorbit-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[camera]\nfriction = \"fast\"\n").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(HandOrbitError::OptionsParse(_))
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("gestures"));
        assert!(props.contains_key("selection"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("friction").is_some());
        assert!(camera.get("floor_offset").is_some());
        assert!(camera.get("znear").is_none());
        assert!(camera.get("phi_min").is_none());
    }
}
