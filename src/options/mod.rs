//! Controller configuration with TOML preset support.
//!
//! All tweakable settings (trigger conditions, speeds, thresholds, zoom
//! behavior) are consolidated in [`ControllerOptions`]. Options serialize
//! to/from TOML for presets, and every setting may be changed at runtime —
//! a new value takes effect on the next gesture.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PivotcamError;
use crate::input::PointerConditions;

/// Which 3D point a zoom operation scales camera distance around.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ZoomMode {
    /// Zoom toward the center of the view (the camera target).
    #[default]
    ViewCenter,
    /// Zoom toward the camera's rotation center, falling back to the
    /// target position when no rotation center is set.
    CameraRotationCenter,
    /// Hit-test the scene at the pointer and zoom toward the hit point,
    /// falling back to the view center when nothing is hit.
    PointerPosition,
}

/// Gesture trigger conditions and motion tuning for a
/// [`PointerCameraController`](crate::camera::PointerCameraController).
///
/// Uses `#[serde(default)]` so partial TOML presets (e.g. only overriding
/// `zoom_mode`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct ControllerOptions {
    /// Button/modifier combination that starts a rotate gesture.
    #[schemars(with = "String")]
    pub rotate_conditions: PointerConditions,
    /// Button/modifier combination that starts a move (pan) gesture.
    #[schemars(with = "String")]
    pub move_conditions: PointerConditions,
    /// Button/modifier combination that starts a quick-zoom gesture.
    #[schemars(with = "String")]
    pub quick_zoom_conditions: PointerConditions,
    /// Anchor point selection for wheel and quick-zoom.
    pub zoom_mode: ZoomMode,
    /// Pixels the pointer must travel from the down position before a
    /// drag counts as a gesture. Keeps plain clicks from nudging the
    /// camera.
    #[schemars(title = "Move Threshold", range(min = 0.0, max = 20.0))]
    pub mouse_move_threshold: f32,
    /// Multiplicative distance change per wheel tick.
    #[schemars(title = "Wheel Zoom Factor", range(min = 1.01, max = 1.5))]
    pub wheel_distance_change_factor: f32,
    /// Upper clamp on camera distance after zooming out. NaN disables
    /// the clamp.
    #[schemars(skip)]
    pub max_camera_distance: f32,
    /// Heading/attitude change in degrees per pixel of drag.
    #[schemars(title = "Rotation Speed", range(min = 0.05, max = 2.0))]
    pub rotation_speed: f32,
    /// Wheel ticks per pixel of vertical quick-zoom drag.
    #[schemars(title = "Quick-Zoom Speed", range(min = 0.01, max = 0.5))]
    pub quick_zoom_speed: f32,
    /// Rotate around the 3D point under the pointer at gesture start
    /// instead of the camera target.
    pub rotate_around_pointer_position: bool,
    /// Flip the sign of horizontal rotation deltas.
    pub is_x_axis_inverted: bool,
    /// Flip the sign of vertical rotation deltas.
    pub is_y_axis_inverted: bool,
    /// Whether the scroll wheel zooms at all.
    pub is_pointer_wheel_zoom_enabled: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            rotate_conditions: PointerConditions::LEFT_BUTTON,
            move_conditions: PointerConditions::LEFT_BUTTON
                | PointerConditions::CONTROL,
            quick_zoom_conditions: PointerConditions::LEFT_BUTTON
                | PointerConditions::RIGHT_BUTTON,
            zoom_mode: ZoomMode::default(),
            mouse_move_threshold: 3.0,
            wheel_distance_change_factor: 1.05,
            max_camera_distance: f32::NAN,
            rotation_speed: 0.5,
            quick_zoom_speed: 0.1,
            rotate_around_pointer_position: false,
            is_x_axis_inverted: false,
            is_y_axis_inverted: false,
            is_pointer_wheel_zoom_enabled: true,
        }
    }
}

impl ControllerOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(ControllerOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, PivotcamError> {
        let content = std::fs::read_to_string(path).map_err(PivotcamError::Io)?;
        toml::from_str(&content)
            .map_err(|e| PivotcamError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), PivotcamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PivotcamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PivotcamError::Io)?;
        }
        std::fs::write(path, content).map_err(PivotcamError::Io)
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
