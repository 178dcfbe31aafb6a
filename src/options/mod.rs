//! Designer-facing tunables with TOML preset support.
//!
//! Pan behavior, bounds and camera projection settings are consolidated
//! here. Options serialize to/from TOML so a scene can ship its own preset.
//! They are read once when the controller is built and never change after.

mod bounds;
mod camera;
mod pan;

use std::path::Path;

pub use bounds::{clamp_axis, BoundsOptions};
pub use camera::CameraOptions;
pub use pan::{PanOptions, DRAG_SCALE};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::DragCamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[bounds]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Drag, inertia and reset tunables.
    pub pan: PanOptions,
    /// Rectangle the drag offset is clamped to.
    pub bounds: BoundsOptions,
    /// Projection and start-up placement.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the designer-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`DragCamError::Io`] if the file can't be read,
    /// [`DragCamError::OptionsParse`] if it isn't valid options TOML.
    pub fn load(path: &Path) -> Result<Self, DragCamError> {
        let content = std::fs::read_to_string(path).map_err(DragCamError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`DragCamError::OptionsParse`] on malformed TOML or mistyped fields.
    pub fn from_toml(content: &str) -> Result<Self, DragCamError> {
        toml::from_str(content)
            .map_err(|e| DragCamError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed), creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Serialization or filesystem failure.
    pub fn save(&self, path: &Path) -> Result<(), DragCamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DragCamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DragCamError::Io)?;
        }
        std::fs::write(path, content).map_err(DragCamError::Io)
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
