//! Centralized controller options with TOML preset support.
//!
//! Every tunable (camera limits and smoothing, pointer sensitivities,
//! picking depth) is consolidated here. Options serialize to/from TOML so
//! hosts can ship per-scene presets.

mod camera;
mod input;
mod picking;

use std::path::Path;

pub use camera::CameraOptions;
pub use input::InputOptions;
pub use picking::PickingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ViewpointError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[input]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection, orbit limits, and smoothing.
    pub camera: CameraOptions,
    /// Pointer and wheel sensitivities.
    pub input: InputOptions,
    /// Click resolution parameters.
    pub picking: PickingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ViewpointError> {
        toml::from_str(content)
            .map_err(|e| ViewpointError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ViewpointError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).inspect_err(|e| {
            log::warn!("rejected options file {}: {e}", path.display());
        })
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ViewpointError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewpointError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
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
