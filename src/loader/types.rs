//! Loader types

use crate::types::JsonObject;
use serde::{Deserialize, Serialize};

/// Key of an options file naming the preset to start from
pub const PRESET_KEY: &str = "preset";

/// A built-in preset as stored in YAML
#[derive(Debug, Clone, Deserialize)]
pub struct PresetDefinition {
    /// Human-readable summary
    #[serde(default)]
    pub description: String,

    /// Option overrides applied over the library defaults
    #[serde(default)]
    pub options: JsonObject,
}

/// Summary of a built-in preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetInfo {
    /// Preset name
    pub name: String,
    /// Human-readable summary
    pub description: String,
}
