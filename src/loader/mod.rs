//! Options loader module
//!
//! Parse rendering options from YAML or JSON and merge them over defaults.
//!
//! # Overview
//!
//! The loader module provides:
//! - `load_options` / `load_options_from_str` - Options files (flat maps)
//! - `load_preset` - Built-in presets by name
//! - `parse_override` - `key=value` overrides from the command line
//! - `validate_options` - Hard checks plus template warnings, logged once
//!
//! An options file may name a `preset` to start from; every other key is
//! an option name. Unknown keys are ignored.

mod parser;
mod types;

pub use parser::{
    load_options, load_options_from_str, load_preset, options_from_map, parse_override,
    preset_info, validate_options,
};
pub use types::{PresetDefinition, PresetInfo, PRESET_KEY};
