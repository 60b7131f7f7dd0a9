//! Parser for options files and presets
//!
//! Parses options documents and rejects invalid values.
//! Supports built-in presets (by name) and custom YAML/JSON files (by path).

use crate::config::PaginationOptions;
use crate::error::{Error, Result, ResultExt};
use crate::loader::types::{PresetDefinition, PresetInfo, PRESET_KEY};
use crate::presets;
use crate::types::{JsonObject, JsonValue};
use std::fs;
use std::path::Path;

/// Load options from a YAML or JSON file
///
/// Files ending in `.json` are parsed as JSON, everything else as YAML.
///
/// # Examples
///
/// ```ignore
/// let options = load_options("./pagination.yaml")?;
/// ```
pub fn load_options(path: impl AsRef<Path>) -> Result<PaginationOptions> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file '{}'", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        let value: JsonValue = serde_json::from_str(&content)?;
        options_from_map(&as_object(value)?)
    } else {
        load_options_from_str(&content)
    }
}

/// Load options from a YAML (or JSON) string
pub fn load_options_from_str(yaml: &str) -> Result<PaginationOptions> {
    if yaml.trim().is_empty() {
        return Ok(PaginationOptions::default());
    }
    let value: JsonValue = serde_yaml::from_str(yaml)?;
    options_from_map(&as_object(value)?)
}

/// Build options from a loose map, honouring an optional `preset` key
///
/// Hard errors fail here; template warnings are left to [`validate_options`].
pub fn options_from_map(map: &JsonObject) -> Result<PaginationOptions> {
    let mut options = match map.get(PRESET_KEY) {
        Some(JsonValue::String(name)) => load_preset(name)?,
        Some(other) => {
            return Err(Error::invalid_value(
                PRESET_KEY,
                format!("expected a preset name, got {other}"),
            ))
        }
        None => PaginationOptions::default(),
    };

    let mut overrides = map.clone();
    overrides.remove(PRESET_KEY);
    options.apply(&overrides)?;
    options.normalized()?;
    Ok(options)
}

/// Load a built-in preset by name
pub fn load_preset(name: &str) -> Result<PaginationOptions> {
    let definition = preset_definition(name)?;
    let mut options = PaginationOptions::default();
    options.apply(&definition.options)?;
    Ok(options)
}

/// Names and descriptions of all built-in presets
pub fn preset_info() -> Result<Vec<PresetInfo>> {
    presets::list_builtin()
        .into_iter()
        .map(|name| {
            let definition = preset_definition(name)?;
            Ok(PresetInfo {
                name: name.to_string(),
                description: definition.description,
            })
        })
        .collect()
}

/// Validate options, returning template warnings
///
/// Hard errors (such as a number limit below `-1`) fail; tokens that no
/// item substitutes are logged and returned as warnings.
pub fn validate_options(options: &PaginationOptions) -> Result<Vec<String>> {
    options.normalized()?;

    let warnings = options.template_warnings();
    for warning in &warnings {
        tracing::warn!("Pagination template: {}", warning);
    }
    Ok(warnings)
}

/// Parse a `key=value` override
///
/// The value is read as YAML, so `true`, `3` and `-1` become booleans and
/// integers and `[a, b]` a list (for `pages`); anything else stays a string.
pub fn parse_override(raw: &str) -> Result<(String, JsonValue)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| Error::config(format!("Override '{raw}' must look like key=value")))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(Error::config(format!("Override '{raw}' has an empty key")));
    }

    let value = match serde_yaml::from_str::<JsonValue>(value) {
        Ok(parsed @ (JsonValue::Bool(_) | JsonValue::Number(_) | JsonValue::Array(_))) => parsed,
        _ => JsonValue::String(value.to_string()),
    };
    Ok((key.to_string(), value))
}

fn preset_definition(name: &str) -> Result<PresetDefinition> {
    let yaml = presets::get_builtin(name).ok_or_else(|| Error::unknown_preset(name))?;
    Ok(serde_yaml::from_str(yaml)?)
}

fn as_object(value: JsonValue) -> Result<JsonObject> {
    match value {
        JsonValue::Object(map) => Ok(map),
        JsonValue::Null => Ok(JsonObject::new()),
        other => Err(Error::config(format!(
            "Options document must be a mapping, got {other}"
        ))),
    }
}
