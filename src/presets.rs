//! Built-in option presets embedded in the binary
//!
//! Each preset is a YAML document with a `description` and an `options`
//! map applied over the library defaults, so users can say
//! `--preset full` instead of writing an options file.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Built-in preset YAML definitions
pub static BUILTIN_PRESETS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();

        m.insert("default", include_str!("../presets/default.yaml"));
        m.insert("numbers", include_str!("../presets/numbers.yaml"));
        m.insert("full", include_str!("../presets/full.yaml"));
        m.insert("compact", include_str!("../presets/compact.yaml"));

        m
    });

/// Get a built-in preset by name
pub fn get_builtin(name: &str) -> Option<&'static str> {
    BUILTIN_PRESETS.get(name).copied()
}

/// Check if a name is a built-in preset
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_PRESETS.contains_key(name)
}

/// List all built-in preset names, sorted
pub fn list_builtin() -> Vec<&'static str> {
    let mut names: Vec<_> = BUILTIN_PRESETS.keys().copied().collect();
    names.sort_unstable();
    names
}
