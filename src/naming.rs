//! Plugin name → Go handler identifier.

use std::path::{Component, Path};

use crate::error::ScaffoldError;

/// Every Buffalo plugin binary must carry this prefix.
pub const PLUGIN_PREFIX: &str = "buffalo-";

/// Prefix of the generated handler function.
pub const HANDLER_PREFIX: &str = "handle";

/// Derive the handler identifier for a plugin short name.
///
/// `buffalo-my_plugin-two` → `handleMyPluginTwo`. Letters and digits are
/// kept, the first of every run upper-cased; everything else only splits
/// runs.
pub fn handler_identifier(plugin_name: &str) -> Result<String, ScaffoldError> {
    let Some(suffix) = plugin_name.strip_prefix(PLUGIN_PREFIX) else {
        return Err(ScaffoldError::InvalidPluginName {
            name: plugin_name.to_string(),
        });
    };

    let mut camel = String::with_capacity(suffix.len());
    let mut run_start = true;
    for ch in suffix.chars() {
        if ch.is_alphabetic() || ch.is_numeric() {
            if run_start {
                camel.push(upper_simple(ch));
                run_start = false;
            } else {
                camel.push(ch);
            }
        } else {
            run_start = true;
        }
    }

    if camel.is_empty() {
        return Err(ScaffoldError::EmptyDerivedIdentifier {
            name: plugin_name.to_string(),
        });
    }

    Ok(format!("{HANDLER_PREFIX}{camel}"))
}

/// Single-character upper-case mapping; characters whose upper case
/// expands to several characters (`ß` → `SS`) are kept as they are.
fn upper_simple(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

/// Last segment of a `[subdirectory/]name` plugin path, after resolving
/// `.` and `..` lexically.
///
/// Falls back to the input when nothing is left, so the prefix check in
/// [`handler_identifier`] reports it.
pub fn short_name(plugin_name_with_path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for component in Path::new(plugin_name_with_path).components() {
        match component {
            Component::Normal(part) => {
                if let Some(part) = part.to_str() {
                    segments.push(part);
                }
            }
            Component::ParentDir => {
                segments.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    segments
        .last()
        .map(|s| s.to_string())
        .unwrap_or_else(|| plugin_name_with_path.to_string())
}
