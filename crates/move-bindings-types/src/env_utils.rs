//! Environment variable helpers.
//!
//! Configuration for the bindings comes from a handful of `MOVE_BINDINGS_*`
//! variables. These helpers keep the parsing rules in one place:
//!
//! ```
//! use move_bindings_types::env_utils::{env_bool, env_path, env_string_or};
//!
//! let strict = env_bool("MOVE_BINDINGS_STRICT");
//! let schema_dir = env_path("MOVE_BINDINGS_SCHEMA_DIR");
//! let filter = env_string_or("MOVE_BINDINGS_LOG", "warn");
//! ```

use std::path::PathBuf;

/// Check if an environment variable is set to a truthy value.
///
/// Returns `true` if the variable is set to "1", "true", "yes", or "on" (case-insensitive).
pub fn env_bool(key: &str) -> bool {
    std::env::var(key)
        .ok()
        .map(|v| is_truthy(&v))
        .unwrap_or(false)
}

fn is_truthy(v: &str) -> bool {
    matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// Get an environment variable as a string with a default value.
pub fn env_string_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable as a path. Unset or blank values yield `None`.
pub fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}
