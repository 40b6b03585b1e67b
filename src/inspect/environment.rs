//! Environment snapshot with sensitive values masked.

use std::collections::BTreeMap;

use crate::env::EnvSource;

/// Substrings that mark a variable name as sensitive (matched case-insensitively).
pub const SENSITIVE_MARKERS: [&str; 4] = ["password", "secret", "key", "token"];

/// Shown in place of a sensitive value.
pub const MASKED_VALUE: &str = "*** HIDDEN FOR SECURITY ***";

/// Variable name to displayed value, sorted by name.
pub type EnvVarMap = BTreeMap<String, String>;

/// Whether `name` contains any sensitive marker.
pub fn is_sensitive(name: &str) -> bool {
    let lower = name.to_lowercase();
    SENSITIVE_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Copy every variable of `source`, masking sensitive ones.
///
/// Sensitive variables stay in the map so the key set is complete.
pub fn snapshot<S: EnvSource + ?Sized>(source: &S) -> EnvVarMap {
    source
        .vars()
        .into_iter()
        .map(|(name, value)| {
            if is_sensitive(&name) {
                (name, MASKED_VALUE.to_string())
            } else {
                (name, value)
            }
        })
        .collect()
}
