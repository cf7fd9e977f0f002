//! Request-input validation helpers.
//!
//! Creation DTOs carry required fields as `Option` so that a missing field is
//! reported as `CoreError::InvalidInput` rather than a deserialization
//! rejection. These helpers unwrap them.

use crate::error::CoreError;

/// Require a field to be present.
pub fn require<T>(value: Option<T>, field: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::InvalidInput(format!("Missing required field: {field}")))
}

/// Require a text field to be present and not blank. The value is returned
/// unchanged (no trimming).
pub fn require_text(value: Option<String>, field: &str) -> Result<String, CoreError> {
    let value = require(value, field)?;
    if value.trim().is_empty() {
        return Err(CoreError::InvalidInput(format!(
            "Field must not be blank: {field}"
        )));
    }
    Ok(value)
}

/// Validate a list of jutsu names: every entry must be non-blank, and repeated
/// names collapse to their first occurrence.
pub fn normalize_jutsu_names(names: Vec<String>) -> Result<Vec<String>, CoreError> {
    let mut unique: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if name.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "Jutsu names must not be blank".to_string(),
            ));
        }
        if !unique.contains(&name) {
            unique.push(name);
        }
    }
    Ok(unique)
}
