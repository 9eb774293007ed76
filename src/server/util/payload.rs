//! Field extraction from loosely typed JSON request bodies.
//!
//! Tag and name payloads are accepted as raw JSON so a wrong shape maps to the
//! endpoint's own 400 message instead of the extractor's rejection.

use serde_json::Value;

/// Reads `field` as a list of strings.
///
/// # Returns
/// - `Some(None)` - The field is absent or null
/// - `Some(Some(list))` - The field is an array of strings
/// - `None` - The field is present with any other shape
pub fn string_list(body: &Value, field: &str) -> Option<Option<Vec<String>>> {
    match body.get(field) {
        None | Some(Value::Null) => Some(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .map(Some),
        Some(_) => None,
    }
}
