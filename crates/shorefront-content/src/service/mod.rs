//! Database-backed services, one module per aggregate.

pub mod media;
pub mod menus;
pub mod pages;
pub mod posts;
pub mod sections;
pub mod settings;
pub mod widgets;

/// Storage form of a JSON blob. An explicit null clears the column and a
/// string is assumed to be pre-serialized JSON and stored as-is.
pub(crate) fn json_text(value: Option<serde_json::Value>) -> Option<String> {
    match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(value) => Some(value.to_string()),
    }
}
