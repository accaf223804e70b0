//! Export helpers.
//!
//! The editor's only external representation is JSON: the exported shape is
//! exactly the in-memory data structure serialized directly, with no schema
//! version field. Getting the text onto disk (or into a browser download) is
//! the embedding application's job; this module's obligation ends at
//! producing the JSON string.

use serde::Serialize;

/// Serializes any serializable value to pretty-printed JSON (2-space indent).
pub fn export_to_json<T: Serialize>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}
