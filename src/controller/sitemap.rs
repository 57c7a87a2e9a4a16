//! Route listing served at the root path.
//!
//! The listing is derived from the OpenAPI document rather than maintained by
//! hand, so it stays in sync with the registered routes for free.

use utoipa::openapi::OpenApi;

const METHODS: [&str; 5] = ["get", "post", "put", "delete", "patch"];

/// Builds `"METHOD /path"` entries for every operation in the OpenAPI document.
///
/// Goes through the serialized JSON form of the document, which keeps this
/// independent of the `utoipa` path-item representation.
pub fn entries(api: &OpenApi) -> Vec<String> {
    let Ok(doc) = serde_json::to_value(api) else {
        return Vec::new();
    };

    let Some(paths) = doc.get("paths").and_then(|p| p.as_object()) else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for (path, item) in paths {
        let Some(operations) = item.as_object() else {
            continue;
        };
        for method in operations.keys() {
            if METHODS.contains(&method.as_str()) {
                entries.push(format!("{} {}", method.to_uppercase(), path));
            }
        }
    }

    entries.sort();
    entries
}
