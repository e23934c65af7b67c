//! JSON value codec
//!
//! PUT bodies and GET responses carry the value sequence as a JSON
//! array of strings: `["100"]`, `["1","2"]`, `[]`.

use pinion_core::{PinionError, PinionResult};

/// Decode a request body into a value sequence. Anything that is not a
/// JSON array of strings is a malformed payload.
pub fn decode_values(body: &[u8]) -> PinionResult<Vec<String>> {
    serde_json::from_slice(body).map_err(|e| PinionError::MalformedPayload(e.to_string()))
}

/// Whether a declared content type names JSON. Parameters after the
/// media type (`; charset=utf-8`) are ignored.
pub fn is_json_content_type(declared: &str) -> bool {
    let essence = declared.split(';').next().unwrap_or("").trim();
    essence.eq_ignore_ascii_case("application/json")
}
