//! Log sanitization utilities
//!
//! Request payloads carry the reseller password in-band (`Password` field),
//! so raw request bodies must never reach the logs unmasked. Response bodies
//! are only truncated.

use serde_json::Value;

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Field names whose values are masked in logged request payloads.
const SENSITIVE_FIELDS: [&str; 2] = ["Password", "AuthCode"];

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` characters with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Render a request payload for logging with credential fields masked.
pub fn sanitize_request(request: &Value) -> String {
    let mut masked = request.clone();
    mask_in_place(&mut masked);
    truncate_for_log(&masked.to_string())
}

fn mask_in_place(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map.iter_mut() {
                if SENSITIVE_FIELDS.contains(&key.as_str()) {
                    *child = Value::String("***".to_string());
                } else {
                    mask_in_place(child);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                mask_in_place(item);
            }
        }
        _ => {}
    }
}
