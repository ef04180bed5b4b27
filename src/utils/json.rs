//! Lenient JSON field decoding
//!
//! Explorer APIs disagree on whether numeric fields arrive as numbers or
//! strings. These helpers absorb that at the parse boundary so response
//! schemas can apply their documented defaults in exactly one place.

/// Read a u32 from a JSON number or numeric string
pub fn lenient_u32(value: &serde_json::Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        u32::try_from(n).ok()
    } else if let Some(s) = value.as_str() {
        s.trim().parse().ok()
    } else {
        None
    }
}

/// Read a string from a JSON string or number
pub fn lenient_string(value: &serde_json::Value) -> Option<String> {
    if let Some(s) = value.as_str() {
        Some(s.to_string())
    } else if value.is_number() {
        Some(value.to_string())
    } else {
        None
    }
}
