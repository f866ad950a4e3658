/// Strip the `0x` display prefix from a hex string, if present.
pub fn strip_hex_prefix(value: &str) -> &str {
    value.strip_prefix("0x").unwrap_or(value)
}

/// Add the `0x` display prefix to a hex string, if missing.
pub fn ensure_hex_prefix(value: &str) -> String {
    if value.starts_with("0x") {
        value.to_string()
    } else {
        format!("0x{value}")
    }
}
