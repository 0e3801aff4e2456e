//! Pattern-based string generator.
//!
//! Supports placeholders:
//! - `{index}` - record sequence index

/// Generate a string based on a pattern with placeholders.
pub fn generate_pattern(pattern: &str, index: u32) -> String {
    pattern.replace("{index}", &index.to_string())
}
