//! Hex color parsing for UI configuration values
//!
//! Colors are packed as `0xAARRGGBB`, the layout the vendor builders take.
//! Anything that does not parse resolves to fully transparent.

use once_cell::sync::Lazy;
use regex::Regex;

// #RRGGBB or #AARRGGBB
static HEX_COLOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

/// Fully transparent black
pub const TRANSPARENT: u32 = 0x0000_0000;

/// Check whether a string is an accepted hex color
pub fn is_valid_hex_color(value: &str) -> bool {
    HEX_COLOR_REGEX.is_match(value.trim())
}

/// Parse `#RRGGBB` (opaque) or `#AARRGGBB` into a packed ARGB value
pub fn try_parse_hex_color(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    if !HEX_COLOR_REGEX.is_match(trimmed) {
        return None;
    }
    let digits = &trimmed[1..];
    let raw = u32::from_str_radix(digits, 16).ok()?;
    if digits.len() == 6 {
        Some(0xFF00_0000 | raw)
    } else {
        Some(raw)
    }
}

/// Parse an optional color, falling back to [`TRANSPARENT`]
pub fn parse_color(value: Option<&str>) -> u32 {
    value.and_then(try_parse_hex_color).unwrap_or(TRANSPARENT)
}

/// Render a packed color back to `#AARRGGBB`
pub fn format_color(color: u32) -> String {
    format!("#{:08X}", color)
}
