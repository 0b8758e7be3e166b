//! Hex color parsing and formatting shared by the config model and exports.

use egui::Color32;

/// Parses a `#RRGGBB` hex string (leading `#` optional) into a color.
///
/// Returns `None` for anything that is not exactly six hex digits, so a
/// half-typed value in the hex field leaves the current color untouched.
pub fn parse_hex(text: &str) -> Option<Color32> {
    let digits = text.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

/// Formats a color as lowercase `#rrggbb`, dropping any alpha.
pub fn format_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
