//! Shared color constants for the UI.

use egui::Color32;

/// Red color for the inline render-error message.
pub const COLOR_ERROR: Color32 = Color32::from_rgb(220, 53, 69);

/// Muted gray for captions and hints.
pub const COLOR_HINT: Color32 = Color32::from_rgb(140, 140, 140);
