//! The live QR preview.

use egui::{RichText, TextureHandle, Ui};

use crate::utils::colors::{COLOR_ERROR, COLOR_HINT};

/// Shows the rendered QR texture at its logical size, shrunk to fit the
/// available space, with the inline error line underneath when the last
/// render failed.
pub fn preview(
    texture: Option<&TextureHandle>,
    logical_size: u32,
    error: Option<&str>,
    ui: &mut Ui,
) {
    ui.vertical_centered(|ui| {
        match texture {
            Some(texture) => {
                let available = ui.available_size();
                let side = (logical_size as f32)
                    .min(available.x - 16.0)
                    .min(available.y - 48.0)
                    .max(32.0);
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.image(egui::load::SizedTexture::new(texture.id(), [side, side]));
                });
            }
            None => {
                ui.add_space(32.0);
                ui.spinner();
            }
        }

        if let Some(message) = error {
            ui.add_space(4.0);
            ui.colored_label(COLOR_ERROR, message);
        }

        ui.add_space(4.0);
        ui.label(
            RichText::new("Live preview. Adjust settings and download your QR code.")
                .small()
                .color(COLOR_HINT),
        );
    });
}
