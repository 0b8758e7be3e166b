//! Export actions: PNG from the current surface, SVG re-encoded from the
//! configuration snapshot.

use egui::{Button, Ui};

use qrstudio_render::export::{PNG_FILE_NAME, SVG_FILE_NAME, encode_png, render_svg};
use qrstudio_render::{QrConfig, Surface};

use crate::utils::file_save::{SaveOutcome, save_bytes};

/// Renders the download buttons.
///
/// The PNG button is enabled only once a surface exists; it serializes the
/// exact pixels on screen, logo included. The SVG button re-encodes the
/// configuration as it is at click time and never embeds the logo.
pub fn export_actions(config: &QrConfig, surface: Option<&Surface>, ui: &mut Ui) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(surface.is_some(), Button::new("Download PNG"))
            .clicked()
        {
            if let Some(surface) = surface {
                export_png(surface);
            }
        }

        if ui.button("Download SVG").clicked() {
            export_svg(config);
        }
    });
}

fn export_png(surface: &Surface) {
    match encode_png(surface) {
        Ok(bytes) => {
            if let SaveOutcome::Failed(err) = save_bytes(PNG_FILE_NAME, &bytes) {
                log::error!("PNG export failed: {err}");
            }
        }
        Err(err) => log::error!("PNG export failed: {err}"),
    }
}

fn export_svg(config: &QrConfig) {
    match render_svg(config) {
        Ok(svg) => {
            if let SaveOutcome::Failed(err) = save_bytes(SVG_FILE_NAME, svg.as_bytes()) {
                log::error!("SVG export failed: {err}");
            }
        }
        Err(err) => log::error!("SVG export failed: {}", err.user_message()),
    }
}
