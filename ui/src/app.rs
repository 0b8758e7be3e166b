//! The eframe application shell.

use egui::{RichText, TextureHandle, TextureOptions};

use qrstudio_render::{Surface, render, scale_factor_from_pixels_per_point};

use crate::state::State;
use crate::utils::drop_handler::dropped_file_bytes;
use crate::utils::file_picker::SystemLogoPicker;
use crate::widgets;

/// How soon to repaint while a logo decode is still in flight.
const DECODE_POLL_INTERVAL: std::time::Duration = std::time::Duration::from_millis(50);

pub struct QrStudioApp {
    /// All configuration and logo state. Public so integration tests can
    /// drive the app the way user input would.
    pub state: State,
    picker: SystemLogoPicker,
    preview_texture: Option<TextureHandle>,
    surface: Option<Surface>,
    scale_factor: u32,
}

impl QrStudioApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            picker: SystemLogoPicker,
            preview_texture: None,
            surface: None,
            scale_factor: 0,
        }
    }

    /// The last successfully rendered surface, if any.
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    /// Whether a preview texture has been uploaded yet.
    pub fn has_preview(&self) -> bool {
        self.preview_texture.is_some()
    }

    /// Re-renders the surface and texture when anything changed.
    ///
    /// On encoder failure the previous good preview stays on screen and
    /// the error is surfaced inline instead.
    fn refresh_preview(&mut self, ctx: &egui::Context) {
        let scale = scale_factor_from_pixels_per_point(ctx.pixels_per_point());
        if scale != self.scale_factor {
            self.scale_factor = scale;
            self.state.dirty = true;
        }
        if !self.state.dirty {
            return;
        }
        self.state.dirty = false;

        let logo = self
            .state
            .logo
            .as_ref()
            .map(|image| (image, &self.state.logo_options));

        match render(&self.state.config, logo, scale) {
            Ok(surface) => {
                let image = surface.to_color_image();
                match &mut self.preview_texture {
                    Some(texture) => texture.set(image, TextureOptions::NEAREST),
                    None => {
                        self.preview_texture =
                            Some(ctx.load_texture("qr_preview", image, TextureOptions::NEAREST));
                    }
                }
                self.surface = Some(surface);
                self.state.render_error = None;
            }
            Err(err) => {
                log::warn!("render failed: {err}");
                self.state.render_error = Some(err.user_message());
            }
        }
    }
}

impl eframe::App for QrStudioApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_logo_decodes();
        if self.state.has_pending_decode() {
            ctx.request_repaint_after(DECODE_POLL_INTERVAL);
        }

        if let Some(bytes) = dropped_file_bytes(ctx) {
            self.state.request_logo_decode(bytes);
        }

        self.refresh_preview(ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.label(RichText::new("QR Studio").strong());
                ui.label(
                    RichText::new("Generate a QR code from any text or URL")
                        .small()
                        .color(crate::utils::colors::COLOR_HINT),
                );
            });
        });

        egui::SidePanel::left("control_panel")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(8.0);
                    widgets::control_panel(&mut self.state, &self.picker, ui);
                    ui.add_space(8.0);
                    ui.separator();
                    widgets::export_actions(&self.state.config, self.surface.as_ref(), ui);
                    ui.add_space(8.0);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::preview(
                self.preview_texture.as_ref(),
                self.state.config.size(),
                self.state.render_error.as_deref(),
                ui,
            );
        });
    }
}
