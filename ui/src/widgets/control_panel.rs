//! The control panel: every editable field of the QR configuration.

use egui::{Color32, DragValue, RichText, Slider, SliderClamping, TextEdit, Ui};

use qrstudio_render::color::{format_hex, parse_hex};
use qrstudio_render::{config, logo};

use crate::state::State;
use crate::utils::colors::COLOR_HINT;
use crate::utils::file_picker::LogoPicker;

/// Renders all configuration controls, writing through the clamping
/// setters and flagging the state dirty on any change.
pub fn control_panel(state: &mut State, picker: &dyn LogoPicker, ui: &mut Ui) {
    content_field(state, ui);
    ui.add_space(8.0);
    size_field(state, ui);
    ui.add_space(8.0);
    margin_field(state, ui);
    ui.add_space(8.0);
    level_field(state, ui);
    ui.add_space(8.0);
    color_fields(state, ui);
    ui.add_space(8.0);
    logo_fields(state, picker, ui);
    ui.add_space(12.0);

    if ui.button("Reset").clicked() {
        state.reset();
    }
}

fn content_field(state: &mut State, ui: &mut Ui) {
    ui.label("Content (URL or text)");
    let response = ui.add(
        TextEdit::singleline(&mut state.config.text)
            .hint_text("https://your-link.com or any text")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        state.dirty = true;
    }
}

fn size_field(state: &mut State, ui: &mut Ui) {
    ui.label(format!("Size: {}px", state.config.size()));
    let mut size = state.config.size();
    let changed = ui
        .horizontal(|ui| {
            // The slider covers the comfortable range; the drag field
            // reaches the full bounds.
            let slider = ui.add(
                Slider::new(&mut size, config::SIZE_SLIDER_MIN..=config::SIZE_SLIDER_MAX)
                    .step_by(config::SIZE_STEP as f64)
                    .clamping(SliderClamping::Edits)
                    .show_value(false),
            );
            let drag = ui.add(
                DragValue::new(&mut size)
                    .range(config::SIZE_MIN..=config::SIZE_MAX)
                    .speed(config::SIZE_STEP)
                    .suffix("px"),
            );
            slider.changed() || drag.changed()
        })
        .inner;
    if changed {
        state.config.set_size(size);
        state.dirty = true;
    }
}

fn margin_field(state: &mut State, ui: &mut Ui) {
    ui.label(format!("Margin: {}", state.config.margin()));
    let mut margin = state.config.margin();
    let changed = ui
        .horizontal(|ui| {
            let slider = ui.add(
                Slider::new(&mut margin, 0..=config::MARGIN_SLIDER_MAX)
                    .clamping(SliderClamping::Edits)
                    .show_value(false),
            );
            let drag = ui.add(DragValue::new(&mut margin).range(0..=config::MARGIN_MAX));
            slider.changed() || drag.changed()
        })
        .inner;
    if changed {
        state.config.set_margin(margin);
        state.dirty = true;
    }
}

fn level_field(state: &mut State, ui: &mut Ui) {
    let mut changed = false;
    egui::ComboBox::from_label("Error correction")
        .selected_text(state.config.ec_level.label())
        .show_ui(ui, |ui| {
            for level in qrstudio_render::EcLevel::ALL {
                changed |= ui
                    .selectable_value(&mut state.config.ec_level, level, level.label())
                    .changed();
            }
        });
    if changed {
        state.dirty = true;
    }
    ui.label(
        RichText::new("Higher levels tolerate more obstruction. Use Q or H if you add a logo.")
            .small()
            .color(COLOR_HINT),
    );
}

fn color_fields(state: &mut State, ui: &mut Ui) {
    ui.label("Colors");
    ui.horizontal(|ui| {
        let mut dark = state.config.color_dark;
        if color_field(ui, "Foreground", &mut dark, &mut state.dark_hex) {
            state.config.color_dark = dark;
            state.dirty = true;
        }
        ui.add_space(12.0);
        let mut light = state.config.color_light;
        if color_field(ui, "Background", &mut light, &mut state.light_hex) {
            state.config.color_light = light;
            state.dirty = true;
        }
    });
    ui.label(
        RichText::new("Dark foreground on light background typically scans best.")
            .small()
            .color(COLOR_HINT),
    );
}

/// One color control: a picker button plus a hex field sharing the value.
///
/// Invalid hex leaves the color untouched until the text parses again.
fn color_field(ui: &mut Ui, label: &str, color: &mut Color32, hex: &mut String) -> bool {
    let mut changed = false;
    ui.vertical(|ui| {
        ui.label(label);
        ui.horizontal(|ui| {
            let mut rgb = [color.r(), color.g(), color.b()];
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                *color = Color32::from_rgb(rgb[0], rgb[1], rgb[2]);
                *hex = format_hex(*color);
                changed = true;
            }
            let response = ui.add(TextEdit::singleline(hex).desired_width(72.0));
            if response.changed() {
                if let Some(parsed) = parse_hex(hex) {
                    *color = parsed;
                    changed = true;
                }
            }
        });
    });
    changed
}

fn logo_fields(state: &mut State, picker: &dyn LogoPicker, ui: &mut Ui) {
    ui.label("Center logo (optional)");
    ui.horizontal(|ui| {
        if ui.button("Upload logo…").clicked() {
            match picker.pick_logo() {
                Some(bytes) => state.request_logo_decode(bytes),
                None => log::debug!("logo selection cancelled"),
            }
        }
        if state.logo.is_some() && ui.button("Remove logo").clicked() {
            state.clear_logo();
        }
    });

    if state.logo.is_none() {
        ui.label(
            RichText::new("You can also drop an image file onto the window.")
                .small()
                .color(COLOR_HINT),
        );
        return;
    }

    ui.group(|ui| {
        let mut scale = state.logo_options.scale_percent();
        if ui
            .add(Slider::new(&mut scale, logo::SCALE_MIN..=logo::SCALE_MAX).text("Logo size (%)"))
            .changed()
        {
            state.logo_options.set_scale_percent(scale);
            state.dirty = true;
        }

        let mut padding = state.logo_options.padding_px();
        if ui
            .add(Slider::new(&mut padding, 0..=logo::PADDING_MAX).text("Logo padding (px)"))
            .changed()
        {
            state.logo_options.set_padding_px(padding);
            state.dirty = true;
        }

        let mut radius = state.logo_options.corner_radius_px();
        if ui
            .add(Slider::new(&mut radius, 0..=logo::RADIUS_MAX).text("Logo corner radius (px)"))
            .changed()
        {
            state.logo_options.set_corner_radius_px(radius);
            state.dirty = true;
        }
    });
}
