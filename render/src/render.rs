//! QR rasterization and logo compositing.

use egui::Color32;
use qrcode::QrCode;

use crate::config::QrConfig;
use crate::error::Result;
use crate::logo::{LogoGeometry, LogoImage, LogoOptions};
use crate::surface::Surface;

/// Renders the configuration into a fresh pixel surface.
///
/// The surface is `config.size() × scale_factor` physical pixels. Modules
/// are painted by nearest-module sampling over `modules + 2 × margin`
/// cells, so the output always has the exact requested dimensions. When a
/// logo is supplied it is composited into the same pixels, centered on a
/// white rounded-rectangle contrast box.
pub fn render(
    config: &QrConfig,
    logo: Option<(&LogoImage, &LogoOptions)>,
    scale_factor: u32,
) -> Result<Surface> {
    let code = QrCode::with_error_correction_level(config.content(), config.ec_level.into())?;
    let modules = code.width();
    let colors = code.to_colors();

    let margin = config.margin() as usize;
    let total = modules + margin * 2;

    let mut surface = Surface::new(config.size(), scale_factor, config.color_light);
    let side = surface.physical_side() as usize;

    for y in 0..side {
        let cell_y = y * total / side;
        let row = cell_y
            .checked_sub(margin)
            .filter(|my| *my < modules)
            .map(|my| &colors[my * modules..(my + 1) * modules]);
        let Some(row) = row else {
            continue; // quiet zone row, already background
        };

        for x in 0..side {
            let cell_x = x * total / side;
            let dark = cell_x
                .checked_sub(margin)
                .filter(|mx| *mx < modules)
                .is_some_and(|mx| row[mx] == qrcode::Color::Dark);
            if dark {
                surface.set_pixel(x as u32, y as u32, config.color_dark);
            }
        }
    }

    if let Some((image, options)) = logo {
        composite_logo(&mut surface, image, options);
    }

    Ok(surface)
}

/// Draws the contrast box and the clipped logo onto the surface.
fn composite_logo(surface: &mut Surface, logo: &LogoImage, options: &LogoOptions) {
    let geometry = LogoGeometry::compute(surface.logical_size(), options);
    let scale = surface.scale_factor() as f32;

    // Contrast box, physical pixels.
    let box_x = geometry.box_x as f32 * scale;
    let box_y = geometry.box_y as f32 * scale;
    let box_side = geometry.box_side as f32 * scale;
    let outer_radius = geometry.outer_radius as f32 * scale;

    fill_rounded_rect(surface, box_x, box_y, box_side, box_side, outer_radius, |_, _| {
        Color32::WHITE
    });

    if geometry.inner_side == 0 {
        return; // padding swallowed the box; nothing visible to draw
    }

    let inner_x = geometry.inner_x as f32 * scale;
    let inner_y = geometry.inner_y as f32 * scale;
    let inner_side = geometry.inner_side as f32 * scale;
    let inner_radius = geometry.inner_radius as f32 * scale;

    fill_rounded_rect(
        surface,
        inner_x,
        inner_y,
        inner_side,
        inner_side,
        inner_radius,
        |u, v| {
            // Nearest sampling, stretched to fill the inner rectangle.
            let sx = (u * logo.width() as f32) as u32;
            let sy = (v * logo.height() as f32) as u32;
            let rgba = logo.pixel(sx, sy);
            blend_over(Color32::WHITE, rgba)
        },
    );
}

/// Paints every pixel whose center lies inside the rounded rectangle,
/// asking `shade` for the color at normalized coordinates within the rect.
fn fill_rounded_rect(
    surface: &mut Surface,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    radius: f32,
    shade: impl Fn(f32, f32) -> Color32,
) {
    let radius = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    let side = surface.physical_side();

    let x0 = x.floor().max(0.0) as u32;
    let y0 = y.floor().max(0.0) as u32;
    let x1 = ((x + w).ceil() as u32).min(side);
    let y1 = ((y + h).ceil() as u32).min(side);

    for py in y0..y1 {
        for px in x0..x1 {
            let cx = px as f32 + 0.5;
            let cy = py as f32 + 0.5;
            if !inside_rounded_rect(cx, cy, x, y, w, h, radius) {
                continue;
            }
            let u = ((cx - x) / w).clamp(0.0, 1.0);
            let v = ((cy - y) / h).clamp(0.0, 1.0);
            surface.set_pixel(px, py, shade(u, v));
        }
    }
}

/// Point-in-rounded-rectangle test against pixel centers.
fn inside_rounded_rect(cx: f32, cy: f32, x: f32, y: f32, w: f32, h: f32, radius: f32) -> bool {
    if cx < x || cy < y || cx >= x + w || cy >= y + h {
        return false;
    }
    if radius <= 0.0 {
        return true;
    }

    // Distance check only matters inside the four corner squares.
    let left = x + radius;
    let right = x + w - radius;
    let top = y + radius;
    let bottom = y + h - radius;

    let corner_x = if cx < left {
        left
    } else if cx > right {
        right
    } else {
        return true;
    };
    let corner_y = if cy < top {
        top
    } else if cy > bottom {
        bottom
    } else {
        return true;
    };

    let dx = cx - corner_x;
    let dy = cy - corner_y;
    dx * dx + dy * dy <= radius * radius
}

/// Source-over blend of an RGBA sample onto an opaque backdrop.
fn blend_over(backdrop: Color32, src: [u8; 4]) -> Color32 {
    let alpha = src[3] as u32;
    if alpha == 255 {
        return Color32::from_rgb(src[0], src[1], src[2]);
    }
    if alpha == 0 {
        return backdrop;
    }

    let inv = 255 - alpha;
    let channel = |s: u8, d: u8| ((s as u32 * alpha + d as u32 * inv + 127) / 255) as u8;
    Color32::from_rgb(
        channel(src[0], backdrop.r()),
        channel(src[1], backdrop.g()),
        channel(src[2], backdrop.b()),
    )
}
