//! Export serialization: PNG bytes from a surface, SVG text from a config.

use std::fmt::Write as _;

use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};
use qrcode::QrCode;

use crate::color::format_hex;
use crate::config::QrConfig;
use crate::error::Result;
use crate::surface::Surface;

/// Default file name offered by the raster export dialog.
pub const PNG_FILE_NAME: &str = "qr-code.png";
/// Default file name offered by the vector export dialog.
pub const SVG_FILE_NAME: &str = "qr-code.svg";

/// MIME type of the raster export.
pub const PNG_MIME: &str = "image/png";
/// MIME type of the vector export.
pub const SVG_MIME: &str = "image/svg+xml";

/// Serializes the rendered surface to a complete PNG byte stream.
///
/// The surface already contains the logo overlay when one was drawn, so
/// the raster export includes it for free.
pub fn encode_png(surface: &Surface) -> Result<Vec<u8>> {
    let side = surface.physical_side();
    let bytes = surface.rgba_bytes();

    let mut out = Vec::new();
    PngEncoder::new(&mut out).write_image(&bytes, side, side, ExtendedColorType::Rgba8)?;
    Ok(out)
}

/// Re-encodes the configuration as a self-contained SVG document.
///
/// The document carries one background rect and one path of dark modules in
/// a `modules + 2 × margin` viewBox, scaled to `size` CSS pixels. The logo
/// overlay is deliberately absent: vector export only encodes the QR
/// matrix.
pub fn render_svg(config: &QrConfig) -> Result<String> {
    let code = QrCode::with_error_correction_level(config.content(), config.ec_level.into())?;
    let modules = code.width();
    let colors = code.to_colors();

    let margin = config.margin() as usize;
    let total = modules + margin * 2;
    let size = config.size();

    let mut path = String::new();
    for (index, color) in colors.iter().enumerate() {
        if *color != qrcode::Color::Dark {
            continue;
        }
        let x = index % modules + margin;
        let y = index / modules + margin;
        let _ = write!(path, "M{x} {y}h1v1h-1z");
    }

    let dark = format_hex(config.color_dark);
    let light = format_hex(config.color_light);

    Ok(format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" "#,
            r#"viewBox="0 0 {total} {total}" shape-rendering="crispEdges">"#,
            r#"<rect width="100%" height="100%" fill="{light}"/>"#,
            r#"<path fill="{dark}" d="{path}"/>"#,
            "</svg>\n",
        ),
        size = size,
        total = total,
        light = light,
        dark = dark,
        path = path,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EcLevel;
    use crate::logo::{LogoImage, LogoOptions};
    use crate::render::render;

    #[test]
    fn test_png_export_is_a_decodable_image() {
        let config = QrConfig::default();
        let surface = render(&config, None, 2).expect("render");

        let png = encode_png(&surface).expect("encode");
        let decoded = image::load_from_memory(&png).expect("png must decode");
        assert_eq!(decoded.width(), 640);
        assert_eq!(decoded.height(), 640);
    }

    #[test]
    fn test_png_export_includes_logo_pixels() {
        let mut config = QrConfig::default();
        config.set_size(320);
        let logo =
            LogoImage::from_rgba(1, 1, vec![255, 0, 0, 255]).expect("logo");
        let options = LogoOptions::default();
        let surface = render(&config, Some((&logo, &options)), 1).expect("render");

        let png = encode_png(&surface).expect("encode");
        let decoded = image::load_from_memory(&png).expect("decode").to_rgba8();
        assert_eq!(decoded.get_pixel(160, 160).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_svg_carries_dimensions_and_colors() {
        let mut config = QrConfig::default();
        config.set_size(512);

        let svg = render_svg(&config).expect("svg");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="512""#));
        assert!(svg.contains(r#"height="512""#));
        assert!(svg.contains("#111111"));
        assert!(svg.contains("#ffffff"));
        assert!(svg.contains("<path"));
    }

    #[test]
    fn test_svg_viewbox_includes_margin() {
        let mut config = QrConfig::default();
        config.text = "margin probe".to_owned();
        config.set_margin(0);
        let bare = render_svg(&config).expect("svg");

        config.set_margin(4);
        let padded = render_svg(&config).expect("svg");

        // Same content, so the padded viewBox is exactly 8 modules wider.
        let viewbox = |svg: &str| -> u32 {
            let start = svg.find("viewBox=\"0 0 ").expect("viewBox") + 13;
            let rest = &svg[start..];
            let end = rest.find(' ').expect("separator");
            rest[..end].parse().expect("number")
        };
        assert_eq!(viewbox(&padded), viewbox(&bare) + 8);
    }

    #[test]
    fn test_svg_never_embeds_a_logo() {
        // The signature alone guarantees it, but the document must also be
        // free of raster payloads.
        let svg = render_svg(&QrConfig::default()).expect("svg");
        assert!(!svg.contains("<image"));
        assert!(!svg.contains("data:image"));
    }

    #[test]
    fn test_svg_oversized_content_errors() {
        let mut config = QrConfig::default();
        config.ec_level = EcLevel::H;
        config.text = "a".repeat(2000);
        assert!(render_svg(&config).expect_err("must not fit").is_capacity());
    }

    #[test]
    fn test_svg_is_stable_for_identical_config() {
        let config = QrConfig::default();
        assert_eq!(
            render_svg(&config).expect("svg"),
            render_svg(&config).expect("svg")
        );
    }
}
