//! The in-memory pixel buffer behind the preview and the PNG export.

use egui::{Color32, ColorImage};

/// A square RGBA pixel buffer at `logical_size × scale_factor` physical
/// pixels.
///
/// A surface is always regenerated wholesale by [`crate::render`]; nothing
/// patches it incrementally, which is what makes byte-identical re-renders
/// of the same configuration possible.
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    logical_size: u32,
    scale_factor: u32,
    side: u32,
    pixels: Vec<Color32>,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("logical_size", &self.logical_size)
            .field("scale_factor", &self.scale_factor)
            .field("side", &self.side)
            .finish_non_exhaustive()
    }
}

impl Surface {
    /// Allocates a surface filled with `fill`.
    ///
    /// `scale_factor` of 0 is treated as 1 so a surface always has pixels.
    pub fn new(logical_size: u32, scale_factor: u32, fill: Color32) -> Self {
        let scale_factor = scale_factor.max(1);
        let side = logical_size * scale_factor;
        Self {
            logical_size,
            scale_factor,
            side,
            pixels: vec![fill; (side * side) as usize],
        }
    }

    /// Side length in logical pixels.
    pub fn logical_size(&self) -> u32 {
        self.logical_size
    }

    /// Physical pixels per logical pixel.
    pub fn scale_factor(&self) -> u32 {
        self.scale_factor
    }

    /// Side length in physical pixels.
    pub fn physical_side(&self) -> u32 {
        self.side
    }

    /// Reads one pixel. Out-of-bounds coordinates return transparent black.
    pub fn pixel(&self, x: u32, y: u32) -> Color32 {
        if x >= self.side || y >= self.side {
            return Color32::TRANSPARENT;
        }
        self.pixels[(y * self.side + x) as usize]
    }

    /// Writes one pixel; out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color32) {
        if x < self.side && y < self.side {
            self.pixels[(y * self.side + x) as usize] = color;
        }
    }

    /// Copies the buffer into an egui image for texture upload.
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::new(
            [self.side as usize, self.side as usize],
            self.pixels.clone(),
        )
    }

    /// Flattens the buffer into RGBA bytes for raster encoding.
    pub fn rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&pixel.to_array());
        }
        bytes
    }
}

/// Maps egui's fractional pixels-per-point to the integral scale factor the
/// renderer uses, mirroring the usual `max(1, floor(devicePixelRatio))`
/// canvas handling.
pub fn scale_factor_from_pixels_per_point(pixels_per_point: f32) -> u32 {
    if pixels_per_point.is_finite() && pixels_per_point >= 1.0 {
        pixels_per_point.floor() as u32
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_dimensions() {
        let surface = Surface::new(320, 2, Color32::WHITE);
        assert_eq!(surface.logical_size(), 320);
        assert_eq!(surface.scale_factor(), 2);
        assert_eq!(surface.physical_side(), 640);
        assert_eq!(surface.rgba_bytes().len(), 640 * 640 * 4);
    }

    #[test]
    fn test_zero_scale_factor_is_promoted_to_one() {
        let surface = Surface::new(64, 0, Color32::WHITE);
        assert_eq!(surface.scale_factor(), 1);
        assert_eq!(surface.physical_side(), 64);
    }

    #[test]
    fn test_pixel_read_write() {
        let mut surface = Surface::new(8, 1, Color32::WHITE);
        surface.set_pixel(3, 4, Color32::RED);
        assert_eq!(surface.pixel(3, 4), Color32::RED);
        assert_eq!(surface.pixel(0, 0), Color32::WHITE);
    }

    #[test]
    fn test_out_of_bounds_access_is_safe() {
        let mut surface = Surface::new(8, 1, Color32::WHITE);
        surface.set_pixel(100, 100, Color32::RED);
        assert_eq!(surface.pixel(100, 100), Color32::TRANSPARENT);
    }

    #[test]
    fn test_to_color_image_matches_buffer() {
        let mut surface = Surface::new(4, 1, Color32::WHITE);
        surface.set_pixel(1, 2, Color32::BLACK);
        let image = surface.to_color_image();
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 4);
        assert_eq!(image.pixels[2 * 4 + 1], Color32::BLACK);
    }

    #[test]
    fn test_scale_factor_from_pixels_per_point() {
        assert_eq!(scale_factor_from_pixels_per_point(1.0), 1);
        assert_eq!(scale_factor_from_pixels_per_point(1.5), 1);
        assert_eq!(scale_factor_from_pixels_per_point(2.0), 2);
        assert_eq!(scale_factor_from_pixels_per_point(2.75), 2);
        assert_eq!(scale_factor_from_pixels_per_point(0.5), 1);
        assert_eq!(scale_factor_from_pixels_per_point(f32::NAN), 1);
    }
}
