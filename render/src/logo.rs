//! Logo overlay data and geometry.
//!
//! The overlay lives only in memory for the session: a decoded RGBA bitmap
//! plus three clamped knobs controlling how it sits on the QR code.

/// Smallest logo box, as a percentage of the QR side.
pub const SCALE_MIN: u32 = 10;
/// Largest logo box, as a percentage of the QR side.
pub const SCALE_MAX: u32 = 40;
/// Largest padding between the box edge and the logo, in logical pixels.
pub const PADDING_MAX: u32 = 16;
/// Largest corner radius of the box, in logical pixels.
pub const RADIUS_MAX: u32 = 24;

/// Default logo box size in percent of the QR side.
pub const DEFAULT_SCALE: u32 = 22;
/// Default padding in logical pixels.
pub const DEFAULT_PADDING: u32 = 8;
/// Default corner radius in logical pixels.
pub const DEFAULT_RADIUS: u32 = 10;

/// How many logical pixels smaller the inner clip radius is than the box
/// radius, so the logo corners stay inside the contrast box.
const INNER_RADIUS_INSET: u32 = 4;

/// The three geometry knobs for the center logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoOptions {
    scale_percent: u32,
    padding_px: u32,
    corner_radius_px: u32,
}

impl Default for LogoOptions {
    fn default() -> Self {
        Self {
            scale_percent: DEFAULT_SCALE,
            padding_px: DEFAULT_PADDING,
            corner_radius_px: DEFAULT_RADIUS,
        }
    }
}

impl LogoOptions {
    /// Box size as a percentage of the QR side.
    pub fn scale_percent(&self) -> u32 {
        self.scale_percent
    }

    /// Sets the box size, clamped to [`SCALE_MIN`]..=[`SCALE_MAX`].
    pub fn set_scale_percent(&mut self, scale: u32) {
        self.scale_percent = scale.clamp(SCALE_MIN, SCALE_MAX);
    }

    /// Padding between the box edge and the logo, in logical pixels.
    pub fn padding_px(&self) -> u32 {
        self.padding_px
    }

    /// Sets the padding, clamped to 0..=[`PADDING_MAX`].
    pub fn set_padding_px(&mut self, padding: u32) {
        self.padding_px = padding.min(PADDING_MAX);
    }

    /// Corner radius of the contrast box, in logical pixels.
    pub fn corner_radius_px(&self) -> u32 {
        self.corner_radius_px
    }

    /// Sets the corner radius, clamped to 0..=[`RADIUS_MAX`].
    pub fn set_corner_radius_px(&mut self, radius: u32) {
        self.corner_radius_px = radius.min(RADIUS_MAX);
    }
}

/// A decoded logo bitmap in RGBA format, 4 bytes per pixel.
#[derive(Clone, PartialEq, Eq)]
pub struct LogoImage {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl std::fmt::Debug for LogoImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogoImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl LogoImage {
    /// Decodes an uploaded file into RGBA pixels.
    ///
    /// Any format the `image` crate understands is accepted; anything else
    /// (including non-image files) returns the decode error for the caller
    /// to log and skip.
    pub fn decode(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let decoded = image::load_from_memory(bytes)?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            width,
            height,
            bytes: rgba.into_raw(),
        })
    }

    /// Builds a logo from raw RGBA bytes. Returns `None` when the byte
    /// count does not match `width × height × 4`.
    pub fn from_rgba(width: u32, height: u32, bytes: Vec<u8>) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        if bytes.len() != (width as usize) * (height as usize) * 4 {
            return None;
        }
        Some(Self {
            width,
            height,
            bytes,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reads one RGBA pixel; coordinates are clamped to the bitmap edge.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let x = x.min(self.width - 1) as usize;
        let y = y.min(self.height - 1) as usize;
        let offset = (y * self.width as usize + x) * 4;
        [
            self.bytes[offset],
            self.bytes[offset + 1],
            self.bytes[offset + 2],
            self.bytes[offset + 3],
        ]
    }
}

/// Placement of the logo box on a QR code, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoGeometry {
    /// Left edge of the contrast box.
    pub box_x: u32,
    /// Top edge of the contrast box.
    pub box_y: u32,
    /// Side length of the square contrast box.
    pub box_side: u32,
    /// Corner radius of the contrast box.
    pub outer_radius: u32,
    /// Left edge of the inner (logo) rectangle.
    pub inner_x: u32,
    /// Top edge of the inner rectangle.
    pub inner_y: u32,
    /// Side length of the inner rectangle; 0 when padding swallows the box.
    pub inner_side: u32,
    /// Corner radius of the inner clip.
    pub inner_radius: u32,
}

impl LogoGeometry {
    /// Computes the centered box for a QR code of side `size`.
    pub fn compute(size: u32, options: &LogoOptions) -> Self {
        let box_side = ((options.scale_percent() as f64 / 100.0) * size as f64).round() as u32;
        let box_side = box_side.min(size);
        let box_x = (size - box_side) / 2;
        let box_y = box_x;

        let padding = options.padding_px();
        // Padding larger than half the box clamps the inner rectangle to 0.
        let inner_side = box_side.saturating_sub(padding * 2);
        let inner_x = box_x + padding;
        let inner_y = box_y + padding;

        Self {
            box_x,
            box_y,
            box_side,
            outer_radius: options.corner_radius_px(),
            inner_x,
            inner_y,
            inner_side,
            inner_radius: options.corner_radius_px().saturating_sub(INNER_RADIUS_INSET),
        }
    }
}
