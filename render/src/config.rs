//! QR configuration model.
//!
//! All numeric fields are clamped by their setters, so a [`QrConfig`] is
//! valid by construction and the renderer never has to re-check ranges.

use egui::Color32;

/// Smallest size accepted via direct numeric entry, in logical pixels.
pub const SIZE_MIN: u32 = 64;
/// Largest size accepted via direct numeric entry, in logical pixels.
pub const SIZE_MAX: u32 = 2048;
/// Size slider range; direct entry reaches the wider [`SIZE_MIN`]..[`SIZE_MAX`].
pub const SIZE_SLIDER_MIN: u32 = 128;
/// Upper bound of the size slider.
pub const SIZE_SLIDER_MAX: u32 = 1024;
/// Step used by the size slider and drag field.
pub const SIZE_STEP: u32 = 16;

/// Largest margin accepted via direct numeric entry, in modules.
pub const MARGIN_MAX: u32 = 32;
/// Upper bound of the margin slider.
pub const MARGIN_SLIDER_MAX: u32 = 16;

/// Rendered in place of empty content so the encoder always has a payload.
pub const EMPTY_CONTENT: &str = " ";

/// Default content shown on first launch and after a reset.
pub const DEFAULT_TEXT: &str = "https://example.com";
/// Default QR size in logical pixels.
pub const DEFAULT_SIZE: u32 = 320;
/// Default quiet-zone margin in modules.
pub const DEFAULT_MARGIN: u32 = 4;
/// Default foreground (module) color.
pub const DEFAULT_COLOR_DARK: Color32 = Color32::from_rgb(0x11, 0x11, 0x11);
/// Default background color.
pub const DEFAULT_COLOR_LIGHT: Color32 = Color32::from_rgb(0xff, 0xff, 0xff);

/// QR error-correction level, trading data capacity for damage resilience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EcLevel {
    /// Low — about 7% of the symbol can be restored.
    L,
    /// Medium — about 15%.
    #[default]
    M,
    /// Quartile — about 25%.
    Q,
    /// High — about 30%. Recommended when a logo covers the center.
    H,
}

impl EcLevel {
    /// All levels, in capacity order, for building selectors.
    pub const ALL: [Self; 4] = [Self::L, Self::M, Self::Q, Self::H];

    /// Approximate share of the symbol that can be restored, in percent.
    pub fn recovery_percent(self) -> u8 {
        match self {
            Self::L => 7,
            Self::M => 15,
            Self::Q => 25,
            Self::H => 30,
        }
    }

    /// Human-readable selector label, e.g. `M — Medium (15%)`.
    pub fn label(self) -> &'static str {
        match self {
            Self::L => "L — Low (7%)",
            Self::M => "M — Medium (15%)",
            Self::Q => "Q — Quartile (25%)",
            Self::H => "H — High (30%)",
        }
    }
}

impl std::fmt::Display for EcLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::L => write!(f, "L"),
            Self::M => write!(f, "M"),
            Self::Q => write!(f, "Q"),
            Self::H => write!(f, "H"),
        }
    }
}

impl From<EcLevel> for qrcode::EcLevel {
    fn from(level: EcLevel) -> Self {
        match level {
            EcLevel::L => Self::L,
            EcLevel::M => Self::M,
            EcLevel::Q => Self::Q,
            EcLevel::H => Self::H,
        }
    }
}

/// The full set of parameters controlling QR generation.
///
/// `size` and `margin` are private so every write path goes through the
/// clamping setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrConfig {
    /// Content to encode. May be empty; see [`QrConfig::content`].
    pub text: String,
    size: u32,
    margin: u32,
    /// Error-correction level.
    pub ec_level: EcLevel,
    /// Module (foreground) color.
    pub color_dark: Color32,
    /// Background color.
    pub color_light: Color32,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_owned(),
            size: DEFAULT_SIZE,
            margin: DEFAULT_MARGIN,
            ec_level: EcLevel::default(),
            color_dark: DEFAULT_COLOR_DARK,
            color_light: DEFAULT_COLOR_LIGHT,
        }
    }
}

impl QrConfig {
    /// Output side length in logical pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Sets the size, clamped to [`SIZE_MIN`]..=[`SIZE_MAX`].
    pub fn set_size(&mut self, size: u32) {
        self.size = size.clamp(SIZE_MIN, SIZE_MAX);
    }

    /// Quiet-zone margin in modules.
    pub fn margin(&self) -> u32 {
        self.margin
    }

    /// Sets the margin, clamped to 0..=[`MARGIN_MAX`].
    pub fn set_margin(&mut self, margin: u32) {
        self.margin = margin.min(MARGIN_MAX);
    }

    /// The payload handed to the encoder.
    ///
    /// Empty text is substituted with a single space so the encoder never
    /// fails on a zero-length payload while the user is still typing.
    pub fn content(&self) -> &str {
        if self.text.is_empty() {
            EMPTY_CONTENT
        } else {
            &self.text
        }
    }
}

/// Parses free-form numeric input the way the panel's number fields do:
/// anything that is not a number becomes 0, which the setters then clamp.
pub fn parse_numeric(text: &str) -> u32 {
    text.trim().parse::<u32>().unwrap_or(0)
}
