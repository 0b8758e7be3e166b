//! Error types for the rendering layer.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Failures produced while rendering or exporting a QR code.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The encoder rejected the content, typically because it does not fit
    /// the selected error-correction level.
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    /// PNG serialization failed.
    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

impl RenderError {
    /// True when the content simply does not fit at the requested level.
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::Encode(qrcode::types::QrError::DataTooLong))
    }

    /// A short message suitable for the inline error line in the preview.
    pub fn user_message(&self) -> String {
        if self.is_capacity() {
            "Content is too long for the selected error-correction level. \
             Shorten the text or lower the level."
                .to_owned()
        } else {
            self.to_string()
        }
    }
}
