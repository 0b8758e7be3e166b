//! Pure rendering layer for QR Studio.
//!
//! Everything in this crate is a plain function of its inputs: a validated
//! [`QrConfig`], optional logo data, and a scale factor go in; a pixel
//! [`Surface`] or an export payload comes out. The UI crate owns all
//! interaction and re-invokes these functions whenever anything changes.

#![warn(clippy::all, rust_2018_idioms)]

pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod logo;
pub mod render;
pub mod surface;

pub use config::{EcLevel, QrConfig};
pub use error::{RenderError, Result};
pub use logo::{LogoGeometry, LogoImage, LogoOptions};
pub use render::render;
pub use surface::{Surface, scale_factor_from_pixels_per_point};
