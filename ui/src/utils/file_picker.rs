//! File picker for selecting a logo image via the native file dialog.
//!
//! The picker returns the raw file bytes; decoding happens on the worker
//! thread behind [`crate::state::State::request_logo_decode`], so a slow or
//! broken file never stalls the UI.
//!
//! # Platform Support
//!
//! - **Native (Windows, macOS, Linux)**: native dialogs via the `rfd` crate.
//! - **Web (WASM)**: not supported (stub implementation); drag-and-drop
//!   covers the upload path there.

/// Trait for the logo picker, enabling mock implementations for testing.
pub trait LogoPicker {
    /// Opens the picker and returns the selected file's raw bytes.
    fn pick_logo(&self) -> Option<Vec<u8>>;
}

/// Default picker using the system file dialog.
#[derive(Default)]
pub struct SystemLogoPicker;

#[cfg(not(target_arch = "wasm32"))]
impl LogoPicker for SystemLogoPicker {
    fn pick_logo(&self) -> Option<Vec<u8>> {
        pick_logo_file()
    }
}

/// Opens a native file dialog filtered to image files and reads the
/// selection.
#[cfg(not(target_arch = "wasm32"))]
pub fn pick_logo_file() -> Option<Vec<u8>> {
    use rfd::FileDialog;

    let file_path = FileDialog::new()
        .add_filter(
            "Image",
            &[
                "png", "jpg", "jpeg", "gif", "bmp", "webp", "ico", "tiff", "tif",
            ],
        )
        .set_title("Select a logo image")
        .pick_file()?;

    log::info!("User selected logo file: {file_path:?}");

    match std::fs::read(&file_path) {
        Ok(bytes) => {
            log::debug!("Read {} bytes from {file_path:?}", bytes.len());
            Some(bytes)
        }
        Err(err) => {
            log::warn!("Failed to read logo file {file_path:?}: {err}");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl LogoPicker for SystemLogoPicker {
    fn pick_logo(&self) -> Option<Vec<u8>> {
        // File picker not supported on WASM; drag-and-drop works instead.
        None
    }
}
