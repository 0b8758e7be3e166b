//! Drag-and-drop support for supplying a logo image.
//!
//! Dropped files reuse the upload decode path: the handler only extracts
//! raw bytes, and [`crate::state::State::request_logo_decode`] decides off
//! the UI thread whether they are actually an image.

/// Returns the bytes of the first file dropped onto the window this frame.
pub fn dropped_file_bytes(ctx: &egui::Context) -> Option<Vec<u8>> {
    let dropped_files = ctx.input(|i| i.raw.dropped_files.clone());
    if dropped_files.is_empty() {
        return None;
    }

    log::trace!("dropped_files={}", dropped_files.len());

    // Only the first dropped file counts; a new drop replaces the logo.
    for file in &dropped_files {
        if let Some(bytes) = &file.bytes {
            log::debug!("dropped file {} carries {} bytes", file.name, bytes.len());
            return Some(bytes.to_vec());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(path) = &file.path {
            match std::fs::read(path) {
                Ok(bytes) => {
                    log::debug!("read dropped file {path:?}: {} bytes", bytes.len());
                    return Some(bytes);
                }
                Err(err) => {
                    log::warn!("failed to read dropped file {path:?}: {err}");
                }
            }
        }
    }

    None
}
