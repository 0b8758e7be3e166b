//! Saving export payloads through the native save dialog.

/// Outcome of a save attempt, mostly for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The payload was written to the chosen path.
    Saved,
    /// The user dismissed the dialog; not an error.
    Cancelled,
    /// The dialog succeeded but writing failed.
    Failed(String),
}

/// Offers a save dialog pre-filled with `file_name` and writes `bytes` to
/// the chosen location.
///
/// The payload is complete before this is called; a cancelled or failed
/// save leaves no partial file behind and mutates no state.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_bytes(file_name: &str, bytes: &[u8]) -> SaveOutcome {
    use rfd::FileDialog;

    let Some(path) = FileDialog::new()
        .set_file_name(file_name)
        .set_title("Save as")
        .save_file()
    else {
        log::debug!("save of {file_name} cancelled");
        return SaveOutcome::Cancelled;
    };

    match std::fs::write(&path, bytes) {
        Ok(()) => {
            log::info!("saved {} bytes to {path:?}", bytes.len());
            SaveOutcome::Saved
        }
        Err(err) => {
            log::error!("failed to save {path:?}: {err}");
            SaveOutcome::Failed(err.to_string())
        }
    }
}

/// Saving through a dialog is not available on wasm.
#[cfg(target_arch = "wasm32")]
pub fn save_bytes(file_name: &str, _bytes: &[u8]) -> SaveOutcome {
    log::warn!("file save is not supported on web builds ({file_name})");
    SaveOutcome::Failed("file save is not supported on web builds".to_owned())
}
