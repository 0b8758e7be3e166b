//! Application state: the configuration, the logo, and the decode channel.

use qrstudio_render::color::format_hex;
use qrstudio_render::{LogoImage, LogoOptions, QrConfig};

/// Completed logo decode, stamped with the generation token captured when
/// the request was submitted.
#[derive(Debug)]
pub struct LogoDecodeResult {
    /// Token captured at request time.
    pub generation: u64,
    /// The decoded bitmap, or the decode failure to log and skip.
    pub result: Result<LogoImage, image::ImageError>,
}

/// Sender half of the logo decode channel.
pub type LogoResultSender = flume::Sender<LogoDecodeResult>;
/// Receiver half of the logo decode channel.
pub type LogoResultReceiver = flume::Receiver<LogoDecodeResult>;

/// Creates the channel the decode worker reports back on.
pub fn create_logo_channel() -> (LogoResultSender, LogoResultReceiver) {
    flume::unbounded()
}

/// The main application state.
///
/// Everything is owned here for the lifetime of the app; nothing is
/// persisted. The only concurrency is the logo decode worker, which
/// reports back over the channel and is checked for staleness against
/// `generation`.
pub struct State {
    /// The QR configuration driving the preview.
    pub config: QrConfig,
    /// Geometry knobs for the logo overlay.
    pub logo_options: LogoOptions,
    /// The decoded logo, if one was uploaded this session.
    pub logo: Option<LogoImage>,
    /// Set whenever anything render-relevant changed; cleared after render.
    pub dirty: bool,
    /// Inline message shown when the encoder rejects the configuration.
    pub render_error: Option<String>,
    /// Edit buffer for the foreground hex field.
    pub dark_hex: String,
    /// Edit buffer for the background hex field.
    pub light_hex: String,
    generation: u64,
    pending_decodes: usize,
    logo_tx: LogoResultSender,
    logo_rx: LogoResultReceiver,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Creates the initial state with documented defaults and a dirty flag
    /// so the first frame renders.
    pub fn new() -> Self {
        let config = QrConfig::default();
        let (logo_tx, logo_rx) = create_logo_channel();
        let dark_hex = format_hex(config.color_dark);
        let light_hex = format_hex(config.color_light);
        Self {
            config,
            logo_options: LogoOptions::default(),
            logo: None,
            dirty: true,
            render_error: None,
            dark_hex,
            light_hex,
            generation: 0,
            pending_decodes: 0,
            logo_tx,
            logo_rx,
        }
    }

    /// The current generation token.
    ///
    /// Every logo request captures the token at submission; bumping it
    /// (new upload, clear, reset) invalidates whatever is still in flight.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Submits uploaded file bytes for decoding off the UI thread.
    ///
    /// The result arrives through [`State::poll_logo_decodes`]; a request
    /// superseded before its decode finishes is silently discarded there.
    pub fn request_logo_decode(&mut self, bytes: Vec<u8>) {
        self.generation += 1;
        self.pending_decodes += 1;
        let generation = self.generation;
        log::debug!(
            "submitting logo decode: {} bytes, generation {generation}",
            bytes.len()
        );

        #[cfg(not(target_arch = "wasm32"))]
        {
            let tx = self.logo_tx.clone();
            std::thread::spawn(move || {
                let result = LogoImage::decode(&bytes);
                let _ = tx.send(LogoDecodeResult { generation, result });
            });
        }

        // No threads on wasm; decode inline but keep the same channel path
        // so staleness handling stays identical.
        #[cfg(target_arch = "wasm32")]
        {
            let result = LogoImage::decode(&bytes);
            let _ = self.logo_tx.send(LogoDecodeResult { generation, result });
        }
    }

    /// Drains completed decodes, applying the ones that are still current.
    ///
    /// Returns true when a logo was applied (the preview must re-render).
    pub fn poll_logo_decodes(&mut self) -> bool {
        let mut applied = false;
        let completed: Vec<LogoDecodeResult> = self.logo_rx.try_iter().collect();
        for message in completed {
            self.pending_decodes = self.pending_decodes.saturating_sub(1);
            if message.generation != self.generation {
                log::debug!(
                    "discarding stale logo decode: generation {} superseded by {}",
                    message.generation,
                    self.generation
                );
                continue;
            }
            match message.result {
                Ok(image) => {
                    log::info!("logo decoded: {}x{}", image.width(), image.height());
                    self.logo = Some(image);
                    self.dirty = true;
                    applied = true;
                }
                Err(err) => {
                    log::warn!("logo decode failed, overlay skipped: {err}");
                }
            }
        }
        applied
    }

    /// True while a decode request has not reported back yet; the app keeps
    /// scheduling repaints so the result is picked up promptly.
    pub fn has_pending_decode(&self) -> bool {
        self.pending_decodes > 0
    }

    /// Removes the logo and invalidates any decode still in flight.
    pub fn clear_logo(&mut self) {
        self.generation += 1;
        if self.logo.take().is_some() {
            self.dirty = true;
        }
    }

    /// Restores every field to the documented defaults and clears the logo.
    pub fn reset(&mut self) {
        self.config = QrConfig::default();
        self.logo_options = LogoOptions::default();
        self.generation += 1;
        self.logo = None;
        self.render_error = None;
        self.sync_hex_from_colors();
        self.dirty = true;
    }

    /// Refreshes the hex edit buffers after the colors changed elsewhere
    /// (color button, reset).
    pub fn sync_hex_from_colors(&mut self) {
        self.dark_hex = format_hex(self.config.color_dark);
        self.light_hex = format_hex(self.config.color_light);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrstudio_render::EcLevel;

    fn test_png() -> Vec<u8> {
        use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};
        let mut png = Vec::new();
        PngEncoder::new(&mut png)
            .write_image(&[0, 128, 255, 255], 1, 1, ExtendedColorType::Rgba8)
            .expect("encode test png");
        png
    }

    #[test]
    fn test_initial_state() {
        let state = State::new();
        assert_eq!(state.config, QrConfig::default());
        assert!(state.logo.is_none());
        assert!(state.dirty, "first frame must render");
        assert!(state.render_error.is_none());
        assert_eq!(state.dark_hex, "#111111");
        assert_eq!(state.light_hex, "#ffffff");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = State::new();
        state.config.text = "changed".to_owned();
        state.config.set_size(1024);
        state.config.set_margin(12);
        state.config.ec_level = EcLevel::H;
        state.logo_options.set_scale_percent(40);
        state.logo = LogoImage::from_rgba(1, 1, vec![0, 0, 0, 255]);
        state.render_error = Some("old error".to_owned());
        state.dark_hex = "#000000".to_owned();

        state.reset();

        assert_eq!(state.config, QrConfig::default());
        assert_eq!(state.config.text, "https://example.com");
        assert_eq!(state.config.size(), 320);
        assert_eq!(state.config.margin(), 4);
        assert_eq!(state.config.ec_level, EcLevel::M);
        assert_eq!(state.logo_options, LogoOptions::default());
        assert!(state.logo.is_none());
        assert!(state.render_error.is_none());
        assert_eq!(state.dark_hex, "#111111");
        assert!(state.dirty);
    }

    #[test]
    fn test_decode_request_round_trip() {
        let mut state = State::new();
        state.request_logo_decode(test_png());

        // The worker thread is quick for a 1x1 image, but give it time.
        let mut applied = false;
        for _ in 0..100 {
            if state.poll_logo_decodes() {
                applied = true;
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        assert!(applied, "decode result should arrive and apply");
        let logo = state.logo.as_ref().expect("logo set");
        assert_eq!(logo.width(), 1);
        assert_eq!(logo.height(), 1);
        assert!(state.dirty);
    }

    #[test]
    fn test_stale_decode_is_discarded() {
        let mut state = State::new();

        // A result stamped with an outdated generation must never apply,
        // no matter when it arrives.
        let stale = LogoDecodeResult {
            generation: state.generation(),
            result: Ok(LogoImage::from_rgba(1, 1, vec![0, 0, 0, 255]).expect("logo")),
        };
        state.clear_logo(); // bumps the generation
        state.logo_tx.send(stale).expect("send");

        assert!(!state.poll_logo_decodes());
        assert!(state.logo.is_none());
    }

    #[test]
    fn test_clear_invalidates_inflight_decode() {
        let mut state = State::new();
        state.request_logo_decode(test_png());
        state.clear_logo();

        // Wait for the worker to finish, then confirm its result is dropped.
        std::thread::sleep(std::time::Duration::from_millis(100));
        assert!(!state.poll_logo_decodes());
        assert!(state.logo.is_none());
    }

    #[test]
    fn test_failed_decode_is_skipped() {
        let mut state = State::new();
        state.request_logo_decode(b"not an image".to_vec());

        std::thread::sleep(std::time::Duration::from_millis(100));
        assert!(!state.poll_logo_decodes());
        assert!(state.logo.is_none());
        assert!(state.render_error.is_none(), "decode failure is not a render error");
    }

    #[test]
    fn test_pending_decode_flag_tracks_worker() {
        let mut state = State::new();
        assert!(!state.has_pending_decode());

        state.request_logo_decode(test_png());
        assert!(state.has_pending_decode());

        for _ in 0..100 {
            if state.poll_logo_decodes() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        assert!(!state.has_pending_decode());
    }

    #[test]
    fn test_clear_logo_marks_dirty_only_when_present() {
        let mut state = State::new();
        state.dirty = false;

        state.clear_logo();
        assert!(!state.dirty, "clearing nothing changes nothing");

        state.logo = LogoImage::from_rgba(1, 1, vec![0, 0, 0, 255]);
        state.clear_logo();
        assert!(state.dirty);
    }
}
