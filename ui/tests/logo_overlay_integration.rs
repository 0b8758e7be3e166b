//! Integration tests for the logo upload, overlay, and staleness guard.

use egui_kittest::Harness;
use kittest::Queryable;
use qrstudio_ui::QrStudioApp;
use qrstudio_ui::state::State;

/// A 1x1 solid red PNG, encoded on the fly.
fn red_png() -> Vec<u8> {
    use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(&[255, 0, 0, 255], 1, 1, ExtendedColorType::Rgba8)
        .expect("encode test png");
    png
}

fn new_harness<'a>() -> Harness<'a, QrStudioApp> {
    let app = QrStudioApp::new(State::default());
    let mut harness = Harness::new_eframe(|_| app);
    for _ in 0..5 {
        harness.step();
    }
    harness
}

/// Steps frames until the decode worker has reported back.
fn wait_for_decode(harness: &mut Harness<'_, QrStudioApp>) {
    for _ in 0..100 {
        harness.step();
        if !harness.state().state.has_pending_decode() {
            return;
        }
        std::thread::sleep(std::time::Duration::from_millis(5));
    }
    panic!("logo decode never completed");
}

#[test]
fn test_uploaded_logo_is_composited_into_the_preview() {
    let mut harness = new_harness();

    harness.state_mut().state.request_logo_decode(red_png());
    wait_for_decode(&mut harness);
    harness.step();

    let app = harness.state();
    assert!(app.state.logo.is_some(), "decode applied");

    let surface = app.surface().expect("surface");
    let center = surface.physical_side() / 2;
    assert_eq!(
        surface.pixel(center, center),
        egui::Color32::from_rgb(255, 0, 0),
        "the logo occupies the center of the QR code"
    );
}

#[test]
fn test_logo_sliders_appear_only_with_logo() {
    let mut harness = new_harness();
    assert!(harness.query_by_label_contains("Logo size").is_none());

    harness.state_mut().state.request_logo_decode(red_png());
    wait_for_decode(&mut harness);
    harness.step();

    assert!(harness.query_by_label_contains("Logo size").is_some());
    assert!(harness.query_by_label_contains("Logo padding").is_some());
    assert!(harness.query_by_label_contains("Logo corner radius").is_some());
}

#[test]
fn test_remove_logo_button_restores_plain_qr() {
    let mut harness = new_harness();

    harness.state_mut().state.request_logo_decode(red_png());
    wait_for_decode(&mut harness);
    harness.step();
    assert!(harness.state().state.logo.is_some());

    let remove_button = harness.query_by_label_contains("Remove logo");
    assert!(remove_button.is_some(), "Remove logo button should be present");
    remove_button.unwrap().click();
    for _ in 0..3 {
        harness.step();
    }

    let app = harness.state();
    assert!(app.state.logo.is_none());
    let surface = app.surface().expect("surface");
    let center = surface.physical_side() / 2;
    assert_ne!(
        surface.pixel(center, center),
        egui::Color32::from_rgb(255, 0, 0),
        "the red logo is gone from the surface"
    );
}

#[test]
fn test_superseded_decode_never_lands() {
    let mut harness = new_harness();

    // Upload, then immediately clear: the clear bumps the generation, so
    // the in-flight decode must be discarded when it completes.
    {
        let state = &mut harness.state_mut().state;
        state.request_logo_decode(red_png());
        state.clear_logo();
    }
    wait_for_decode(&mut harness);
    harness.step();

    assert!(
        harness.state().state.logo.is_none(),
        "stale decode result must not resurrect the logo"
    );
}

#[test]
fn test_non_image_upload_is_skipped() {
    let mut harness = new_harness();

    harness
        .state_mut()
        .state
        .request_logo_decode(b"this is not an image file".to_vec());
    wait_for_decode(&mut harness);
    harness.step();

    let app = harness.state();
    assert!(app.state.logo.is_none(), "overlay silently skipped");
    assert!(app.state.render_error.is_none(), "QR render unaffected");
    assert!(app.has_preview());
}

#[test]
fn test_svg_export_excludes_logo() {
    let mut harness = new_harness();

    harness.state_mut().state.request_logo_decode(red_png());
    wait_for_decode(&mut harness);
    harness.step();

    // The vector document re-encodes the matrix only; the uploaded logo
    // never appears in it.
    let app = harness.state();
    let svg = qrstudio_render::export::render_svg(&app.state.config).expect("svg");
    assert!(!svg.contains("<image"));
    assert!(!svg.contains("data:image"));
}
