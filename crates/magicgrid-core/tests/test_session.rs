mod common;

use magicgrid_core::error::MagicGridError;
use magicgrid_core::layout::{DisplaySize, ViewportBounds};
use magicgrid_core::render::{GridSpec, LayerKind, OpacitySpec};
use magicgrid_core::session::{LoadOutcome, Session};

use common::{png_bytes, solid_rgba, solid_source};

fn bounds() -> ViewportBounds {
    ViewportBounds::new(1000.0, 1000.0)
}

fn layer_bytes(session: &Session, kind: LayerKind) -> Vec<u8> {
    session
        .renderer()
        .layer(kind)
        .surface()
        .expect("layer sized")
        .as_raw()
        .clone()
}

#[test]
fn test_fresh_session_shows_drop_target() {
    let session = Session::default();
    assert!(!session.has_image());
    assert!(session.display_size().is_none());
    assert!(!session.renderer().is_initialized());
}

#[test]
fn test_load_fits_and_draws_both_layers() {
    let mut session = Session::new(GridSpec::new(100).unwrap(), OpacitySpec::OPAQUE);
    let ticket = session.begin_load();
    let outcome = session.finish_load(ticket, Ok(solid_source(4000, 2000, [0, 255, 0, 255])), bounds());

    assert_eq!(outcome, LoadOutcome::Displayed(DisplaySize::new(1000.0, 500.0)));
    assert_eq!(session.display_size(), Some(DisplaySize::new(1000.0, 500.0)));
    assert_eq!(session.renderer().layer(LayerKind::Image).dimensions(), Some((1000, 500)));
    assert_eq!(session.renderer().layer(LayerKind::Grid).dimensions(), Some((1000, 500)));

    let composite = session.composite().unwrap();
    assert_eq!(composite.get_pixel(50, 50).0, [0, 255, 0, 255]);
    assert_eq!(composite.get_pixel(100, 50).0, [0x88, 0x88, 0x88, 0xff]);
}

#[test]
fn test_load_bytes_decodes_png() {
    let mut session = Session::default();
    let bytes = png_bytes(&solid_rgba(64, 32, [1, 2, 3, 255]));
    let outcome = session.load_bytes(&bytes, Some("image/png"), bounds());
    assert_eq!(outcome, LoadOutcome::Displayed(DisplaySize::new(64.0, 32.0)));
    assert_eq!(session.image().unwrap().media_type(), "image/png");
}

#[test]
fn test_non_image_file_leaves_state_unchanged() {
    let mut session = Session::default();
    let bytes = png_bytes(&solid_rgba(64, 32, [1, 2, 3, 255]));
    session.load_bytes(&bytes, Some("image/png"), bounds());
    let image_before = layer_bytes(&session, LayerKind::Image);
    let grid_before = layer_bytes(&session, LayerKind::Grid);

    let outcome = session.load_bytes(b"just some notes", Some("text/plain"), bounds());

    assert_eq!(outcome, LoadOutcome::Ignored);
    assert_eq!(session.display_size(), Some(DisplaySize::new(64.0, 32.0)));
    assert_eq!(image_before, layer_bytes(&session, LayerKind::Image));
    assert_eq!(grid_before, layer_bytes(&session, LayerKind::Grid));
}

#[test]
fn test_corrupt_image_is_ignored() {
    let mut session = Session::default();
    let outcome = session.load_bytes(b"\x89PNG\r\n\x1a\nnot really", Some("image/png"), bounds());
    assert_eq!(outcome, LoadOutcome::Ignored);
    assert!(!session.has_image());
}

#[test]
fn test_failed_decode_result_is_ignored() {
    let mut session = Session::default();
    let ticket = session.begin_load();
    let outcome = session.finish_load(ticket, Err(MagicGridError::Decode("truncated".into())), bounds());
    assert_eq!(outcome, LoadOutcome::Ignored);
    assert!(session.display_size().is_none());
}

#[test]
fn test_stale_load_does_not_overwrite_newer() {
    let mut session = Session::default();
    let older = session.begin_load();
    let newer = session.begin_load();
    assert!(newer > older);

    let outcome = session.finish_load(newer, Ok(solid_source(200, 100, [0, 0, 255, 255])), bounds());
    assert_eq!(outcome, LoadOutcome::Displayed(DisplaySize::new(200.0, 100.0)));

    let outcome = session.finish_load(older, Ok(solid_source(50, 50, [255, 0, 0, 255])), bounds());
    assert_eq!(outcome, LoadOutcome::Stale);
    assert_eq!(session.display_size(), Some(DisplaySize::new(200.0, 100.0)));
    assert_eq!(session.image().unwrap().width(), 200);
}

#[test]
fn test_stale_load_dropped_even_if_newer_pending() {
    let mut session = Session::default();
    let older = session.begin_load();
    let _newer = session.begin_load();
    let outcome = session.finish_load(older, Ok(solid_source(50, 50, [255, 0, 0, 255])), bounds());
    assert_eq!(outcome, LoadOutcome::Stale);
    assert!(!session.has_image());
}

#[test]
fn test_opacity_change_redraws_image_only() {
    let mut session = Session::new(GridSpec::new(10).unwrap(), OpacitySpec::OPAQUE);
    let ticket = session.begin_load();
    session.finish_load(ticket, Ok(solid_source(300, 200, [200, 10, 10, 255])), bounds());
    let grid_before = layer_bytes(&session, LayerKind::Grid);
    let size_before = session.display_size();

    assert!(session.set_opacity(OpacitySpec::new(0.25).unwrap()));
    assert!(session.set_opacity(OpacitySpec::new(0.75).unwrap()));

    assert_eq!(grid_before, layer_bytes(&session, LayerKind::Grid));
    assert_eq!(size_before, session.display_size());
    let image = session.renderer().layer(LayerKind::Image).surface().unwrap();
    assert_eq!(image.get_pixel(5, 5).0[3], 191);
}

#[test]
fn test_grid_change_redraws_grid_only() {
    let mut session = Session::new(GridSpec::new(10).unwrap(), OpacitySpec::new(0.5).unwrap());
    let ticket = session.begin_load();
    session.finish_load(ticket, Ok(solid_source(300, 200, [200, 10, 10, 255])), bounds());
    let image_before = layer_bytes(&session, LayerKind::Image);
    let size_before = session.display_size();

    assert!(session.set_grid_spacing(GridSpec::new(1).unwrap()));
    assert!(session.set_grid_spacing(GridSpec::new(1000).unwrap()));

    assert_eq!(image_before, layer_bytes(&session, LayerKind::Image));
    assert_eq!(size_before, session.display_size());
    assert_eq!(session.grid().spacing(), 1000);
}

#[test]
fn test_control_changes_before_load_are_remembered() {
    let mut session = Session::default();
    assert!(!session.set_opacity(OpacitySpec::new(0.5).unwrap()));
    assert!(!session.set_grid_spacing(GridSpec::new(20).unwrap()));

    let ticket = session.begin_load();
    session.finish_load(ticket, Ok(solid_source(100, 100, [0, 0, 0, 255])), bounds());

    let image = session.renderer().layer(LayerKind::Image).surface().unwrap();
    assert_eq!(image.get_pixel(5, 5).0[3], 128);
    let grid = session.renderer().layer(LayerKind::Grid).surface().unwrap();
    assert_eq!(grid.get_pixel(20, 5).0[3], 0xff);
    assert_eq!(grid.get_pixel(10, 5).0[3], 0);
}

#[test]
fn test_new_image_replaces_size() {
    let mut session = Session::default();
    let t1 = session.begin_load();
    session.finish_load(t1, Ok(solid_source(500, 2000, [0, 0, 0, 255])), bounds());
    assert_eq!(session.display_size(), Some(DisplaySize::new(250.0, 1000.0)));

    let t2 = session.begin_load();
    session.finish_load(t2, Ok(solid_source(640, 480, [0, 0, 0, 255])), bounds());
    assert_eq!(session.display_size(), Some(DisplaySize::new(640.0, 480.0)));
    assert_eq!(session.renderer().layer(LayerKind::Grid).dimensions(), Some((640, 480)));
}
