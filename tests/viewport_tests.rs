// Host-side tests for sizing the render surface to the window.

use tars_web::constants::MAX_PIXEL_RATIO;
use tars_web::core::*;

#[test]
fn css_size_is_the_window_size() {
    let size = surface_size(1280.0, 720.0, 1.0, MAX_PIXEL_RATIO);
    assert_eq!((size.css_width, size.css_height), (1280, 720));
    assert_eq!((size.backing_width, size.backing_height), (1280, 720));
}

#[test]
fn backing_store_scales_with_capped_pixel_ratio() {
    let retina = surface_size(800.0, 600.0, 1.5, MAX_PIXEL_RATIO);
    assert_eq!((retina.backing_width, retina.backing_height), (1200, 900));

    let dense = surface_size(800.0, 600.0, 3.0, MAX_PIXEL_RATIO);
    assert_eq!((dense.backing_width, dense.backing_height), (1600, 1200));
    assert_eq!((dense.css_width, dense.css_height), (800, 600));
}

#[test]
fn camera_aspect_follows_window_shape() {
    // a canvas with no page CSS would report 300x150; the window decides here
    for (w, h) in [(1920.0, 1080.0), (390.0, 844.0), (1000.0, 1000.0)] {
        let size = surface_size(w, h, 2.0, MAX_PIXEL_RATIO);
        let mut cam = Camera::default();
        cam.set_viewport(size.css_width, size.css_height);
        assert!((cam.aspect - w / h).abs() < 1e-5, "{w}x{h}");
    }
}

#[test]
fn degenerate_window_keeps_a_drawable_surface() {
    let size = surface_size(0.0, 0.0, 2.0, MAX_PIXEL_RATIO);
    assert_eq!((size.css_width, size.css_height), (0, 0));
    assert_eq!((size.backing_width, size.backing_height), (1, 1));

    let mut cam = Camera::default();
    cam.set_viewport(1600, 900);
    cam.set_viewport(size.css_width, size.css_height);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
}

#[test]
fn invalid_pixel_ratio_falls_back_to_one() {
    for dpr in [0.0, -1.0, f64::NAN] {
        let size = surface_size(640.0, 480.0, dpr, MAX_PIXEL_RATIO);
        assert_eq!((size.backing_width, size.backing_height), (640, 480));
    }
}
