use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn matching_aspect_scales_without_crop() {
    let fit = CoverFit::compute(960, 540, 1920, 1080);
    assert!(approx(fit.scale, 2.0));
    assert!(approx(fit.offset.x, 0.0));
    assert!(approx(fit.offset.y, 0.0));
}

#[test]
fn tall_frame_crops_top_and_bottom_equally() {
    let fit = CoverFit::compute(1000, 1000, 1920, 1080);
    assert!(approx(fit.scale, 1.92));
    assert!(approx(fit.drawn_width, 1920.0));
    assert!(approx(fit.drawn_height, 1920.0));
    assert!(approx(fit.offset.x, 0.0));
    assert!(approx(fit.offset.y, -420.0));
    let bottom_overflow = fit.offset.y + fit.drawn_height - 1080.0;
    assert!(approx(-fit.offset.y, bottom_overflow));
}

#[test]
fn wide_frame_crops_left_and_right_equally() {
    let fit = CoverFit::compute(400, 100, 1920, 1080);
    assert!(approx(fit.scale, 10.8));
    assert!(approx(fit.drawn_height, 1080.0));
    assert!(approx(fit.offset.x, (1920.0 - 4320.0) / 2.0));
    let right_overflow = fit.offset.x + fit.drawn_width - 1920.0;
    assert!(approx(-fit.offset.x, right_overflow));
}

#[test]
fn scale_is_max_of_axis_ratios_and_covers() {
    for (w, h) in [(1, 1), (3, 7), (1920, 1080), (4000, 300), (17, 2048)] {
        let fit = CoverFit::compute(w, h, 1920, 1080);
        let expected = (1920.0 / f64::from(w)).max(1080.0 / f64::from(h));
        assert!(approx(fit.scale, expected));
        assert!(fit.drawn_width >= 1920.0 - 1e-9);
        assert!(fit.drawn_height >= 1080.0 - 1e-9);
        assert!(fit.offset.x <= 1e-9 && fit.offset.y <= 1e-9);
    }
}

#[test]
fn affine_maps_frame_corners_onto_drawn_rect() {
    let fit = CoverFit::compute(1000, 1000, 1920, 1080);
    let a = fit.to_affine();
    let tl = a * kurbo::Point::new(0.0, 0.0);
    let br = a * kurbo::Point::new(1000.0, 1000.0);
    assert!(approx(tl.x, 0.0) && approx(tl.y, -420.0));
    assert!(approx(br.x, 1920.0) && approx(br.y, 1500.0));
}
