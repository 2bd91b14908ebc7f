use super::*;

#[test]
fn five_hundred_vh_container_has_four_viewports_of_travel() {
    let g = ScrollGeometry::hero(0.0, 1000.0, 5.0);
    assert_eq!(g.container_height(), 5000.0);
    assert_eq!(g.extent(), 4000.0);
    assert_eq!(g.raw_progress(0.0), 0.0);
    assert_eq!(g.raw_progress(2000.0), 0.5);
    assert_eq!(g.raw_progress(4000.0), 1.0);
}

#[test]
fn raw_progress_is_clamped() {
    let g = ScrollGeometry::hero(500.0, 800.0, 5.0);
    assert_eq!(g.raw_progress(0.0), 0.0);
    assert_eq!(g.raw_progress(1_000_000.0), 1.0);
    assert_eq!(g.raw_progress(f64::NAN), 0.0);
    assert_eq!(g.raw_progress(f64::INFINITY), 1.0);
}

#[test]
fn degenerate_extent_steps_at_container_top() {
    let g = ScrollGeometry::hero(100.0, 800.0, 1.0);
    assert_eq!(g.extent(), 0.0);
    assert_eq!(g.raw_progress(99.0), 0.0);
    assert_eq!(g.raw_progress(100.0), 1.0);
}

#[test]
fn scroll_for_inverts_raw_progress() {
    let g = ScrollGeometry::hero(250.0, 900.0, 5.0);
    for p in [0.0, 0.25, 0.5, 1.0] {
        let y = g.scroll_for(p);
        assert!((g.raw_progress(y) - p).abs() < 1e-12);
    }
}

#[test]
fn scroll_for_lands_on_the_right_side_of_a_degenerate_step() {
    let g = ScrollGeometry::hero(100.0, 0.0, 5.0);
    assert_eq!(g.extent(), 0.0);
    assert_eq!(g.raw_progress(g.scroll_for(0.0)), 0.0);
    assert_eq!(g.raw_progress(g.scroll_for(0.4)), 0.0);
    assert_eq!(g.raw_progress(g.scroll_for(0.5)), 1.0);
    assert_eq!(g.raw_progress(g.scroll_for(1.0)), 1.0);
    assert_eq!(g.raw_progress(g.scroll_for(f64::NAN)), 0.0);
}
