use std::io::Cursor;

use super::*;
use crate::assets::decode::decode_frame;

fn solid_frame(w: u32, h: u32, rgb: [u8; 3]) -> Frame {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([rgb[0], rgb[1], rgb[2], 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    decode_frame(&buf).unwrap()
}

fn close(px: [u8; 4], want: [u8; 4]) -> bool {
    px.iter()
        .zip(want.iter())
        .all(|(a, b)| (i16::from(*a) - i16::from(*b)).abs() <= 2)
}

fn renderer(settings: RenderSettings) -> CpuRenderer {
    CpuRenderer::new(SurfaceSize::new(64, 36).unwrap(), settings).unwrap()
}

#[test]
fn new_surface_is_blank() {
    let r = renderer(RenderSettings::default());
    let snap = r.snapshot();
    assert_eq!((snap.width, snap.height), (64, 36));
    assert!(snap.premultiplied);
    assert!(snap.is_blank());
    assert_eq!(r.on_surface(), None);
}

#[test]
fn no_drawing_context_for_unbackable_surfaces() {
    let huge = SurfaceSize {
        width: 70_000,
        height: 10,
    };
    assert!(CpuRenderer::new(huge, RenderSettings::default()).is_none());
    let zero = SurfaceSize {
        width: 0,
        height: 10,
    };
    assert!(CpuRenderer::new(zero, RenderSettings::default()).is_none());
}

#[test]
fn painted_frame_covers_whole_surface() {
    let mut r = renderer(RenderSettings::default());
    let frame = solid_frame(10, 10, [200, 40, 10]);
    assert_eq!(r.paint(FrameIndex(0), Some(&frame)), PaintOutcome::Painted);

    let snap = r.snapshot();
    for (x, y) in [(0, 0), (63, 0), (0, 35), (63, 35), (32, 18)] {
        let px = snap.pixel(x, y).unwrap();
        assert!(close(px, [200, 40, 10, 255]), "({x},{y}) = {px:?}");
    }
    assert_eq!(r.on_surface(), Some(FrameIndex(0)));
}

#[test]
fn missing_frame_keeps_previous_paint() {
    let mut r = renderer(RenderSettings::default());
    assert_eq!(r.paint(FrameIndex(3), None), PaintOutcome::Skipped);
    assert!(r.snapshot().is_blank());

    let frame = solid_frame(8, 8, [0, 0, 255]);
    r.paint(FrameIndex(1), Some(&frame));
    let before = r.snapshot().digest();
    assert_eq!(r.paint(FrameIndex(2), None), PaintOutcome::Skipped);
    assert_eq!(r.snapshot().digest(), before);
    assert_eq!(r.on_surface(), Some(FrameIndex(1)));
}

#[test]
fn repainting_same_frame_is_byte_identical() {
    let mut r = renderer(RenderSettings::default());
    let frame = solid_frame(16, 9, [12, 34, 56]);
    r.paint(FrameIndex(0), Some(&frame));
    let first = r.snapshot();
    assert_eq!(r.paint(FrameIndex(0), Some(&frame)), PaintOutcome::Painted);
    let second = r.snapshot();
    assert_eq!(first.data, second.data);
    assert_eq!(first.digest(), second.digest());
}

#[test]
fn elision_reuses_surface_for_unchanged_index() {
    let mut r = renderer(RenderSettings {
        elide_unchanged: true,
        ..RenderSettings::default()
    });
    let a = solid_frame(4, 4, [255, 0, 0]);
    let b = solid_frame(4, 4, [0, 255, 0]);
    assert_eq!(r.paint(FrameIndex(0), Some(&a)), PaintOutcome::Painted);
    assert_eq!(r.paint(FrameIndex(0), Some(&a)), PaintOutcome::Reused);
    assert_eq!(r.paint(FrameIndex(1), Some(&b)), PaintOutcome::Painted);
    assert_eq!(
        r.stats(),
        RenderStats {
            requests: 3,
            painted: 2,
            reused: 1,
            skipped: 0,
        }
    );
}

#[test]
fn clear_color_sits_beneath_transparent_frames() {
    let mut r = renderer(RenderSettings {
        clear_rgba: Some([0, 0, 0, 255]),
        ..RenderSettings::default()
    });
    let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 0, 0]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    let clear_frame = decode_frame(&buf).unwrap();
    r.paint(FrameIndex(0), Some(&clear_frame));
    assert!(close(r.snapshot().pixel(10, 10).unwrap(), [0, 0, 0, 255]));
}
