use crate::foundation::core::{Affine, Vec2};

/// Placement of a frame that fully covers a surface while keeping its aspect ratio.
///
/// The frame is scaled uniformly by `max(W / w, H / h)` and centered, so any overflow is
/// cropped equally from both sides of the axis that does not fit exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverFit {
    pub scale: f64,
    /// Top-left of the scaled frame in surface space. Never positive.
    pub offset: Vec2,
    pub drawn_width: f64,
    pub drawn_height: f64,
}

impl CoverFit {
    pub fn compute(frame_w: u32, frame_h: u32, surface_w: u32, surface_h: u32) -> Self {
        let (fw, fh) = (f64::from(frame_w), f64::from(frame_h));
        let (sw, sh) = (f64::from(surface_w), f64::from(surface_h));
        let scale = (sw / fw).max(sh / fh);
        let drawn_width = fw * scale;
        let drawn_height = fh * scale;
        Self {
            scale,
            offset: Vec2::new((sw - drawn_width) / 2.0, (sh - drawn_height) / 2.0),
            drawn_width,
            drawn_height,
        }
    }

    /// Frame-space to surface-space transform.
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cover.rs"]
mod tests;
