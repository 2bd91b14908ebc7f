use crate::assets::frames::Frame;
use crate::foundation::core::{FrameIndex, SurfaceSize};
use crate::render::backend::{FrameRGBA, PaintOutcome, RenderSettings, RenderStats};
use crate::render::cover::CoverFit;

/// Fixed-resolution CPU drawing surface powered by `vello_cpu`.
pub struct CpuRenderer {
    size: SurfaceSize,
    width: u16,
    height: u16,
    settings: RenderSettings,
    pixmap: vello_cpu::Pixmap,
    on_surface: Option<FrameIndex>,
    stats: RenderStats,
}

impl CpuRenderer {
    /// Create the drawing context, or `None` when the surface cannot be backed by a pixmap
    /// (zero-sized or wider/taller than `u16::MAX`).
    pub fn new(size: SurfaceSize, settings: RenderSettings) -> Option<Self> {
        if size.width == 0 || size.height == 0 {
            return None;
        }
        let width: u16 = size.width.try_into().ok()?;
        let height: u16 = size.height.try_into().ok()?;
        Some(Self {
            size,
            width,
            height,
            settings,
            pixmap: vello_cpu::Pixmap::new(width, height),
            on_surface: None,
            stats: RenderStats::default(),
        })
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Index of the frame currently on the surface, if any has been painted.
    pub fn on_surface(&self) -> Option<FrameIndex> {
        self.on_surface
    }

    /// Paint `frame` (stored at `idx`) cover-fit onto the surface.
    ///
    /// A missing frame leaves the previous paint in place.
    pub fn paint(&mut self, idx: FrameIndex, frame: Option<&Frame>) -> PaintOutcome {
        let outcome = match frame {
            None => PaintOutcome::Skipped,
            Some(_) if self.settings.elide_unchanged && self.on_surface == Some(idx) => {
                PaintOutcome::Reused
            }
            Some(frame) => {
                self.draw(frame);
                self.on_surface = Some(idx);
                PaintOutcome::Painted
            }
        };
        self.stats.record(outcome);
        outcome
    }

    /// Read the surface back as premultiplied RGBA8.
    pub fn snapshot(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.size.width,
            height: self.size.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn draw(&mut self, frame: &Frame) {
        clear_pixmap(&mut self.pixmap, [0, 0, 0, 0]);

        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        let surface_rect = vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.size.width),
            f64::from(self.size.height),
        );

        if let Some([r, g, b, a]) = self.settings.clear_rgba {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_rect(&surface_rect);
        }

        let fit = CoverFit::compute(frame.width, frame.height, self.size.width, self.size.height);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(affine_to_cpu(fit.to_affine()));
        ctx.set_paint(frame.paint.clone());
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(frame.width),
            f64::from(frame.height),
        ));

        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn affine_to_cpu(a: crate::foundation::core::Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
