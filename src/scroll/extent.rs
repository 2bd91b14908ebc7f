/// Geometry of the tall host container relative to the viewport.
///
/// Progress runs from "container top reaches viewport top" (0) to "container bottom reaches
/// viewport bottom" (1). The container is sized as a multiple of the viewport height so the
/// extent follows viewport resizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollGeometry {
    /// Document offset of the container top, in pixels.
    pub container_top: f64,
    /// Viewport height in pixels.
    pub viewport_height: f64,
    /// Container height as a multiple of the viewport height (5.0 = 500vh).
    pub container_height_vh: f64,
}

impl ScrollGeometry {
    pub fn hero(container_top: f64, viewport_height: f64, container_height_vh: f64) -> Self {
        Self {
            container_top,
            viewport_height,
            container_height_vh,
        }
    }

    pub fn container_height(&self) -> f64 {
        self.container_height_vh * self.viewport_height
    }

    /// Scroll distance between progress 0 and progress 1.
    pub fn extent(&self) -> f64 {
        self.container_height() - self.viewport_height
    }

    /// Scroll offset that corresponds to `progress`.
    ///
    /// With a degenerate extent, progress below one half maps to just above the container top
    /// and the rest to the top itself, matching [`ScrollGeometry::raw_progress`].
    pub fn scroll_for(&self, progress: f64) -> f64 {
        let p = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        let extent = self.extent();
        if extent > 0.0 {
            self.container_top + p * extent
        } else if p < 0.5 {
            self.container_top - 1.0
        } else {
            self.container_top
        }
    }

    /// Raw progress for a document scroll offset, clamped to `[0, 1]`.
    ///
    /// A degenerate extent (container no taller than the viewport) jumps from 0 to 1 at the
    /// container top.
    pub fn raw_progress(&self, scroll_y: f64) -> f64 {
        let extent = self.extent();
        let p = if extent > 0.0 {
            (scroll_y - self.container_top) / extent
        } else if scroll_y >= self.container_top {
            1.0
        } else {
            0.0
        };
        if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/extent.rs"]
mod tests;
