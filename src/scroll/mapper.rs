use crate::scroll::extent::ScrollGeometry;
use crate::scroll::spring::{Spring, SpringConfig};

/// Turns scroll and resize events into raw and spring-smoothed progress.
///
/// Every method is O(1). Emitted values are always within `[0, 1]`.
#[derive(Clone, Debug)]
pub struct ScrollProgress {
    geometry: ScrollGeometry,
    scroll_y: f64,
    raw: f64,
    spring: Spring,
}

impl ScrollProgress {
    /// Start at scroll offset 0, resting at the corresponding progress.
    pub fn new(geometry: ScrollGeometry, spring: SpringConfig) -> Self {
        let raw = geometry.raw_progress(0.0);
        Self {
            geometry,
            scroll_y: 0.0,
            raw,
            spring: Spring::new(spring, raw),
        }
    }

    pub fn geometry(&self) -> &ScrollGeometry {
        &self.geometry
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
        self.retarget();
    }

    pub fn on_resize(&mut self, viewport_height: f64) {
        self.geometry.viewport_height = viewport_height;
        self.retarget();
    }

    /// Advance the smoothing filter by `dt` seconds and return smoothed progress.
    pub fn advance(&mut self, dt: f64) -> f64 {
        self.spring.step(dt);
        self.smoothed()
    }

    pub fn raw(&self) -> f64 {
        self.raw
    }

    pub fn smoothed(&self) -> f64 {
        self.spring.position().clamp(0.0, 1.0)
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_settled()
    }

    /// Drop any in-flight smoothing and report the raw value directly.
    pub fn jump_to_raw(&mut self) {
        self.spring.snap_to_target();
    }

    fn retarget(&mut self) {
        self.raw = self.geometry.raw_progress(self.scroll_y);
        self.spring.set_target(self.raw);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/mapper.rs"]
mod tests;
