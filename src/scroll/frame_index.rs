use crate::foundation::core::{FrameCount, FrameIndex};

/// Map progress to the nearest frame: `round(clamp(progress, 0, 1) * (N - 1))`.
///
/// NaN progress maps to frame 0.
pub fn frame_index(progress: f64, count: FrameCount) -> FrameIndex {
    let p = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let last = count.last().0;
    let idx = (p * f64::from(last)).round() as u32;
    FrameIndex(idx.min(last))
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/frame_index.rs"]
mod tests;
