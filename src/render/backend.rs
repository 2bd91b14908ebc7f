/// A read-back of the drawing surface as RGBA8 pixels.
///
/// Pixels are **premultiplied alpha**; the `premultiplied` flag makes this explicit at API
/// boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Stable 64-bit digest of dimensions and pixels.
    pub fn digest(&self) -> u64 {
        let mut h = xxhash_rust::xxh3::Xxh3::new();
        h.update(&self.width.to_le_bytes());
        h.update(&self.height.to_le_bytes());
        h.update(&self.data);
        h.digest()
    }

    /// RGBA8 at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data
            .get(i..i + 4)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Whether every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }
}

/// Renderer settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// If set, the surface is filled with this straight RGBA8 color beneath every painted frame.
    pub clear_rgba: Option<[u8; 4]>,
    /// Skip rasterizing when the requested frame is the one already on the surface.
    pub elide_unchanged: bool,
}

/// What a paint request did to the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintOutcome {
    /// The surface was cleared and the frame drawn.
    Painted,
    /// The same frame was already on the surface; nothing was redrawn.
    Reused,
    /// No frame (failed or pending load, or no drawing context); the surface was left as is.
    Skipped,
}

/// Per-renderer counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub requests: u64,
    pub painted: u64,
    pub reused: u64,
    pub skipped: u64,
}

impl RenderStats {
    pub(crate) fn record(&mut self, outcome: PaintOutcome) {
        self.requests += 1;
        match outcome {
            PaintOutcome::Painted => self.painted += 1,
            PaintOutcome::Reused => self.reused += 1,
            PaintOutcome::Skipped => self.skipped += 1,
        }
    }
}
