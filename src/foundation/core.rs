use crate::foundation::error::{HeroError, HeroResult};

pub use kurbo::{Affine, Vec2};

/// Position of a frame in the hero sequence (0-based).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u32);

impl FrameIndex {
    /// Index as a slot offset.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of frames in a sequence. Always at least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct FrameCount(u32);

impl FrameCount {
    /// Length of the stock hero sequence.
    pub const HERO: Self = Self(192);

    /// Validate a frame count.
    pub fn new(n: u32) -> HeroResult<Self> {
        if n == 0 {
            return Err(HeroError::validation("frame count must be >= 1"));
        }
        Ok(Self(n))
    }

    /// Raw count.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Largest valid index (`N - 1`).
    pub fn last(self) -> FrameIndex {
        FrameIndex(self.0 - 1)
    }

    /// Whether `idx` addresses a slot of this sequence.
    pub fn contains(self, idx: FrameIndex) -> bool {
        idx.0 < self.0
    }

    /// All indices in ascending order.
    pub fn indices(self) -> impl Iterator<Item = FrameIndex> {
        (0..self.0).map(FrameIndex)
    }
}

impl<'de> serde::Deserialize<'de> for FrameCount {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let n = u32::deserialize(d)?;
        Self::new(n).map_err(serde::de::Error::custom)
    }
}

/// Logical resolution of the drawing surface, independent of its displayed size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    /// 1920x1080, the hero canvas resolution.
    pub const FULL_HD: Self = Self {
        width: 1920,
        height: 1080,
    };

    pub fn new(width: u32, height: u32) -> HeroResult<Self> {
        if width == 0 || height == 0 {
            return Err(HeroError::validation("surface width/height must be > 0"));
        }
        Ok(Self { width, height })
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::FULL_HD
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
