use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::assets::naming::FrameNaming;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{HeroError, HeroResult};

/// Where encoded frame bytes come from.
///
/// Fetches for different indices run concurrently, so implementations must be shareable across
/// threads. A fetch that never returns keeps its slot pending forever.
pub trait FrameSource: Send + Sync {
    /// Fetch the encoded bytes of one frame.
    fn fetch(&self, idx: FrameIndex, naming: &FrameNaming) -> HeroResult<Vec<u8>>;
}

/// Reads frames from an assets root on disk (`<root>/frames/frame_007.jpg`).
#[derive(Clone, Debug)]
pub struct DirFrameSource {
    root: PathBuf,
}

impl DirFrameSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, idx: FrameIndex, naming: &FrameNaming) -> HeroResult<PathBuf> {
        Ok(self.root.join(naming.rel_path(idx)?))
    }
}

impl FrameSource for DirFrameSource {
    fn fetch(&self, idx: FrameIndex, naming: &FrameNaming) -> HeroResult<Vec<u8>> {
        let path = self.path_for(idx, naming)?;
        let bytes =
            std::fs::read(&path).with_context(|| format!("read frame '{}'", path.display()))?;
        Ok(bytes)
    }
}

/// In-memory frames keyed by index; indices without bytes fail to fetch.
#[derive(Clone, Debug, Default)]
pub struct MemoryFrameSource {
    frames: BTreeMap<FrameIndex, Vec<u8>>,
}

impl MemoryFrameSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, idx: FrameIndex, bytes: Vec<u8>) {
        self.frames.insert(idx, bytes);
    }

    pub fn with_frame(mut self, idx: FrameIndex, bytes: Vec<u8>) -> Self {
        self.insert(idx, bytes);
        self
    }
}

impl FrameSource for MemoryFrameSource {
    fn fetch(&self, idx: FrameIndex, naming: &FrameNaming) -> HeroResult<Vec<u8>> {
        self.frames.get(&idx).cloned().ok_or_else(|| {
            HeroError::asset(format!(
                "no in-memory bytes for '{}'",
                naming.file_name(idx)
            ))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
