use crate::foundation::core::{FrameCount, FrameIndex};

/// One decoded still of the hero sequence.
///
/// Pixels are premultiplied RGBA8, held in a `vello_cpu` image paint so the renderer can draw
/// the frame without copying. Cloning is cheap.
#[derive(Clone)]
pub struct Frame {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) paint: vello_cpu::Image,
}

impl Frame {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Why a frame slot stayed empty.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum LoadFailure {
    /// The source could not produce bytes for the frame.
    #[error("fetch failed: {0}")]
    Fetch(String),
    /// Bytes were fetched but did not decode into an image.
    #[error("decode failed: {0}")]
    Decode(String),
    /// Fetching or decoding panicked; the panic was contained to this slot.
    #[error("load panicked: {0}")]
    Panicked(String),
}

/// State of one slot in a [`FrameSequence`].
#[derive(Clone, Debug, Default)]
pub enum FrameSlot {
    /// Not attempted yet.
    #[default]
    Pending,
    Loaded(Frame),
    /// Attempted and failed; the slot stays empty for the lifetime of the sequence.
    Failed(LoadFailure),
}

impl FrameSlot {
    pub fn frame(&self) -> Option<&Frame> {
        match self {
            Self::Loaded(f) => Some(f),
            Self::Pending | Self::Failed(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Fixed-size, index-addressed frame store.
///
/// Slots are written once by the loader and are read-only afterwards. Looking up a pending,
/// failed, or out-of-range index yields `None`.
#[derive(Clone, Debug)]
pub struct FrameSequence {
    count: FrameCount,
    slots: Vec<FrameSlot>,
}

impl FrameSequence {
    /// A sequence with every slot pending.
    pub fn empty(count: FrameCount) -> Self {
        Self {
            count,
            slots: vec![FrameSlot::Pending; count.get() as usize],
        }
    }

    pub fn count(&self) -> FrameCount {
        self.count
    }

    /// Store the outcome for `idx`. Out-of-range indices and already-resolved slots are left
    /// untouched; returns whether the slot was written.
    pub fn resolve(&mut self, idx: FrameIndex, slot: FrameSlot) -> bool {
        if !self.count.contains(idx) {
            return false;
        }
        let existing = &mut self.slots[idx.as_usize()];
        if existing.is_resolved() {
            return false;
        }
        *existing = slot;
        true
    }

    pub fn get(&self, idx: FrameIndex) -> Option<&Frame> {
        self.slots.get(idx.as_usize()).and_then(FrameSlot::frame)
    }

    pub fn slot(&self, idx: FrameIndex) -> Option<&FrameSlot> {
        self.slots.get(idx.as_usize())
    }

    pub fn loaded_count(&self) -> usize {
        self.slots.iter().filter(|s| s.frame().is_some()).count()
    }

    pub fn resolved_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_resolved()).count()
    }

    /// Indices whose load failed, in ascending order.
    pub fn failures(&self) -> Vec<(FrameIndex, LoadFailure)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| match s {
                FrameSlot::Failed(e) => Some((FrameIndex(i as u32), e.clone())),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/frames.rs"]
mod tests;
