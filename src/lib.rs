//! padel-hero is a scroll-scrubbed image-sequence hero animator.
//!
//! A fixed sequence of frames is loaded once, in the background, and painted cover-fit onto a
//! CPU canvas as the visitor scrolls through a tall container. Scroll position is smoothed by a
//! damped spring; text captions fade in and out over progress ranges. The public API is
//! view-oriented:
//!
//! - Load and validate a [`HeroConfig`]
//! - Mount a [`HeroView`] over a [`FrameSource`]
//! - Forward scroll/resize events and call [`HeroView::tick`] per display refresh (or hand a
//!   [`FrameClock`] to [`HeroView::run`])
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod config;
mod foundation;
mod overlay;
mod power;
mod render;
mod schedule;
mod scroll;
mod session;

pub use crate::foundation::core::{Affine, FrameCount, FrameIndex, SurfaceSize, Vec2};
pub use crate::foundation::error::{HeroError, HeroResult};

pub use crate::animation::curve::{CurveStop, ProgressCurve};
pub use crate::animation::ease::Ease;
pub use crate::assets::decode::decode_frame;
pub use crate::assets::frames::{Frame, FrameSequence, FrameSlot, LoadFailure};
pub use crate::assets::loader::{
    FrameLoader, LoadHandle, LoadObserver, LoadProgress, LoadReport, LoaderOpts, NoopObserver,
};
pub use crate::assets::naming::{FrameNaming, normalize_rel_path};
pub use crate::assets::source::{DirFrameSource, FrameSource, MemoryFrameSource};
pub use crate::config::hero::{DEFAULT_CONTAINER_HEIGHT_VH, HeroConfig};
pub use crate::overlay::beats::{BeatOpacity, BeatOverlay, TextBeat};
pub use crate::power::{BATTERY_SAVE_ENV, PowerMode, PowerSignals, REDUCED_MOTION_ENV};
pub use crate::render::backend::{FrameRGBA, PaintOutcome, RenderSettings, RenderStats};
pub use crate::render::cover::CoverFit;
pub use crate::render::cpu::CpuRenderer;
pub use crate::schedule::clock::{FixedClock, FrameClock, RealtimeClock};
pub use crate::schedule::tick::{TickControl, TickExit, TickLoop};
pub use crate::schedule::token::CancelToken;
pub use crate::scroll::extent::ScrollGeometry;
pub use crate::scroll::frame_index::frame_index;
pub use crate::scroll::mapper::ScrollProgress;
pub use crate::scroll::spring::{Spring, SpringConfig};
pub use crate::session::hero::{HeroView, TickSample};
