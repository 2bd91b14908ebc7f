use std::sync::Arc;

use crate::assets::frames::FrameSequence;
use crate::assets::loader::{FrameLoader, LoadHandle, LoadObserver, LoadProgress, NoopObserver};
use crate::assets::source::FrameSource;
use crate::config::hero::HeroConfig;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{HeroError, HeroResult};
use crate::overlay::beats::{BeatOpacity, BeatOverlay};
use crate::power::{PowerMode, PowerSignals};
use crate::render::backend::{FrameRGBA, PaintOutcome, RenderStats};
use crate::render::cpu::CpuRenderer;
use crate::schedule::clock::FrameClock;
use crate::schedule::tick::{TickControl, TickExit, TickLoop};
use crate::schedule::token::CancelToken;
use crate::scroll::extent::ScrollGeometry;
use crate::scroll::frame_index::frame_index;
use crate::scroll::mapper::ScrollProgress;

/// What one tick produced.
///
/// `progress` is sampled once per tick and drives both `frame_index` and `beats`.
#[derive(Clone, Debug, PartialEq)]
pub struct TickSample {
    /// Smoothed progress in `[0, 1]`.
    pub progress: f64,
    /// Frame requested for the canvas (always 0 in low-power mode).
    pub frame_index: FrameIndex,
    pub beats: Vec<BeatOpacity>,
    /// `None` when no paint was requested: frames still loading, the view unmounted, or the
    /// low-power frame already on the canvas.
    pub paint: Option<PaintOutcome>,
}

enum FrameState {
    Loading(LoadHandle),
    Ready(FrameSequence),
}

/// The scroll-scrubbed hero: frame sequence, scroll mapper, canvas, overlay, and tick loop.
///
/// The host forwards scroll and resize events and calls [`HeroView::tick`] once per display
/// refresh (or hands a [`FrameClock`] to [`HeroView::run`]). Frames load in the background
/// from mount; until they settle, ticks paint nothing and [`HeroView::loading_label`] reports
/// progress.
pub struct HeroView {
    config: HeroConfig,
    frames: FrameState,
    scroll: ScrollProgress,
    renderer: Option<CpuRenderer>,
    overlay: BeatOverlay,
    mode: PowerMode,
    token: CancelToken,
    ticks: TickLoop,
    static_painted: bool,
}

impl HeroView {
    /// Validate `config`, pick the power mode, and start loading every frame from `source`.
    pub fn mount(
        config: HeroConfig,
        source: Arc<dyn FrameSource>,
        signals: PowerSignals,
    ) -> HeroResult<Self> {
        Self::mount_observed(config, source, signals, Arc::new(NoopObserver))
    }

    /// [`HeroView::mount`], reporting loader progress to `observer`.
    pub fn mount_observed(
        config: HeroConfig,
        source: Arc<dyn FrameSource>,
        signals: PowerSignals,
        observer: Arc<dyn LoadObserver>,
    ) -> HeroResult<Self> {
        config.validate()?;
        let handle = FrameLoader::new(source, config.naming.clone(), config.frame_count)
            .with_opts(config.loader)
            .with_observer(observer)
            .spawn()?;
        Ok(Self::assemble(
            config,
            FrameState::Loading(handle),
            PowerMode::from_signals(&signals),
        ))
    }

    /// Mount over an already-settled sequence.
    pub fn with_frames(
        config: HeroConfig,
        frames: FrameSequence,
        signals: PowerSignals,
    ) -> HeroResult<Self> {
        config.validate()?;
        if frames.count() != config.frame_count {
            return Err(HeroError::validation(format!(
                "sequence has {} frames but config expects {}",
                frames.count().get(),
                config.frame_count.get()
            )));
        }
        Ok(Self::assemble(
            config,
            FrameState::Ready(frames),
            PowerMode::from_signals(&signals),
        ))
    }

    fn assemble(config: HeroConfig, frames: FrameState, mode: PowerMode) -> Self {
        let geometry = ScrollGeometry::hero(
            0.0,
            f64::from(config.surface.height),
            config.container_height_vh,
        );
        let renderer = CpuRenderer::new(config.surface, config.render);
        if renderer.is_none() {
            tracing::warn!(
                width = config.surface.width,
                height = config.surface.height,
                "no drawing context for hero surface; paints are no-ops"
            );
        }
        let token = CancelToken::new();
        Self {
            scroll: ScrollProgress::new(geometry, config.spring),
            overlay: config.overlay(),
            renderer,
            frames,
            mode,
            ticks: TickLoop::new(mode, token.clone()),
            token,
            static_painted: false,
            config,
        }
    }

    pub fn config(&self) -> &HeroConfig {
        &self.config
    }

    pub fn mode(&self) -> PowerMode {
        self.mode
    }

    pub fn scroll(&self) -> &ScrollProgress {
        &self.scroll
    }

    pub fn overlay(&self) -> &BeatOverlay {
        &self.overlay
    }

    /// Settled frames, once the batch is done and has been picked up by a tick.
    pub fn frames(&self) -> Option<&FrameSequence> {
        match &self.frames {
            FrameState::Ready(seq) => Some(seq),
            FrameState::Loading(_) => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.frames, FrameState::Ready(_))
    }

    pub fn load_progress(&self) -> LoadProgress {
        match &self.frames {
            FrameState::Loading(handle) => handle.progress(),
            FrameState::Ready(seq) => LoadProgress {
                completed: seq.resolved_count() as u32,
                total: seq.count().get(),
            },
        }
    }

    /// `"LOADING {percent}%"` while the batch is in flight, `None` once the frames are in.
    pub fn loading_label(&self) -> Option<String> {
        match &self.frames {
            FrameState::Loading(handle) => {
                Some(format!("LOADING {}%", handle.progress().percent()))
            }
            FrameState::Ready(_) => None,
        }
    }

    /// Ticks scheduled by [`HeroView::run`] so far.
    pub fn scheduled_ticks(&self) -> u64 {
        self.ticks.scheduled()
    }

    pub fn render_stats(&self) -> Option<RenderStats> {
        self.renderer.as_ref().map(CpuRenderer::stats)
    }

    /// The canvas contents, or `None` without a drawing context.
    pub fn snapshot(&self) -> Option<FrameRGBA> {
        self.renderer.as_ref().map(CpuRenderer::snapshot)
    }

    pub fn token(&self) -> &CancelToken {
        &self.token
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scroll.on_scroll(scroll_y);
    }

    pub fn on_resize(&mut self, viewport_height: f64) {
        self.scroll.on_resize(viewport_height);
    }

    /// Scroll to the offset for `progress` and skip the smoothing toward it.
    pub fn jump_to_progress(&mut self, progress: f64) {
        let y = self.scroll.geometry().scroll_for(progress);
        self.scroll.on_scroll(y);
        self.scroll.jump_to_raw();
    }

    /// Block until the frame batch settles.
    pub fn wait_ready(&mut self) {
        if self.is_ready() {
            return;
        }
        let placeholder = FrameState::Ready(FrameSequence::empty(self.config.frame_count));
        if let FrameState::Loading(handle) = std::mem::replace(&mut self.frames, placeholder) {
            let seq = self.settle(handle.wait());
            self.frames = FrameState::Ready(seq);
        }
    }

    /// Advance by `dt` seconds: smooth progress, pick the frame, paint, and sample the overlay.
    pub fn tick(&mut self, dt: f64) -> TickSample {
        self.poll_frames();

        let progress = self.scroll.advance(dt);
        let idx = if self.mode.is_low_power() {
            FrameIndex(0)
        } else {
            frame_index(progress, self.config.frame_count)
        };
        let beats = self.overlay.opacities(progress);
        let paint = self.paint(idx);

        TickSample {
            progress,
            frame_index: idx,
            beats,
            paint,
        }
    }

    /// Wait for the frames, then tick on every refresh of `clock` until `on_sample` stops,
    /// the clock ends, or the view is unmounted. Low-power views tick once.
    pub fn run<C, F>(&mut self, clock: &mut C, mut on_sample: F) -> TickExit
    where
        C: FrameClock + ?Sized,
        F: FnMut(&TickSample) -> TickControl,
    {
        self.wait_ready();
        let mut ticks = self.ticks.clone();
        let exit = ticks.run(clock, |dt| {
            let sample = self.tick(dt);
            on_sample(&sample)
        });
        self.ticks = ticks;
        exit
    }

    /// Stop the tick loop. Frame fetches already in flight still complete.
    pub fn unmount(&mut self) {
        if !self.token.is_cancelled() {
            tracing::debug!("hero view unmounted");
        }
        self.token.cancel();
    }

    fn poll_frames(&mut self) {
        let FrameState::Loading(handle) = &mut self.frames else {
            return;
        };
        let Some(result) = handle.try_take() else {
            return;
        };
        let seq = self.settle(result);
        self.frames = FrameState::Ready(seq);
    }

    fn settle(&self, result: HeroResult<FrameSequence>) -> FrameSequence {
        match result {
            Ok(seq) => seq,
            Err(e) => {
                tracing::warn!(error = %e, "frame batch lost; canvas stays empty");
                FrameSequence::empty(self.config.frame_count)
            }
        }
    }

    fn paint(&mut self, idx: FrameIndex) -> Option<PaintOutcome> {
        if self.token.is_cancelled() {
            return None;
        }
        let FrameState::Ready(frames) = &self.frames else {
            return None;
        };
        if self.mode.is_low_power() {
            if self.static_painted {
                return None;
            }
            self.static_painted = true;
        }
        Some(match self.renderer.as_mut() {
            Some(renderer) => renderer.paint(idx, frames.get(idx)),
            None => PaintOutcome::Skipped,
        })
    }
}

impl Drop for HeroView {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/hero.rs"]
mod tests;
