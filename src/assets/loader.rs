use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::thread::JoinHandle;

use rayon::prelude::*;

use crate::assets::decode::decode_frame;
use crate::assets::frames::{FrameSequence, FrameSlot, LoadFailure};
use crate::assets::naming::FrameNaming;
use crate::assets::source::FrameSource;
use crate::foundation::core::{FrameCount, FrameIndex};
use crate::foundation::error::{HeroError, HeroResult};

/// Worker pool controls for the frame batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoaderOpts {
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// Attempts resolved so far (successes and failures alike).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadProgress {
    pub completed: u32,
    pub total: u32,
}

impl LoadProgress {
    /// Whole percent for the loading readout.
    pub fn percent(self) -> u32 {
        if self.total == 0 {
            return 100;
        }
        ((f64::from(self.completed) / f64::from(self.total)) * 100.0).round() as u32
    }

    pub fn is_complete(self) -> bool {
        self.completed >= self.total
    }
}

/// Summary handed to [`LoadObserver::on_complete`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadReport {
    pub total: u32,
    pub loaded: u32,
    pub failed: Vec<(FrameIndex, LoadFailure)>,
}

/// Callbacks from the loader. Attempt callbacks may arrive from several worker threads at once.
pub trait LoadObserver: Send + Sync {
    /// Called after every attempt with the updated count.
    fn on_attempt(&self, _idx: FrameIndex, _progress: LoadProgress) {}

    /// Called exactly once, after all attempts resolved.
    fn on_complete(&self, _report: &LoadReport) {}
}

/// Observer that ignores every callback.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl LoadObserver for NoopObserver {}

/// Loads every frame of the sequence as one all-settled batch.
///
/// Each index is fetched and decoded independently on a dedicated rayon pool. A failure is
/// captured in its slot and never aborts the batch. There is no retry, timeout, or cancellation.
pub struct FrameLoader {
    source: Arc<dyn FrameSource>,
    naming: FrameNaming,
    count: FrameCount,
    opts: LoaderOpts,
    observer: Arc<dyn LoadObserver>,
}

impl FrameLoader {
    pub fn new(source: Arc<dyn FrameSource>, naming: FrameNaming, count: FrameCount) -> Self {
        Self {
            source,
            naming,
            count,
            opts: LoaderOpts::default(),
            observer: Arc::new(NoopObserver),
        }
    }

    pub fn with_opts(mut self, opts: LoaderOpts) -> Self {
        self.opts = opts;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn LoadObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Run the batch on the calling thread and return the (possibly sparse) sequence.
    pub fn load_blocking(self) -> HeroResult<FrameSequence> {
        let pool = build_thread_pool(self.opts.threads)?;
        let counter = Arc::new(AtomicU32::new(0));
        Ok(pool.install(|| self.run_batch(&counter)))
    }

    /// Start the batch on a background thread and return immediately.
    pub fn spawn(self) -> HeroResult<LoadHandle> {
        let pool = build_thread_pool(self.opts.threads)?;
        let counter = Arc::new(AtomicU32::new(0));
        let total = self.count.get();
        let worker_counter = Arc::clone(&counter);
        let join = std::thread::Builder::new()
            .name("padel-hero-loader".to_string())
            .spawn(move || pool.install(|| self.run_batch(&worker_counter)))
            .map_err(spawn_error)?;
        Ok(LoadHandle {
            join: Some(join),
            completed: counter,
            total,
        })
    }

    #[tracing::instrument(skip_all, fields(frames = self.count.get()))]
    fn run_batch(&self, completed: &AtomicU32) -> FrameSequence {
        let total = self.count.get();
        tracing::info!(total, dir = %self.naming.dir, "loading hero frames");

        let indices: Vec<FrameIndex> = self.count.indices().collect();
        let slots: Vec<(FrameIndex, FrameSlot)> = indices
            .into_par_iter()
            .map(|idx| {
                let slot = self.load_one(idx);
                let done = completed.fetch_add(1, Ordering::AcqRel) + 1;
                self.observer.on_attempt(
                    idx,
                    LoadProgress {
                        completed: done,
                        total,
                    },
                );
                (idx, slot)
            })
            .collect();

        let mut seq = FrameSequence::empty(self.count);
        for (idx, slot) in slots {
            seq.resolve(idx, slot);
        }

        let report = LoadReport {
            total,
            loaded: seq.loaded_count() as u32,
            failed: seq.failures(),
        };
        tracing::info!(
            loaded = report.loaded,
            failed = report.failed.len(),
            "hero frames settled"
        );
        self.observer.on_complete(&report);
        seq
    }

    /// Load one slot. A panic in the source or decoder fails only this slot.
    fn load_one(&self, idx: FrameIndex) -> FrameSlot {
        match catch_unwind(AssertUnwindSafe(|| self.fetch_and_decode(idx))) {
            Ok(slot) => slot,
            Err(payload) => {
                let msg = panic_message(&*payload);
                tracing::debug!(frame = idx.0, error = %msg, "frame load panicked");
                FrameSlot::Failed(LoadFailure::Panicked(msg))
            }
        }
    }

    fn fetch_and_decode(&self, idx: FrameIndex) -> FrameSlot {
        let bytes = match self.source.fetch(idx, &self.naming) {
            Ok(b) => b,
            Err(e) => {
                tracing::debug!(frame = idx.0, error = %e, "frame fetch failed");
                return FrameSlot::Failed(LoadFailure::Fetch(e.to_string()));
            }
        };
        match decode_frame(&bytes) {
            Ok(frame) => FrameSlot::Loaded(frame),
            Err(e) => {
                tracing::debug!(frame = idx.0, error = %e, "frame decode failed");
                FrameSlot::Failed(LoadFailure::Decode(e.to_string()))
            }
        }
    }
}

/// Handle to a batch running in the background.
///
/// Dropping the handle detaches the batch; in-flight fetches still run to completion.
pub struct LoadHandle {
    join: Option<JoinHandle<FrameSequence>>,
    completed: Arc<AtomicU32>,
    total: u32,
}

impl LoadHandle {
    pub fn progress(&self) -> LoadProgress {
        LoadProgress {
            completed: self.completed.load(Ordering::Acquire),
            total: self.total,
        }
    }

    /// Whether the batch has settled and the sequence is ready to take.
    pub fn is_finished(&self) -> bool {
        self.join.as_ref().is_some_and(JoinHandle::is_finished)
    }

    /// Take the sequence if the batch has settled. Yields `Some` at most once.
    pub fn try_take(&mut self) -> Option<HeroResult<FrameSequence>> {
        if !self.is_finished() {
            return None;
        }
        self.join.take().map(join_sequence)
    }

    /// Block until the batch settles.
    pub fn wait(mut self) -> HeroResult<FrameSequence> {
        let join = self
            .join
            .take()
            .ok_or_else(|| HeroError::asset("frame sequence was already taken"))?;
        join_sequence(join)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        return (*s).to_string();
    }
    if let Some(s) = payload.downcast_ref::<String>() {
        return s.clone();
    }
    "non-string panic payload".to_string()
}

fn spawn_error(e: std::io::Error) -> HeroError {
    HeroError::Other(anyhow::Error::new(e).context("spawn frame loader thread"))
}

fn join_sequence(join: JoinHandle<FrameSequence>) -> HeroResult<FrameSequence> {
    join.join()
        .map_err(|_| HeroError::asset("frame loader thread panicked"))
}

fn build_thread_pool(threads: Option<usize>) -> HeroResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(HeroError::validation(
            "loader 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| HeroError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
