use crate::power::PowerMode;
use crate::schedule::clock::FrameClock;
use crate::schedule::token::CancelToken;

/// Callback verdict after one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Stop,
}

/// Why [`TickLoop::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickExit {
    /// The token was cancelled before the next tick.
    Cancelled,
    /// The callback returned [`TickControl::Stop`].
    Stopped,
    /// The clock produced no further refreshes.
    ClockExhausted,
    /// Low-power mode: the single allowed tick has been scheduled.
    SingleFrame,
}

/// Repeating per-refresh task with explicit cancellation.
///
/// In [`PowerMode::Normal`] the callback runs once per clock refresh until cancelled, stopped,
/// or the clock ends. In [`PowerMode::LowPower`] at most one tick is ever scheduled over the
/// loop's lifetime.
#[derive(Clone, Debug)]
pub struct TickLoop {
    mode: PowerMode,
    token: CancelToken,
    scheduled: u64,
}

impl TickLoop {
    pub fn new(mode: PowerMode, token: CancelToken) -> Self {
        Self {
            mode,
            token,
            scheduled: 0,
        }
    }

    pub fn mode(&self) -> PowerMode {
        self.mode
    }

    pub fn token(&self) -> &CancelToken {
        &self.token
    }

    /// Ticks scheduled so far, across all calls to [`TickLoop::run`].
    pub fn scheduled(&self) -> u64 {
        self.scheduled
    }

    pub fn run<C, F>(&mut self, clock: &mut C, mut on_tick: F) -> TickExit
    where
        C: FrameClock + ?Sized,
        F: FnMut(f64) -> TickControl,
    {
        loop {
            if self.token.is_cancelled() {
                tracing::debug!(scheduled = self.scheduled, "tick loop cancelled");
                return TickExit::Cancelled;
            }
            if self.mode.is_low_power() && self.scheduled > 0 {
                return TickExit::SingleFrame;
            }

            let Some(dt) = clock.next_frame() else {
                return TickExit::ClockExhausted;
            };
            // Cancellation may land while the clock was waiting for the refresh.
            if self.token.is_cancelled() {
                tracing::debug!(scheduled = self.scheduled, "tick loop cancelled");
                return TickExit::Cancelled;
            }

            self.scheduled += 1;
            if on_tick(dt) == TickControl::Stop {
                return TickExit::Stopped;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/tick.rs"]
mod tests;
