use std::time::{Duration, Instant};

use crate::foundation::error::{HeroError, HeroResult};

/// Source of display refreshes.
pub trait FrameClock {
    /// Block until the next refresh and return the seconds elapsed since the previous one.
    ///
    /// `None` means the clock is exhausted and the loop should end.
    fn next_frame(&mut self) -> Option<f64>;
}

/// Deterministic clock: a fixed step, a bounded number of times, without sleeping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedClock {
    step: f64,
    remaining: u64,
}

impl FixedClock {
    pub fn new(step: f64, frames: u64) -> HeroResult<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(HeroError::validation("clock step must be finite and > 0"));
        }
        Ok(Self {
            step,
            remaining: frames,
        })
    }

    /// `frames` refreshes at `fps` per second.
    pub fn at_fps(fps: f64, frames: u64) -> HeroResult<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(HeroError::validation("clock fps must be finite and > 0"));
        }
        Self::new(1.0 / fps, frames)
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl FrameClock for FixedClock {
    fn next_frame(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.step)
    }
}

/// Wall-clock refreshes paced to a target rate. Runs until dropped unless bounded.
#[derive(Clone, Debug)]
pub struct RealtimeClock {
    period: Duration,
    last: Option<Instant>,
    remaining: Option<u64>,
}

impl RealtimeClock {
    pub fn new(fps: f64) -> HeroResult<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(HeroError::validation("clock fps must be finite and > 0"));
        }
        Ok(Self {
            period: Duration::from_secs_f64(1.0 / fps),
            last: None,
            remaining: None,
        })
    }

    /// Stop after `frames` refreshes.
    pub fn bounded(mut self, frames: u64) -> Self {
        self.remaining = Some(frames);
        self
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl FrameClock for RealtimeClock {
    fn next_frame(&mut self) -> Option<f64> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }

        let Some(last) = self.last else {
            // First refresh: nothing to wait for, report one nominal period.
            self.last = Some(Instant::now());
            return Some(self.period.as_secs_f64());
        };

        let deadline = last + self.period;
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        let now = Instant::now();
        self.last = Some(now);
        Some(now.duration_since(last).as_secs_f64())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/clock.rs"]
mod tests;
