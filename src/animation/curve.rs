use crate::animation::ease::Ease;
use crate::foundation::error::{HeroError, HeroResult};

/// One breakpoint of a [`ProgressCurve`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurveStop {
    /// Progress position in `[0, 1]`.
    pub at: f64,
    /// Output value at `at`.
    pub value: f64,
    /// Easing toward the next stop.
    #[serde(default)]
    pub ease: Ease,
}

impl CurveStop {
    pub fn linear(at: f64, value: f64) -> Self {
        Self {
            at,
            value,
            ease: Ease::Linear,
        }
    }
}

/// Piecewise map from progress to a scalar, clamped to the first/last stop outside its range.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ProgressCurve {
    stops: Vec<CurveStop>,
}

impl ProgressCurve {
    /// Build and validate a curve.
    pub fn new(stops: Vec<CurveStop>) -> HeroResult<Self> {
        let curve = Self { stops };
        curve.validate()?;
        Ok(curve)
    }

    /// Build from stops already known to be sorted and within `[0, 1]`.
    pub(crate) fn from_sorted_unchecked(stops: Vec<CurveStop>) -> Self {
        debug_assert!(stops.windows(2).all(|w| w[0].at <= w[1].at));
        Self { stops }
    }

    /// Linear `0 -> 1 -> 0` over three breakpoints.
    pub fn triangle(breakpoints: [f64; 3]) -> HeroResult<Self> {
        let [a, b, c] = breakpoints;
        Self::new(vec![
            CurveStop::linear(a, 0.0),
            CurveStop::linear(b, 1.0),
            CurveStop::linear(c, 0.0),
        ])
    }

    pub fn stops(&self) -> &[CurveStop] {
        &self.stops
    }

    pub fn validate(&self) -> HeroResult<()> {
        if self.stops.is_empty() {
            return Err(HeroError::validation("curve must have at least one stop"));
        }
        for s in &self.stops {
            if !s.at.is_finite() || !s.value.is_finite() {
                return Err(HeroError::validation("curve stops must be finite"));
            }
            if !(0.0..=1.0).contains(&s.at) {
                return Err(HeroError::validation(format!(
                    "curve stop at {} is outside [0, 1]",
                    s.at
                )));
            }
        }
        if !self.stops.windows(2).all(|w| w[0].at <= w[1].at) {
            return Err(HeroError::validation("curve stops must be sorted by 'at'"));
        }
        Ok(())
    }

    /// Sample the curve. NaN progress samples as 0.
    pub fn sample(&self, progress: f64) -> f64 {
        let p = if progress.is_nan() { 0.0 } else { progress };
        let Some(first) = self.stops.first() else {
            return 0.0;
        };

        let idx = self.stops.partition_point(|s| s.at <= p);
        if idx == 0 {
            return first.value;
        }
        if idx >= self.stops.len() {
            return self.stops[self.stops.len() - 1].value;
        }

        let a = &self.stops[idx - 1];
        let b = &self.stops[idx];
        let denom = b.at - a.at;
        if denom <= 0.0 {
            return b.value;
        }
        let t = a.ease.apply((p - a.at) / denom);
        a.value + (b.value - a.value) * t
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
