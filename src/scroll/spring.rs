use crate::foundation::error::{HeroError, HeroResult};

/// Damped spring parameters.
///
/// Defaults are stiffness 100, damping 30, mass 1 (damping ratio 1.5, no overshoot from rest).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance to target below which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed (units per second) below which the spring may come to rest.
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 0.001,
            rest_speed: 0.01,
        }
    }
}

impl SpringConfig {
    pub fn validate(&self) -> HeroResult<()> {
        let all_finite = [
            self.stiffness,
            self.damping,
            self.mass,
            self.rest_delta,
            self.rest_speed,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return Err(HeroError::validation("spring parameters must be finite"));
        }
        if self.stiffness <= 0.0 || self.mass <= 0.0 {
            return Err(HeroError::validation("spring stiffness and mass must be > 0"));
        }
        if self.damping < 0.0 {
            return Err(HeroError::validation("spring damping must be >= 0"));
        }
        if self.rest_delta <= 0.0 || self.rest_speed <= 0.0 {
            return Err(HeroError::validation(
                "spring rest_delta and rest_speed must be > 0",
            ));
        }
        Ok(())
    }

    /// Undamped angular frequency `sqrt(k / m)`.
    pub fn omega(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio `c / (2 sqrt(k m))`.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// One-dimensional spring chasing a target.
///
/// Each step uses the closed-form solution of the damped oscillator, so results do not depend
/// on how a time span is split into steps beyond floating-point rounding.
#[derive(Clone, Debug)]
pub struct Spring {
    cfg: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
    at_rest: bool,
}

impl Spring {
    /// A spring resting at `initial`.
    pub fn new(cfg: SpringConfig, initial: f64) -> Self {
        Self {
            cfg,
            position: initial,
            velocity: 0.0,
            target: initial,
            at_rest: true,
        }
    }

    pub fn config(&self) -> &SpringConfig {
        &self.cfg
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.at_rest
    }

    /// Retarget the spring. A resting spring asked to move less than `rest_delta` snaps
    /// instead of animating.
    pub fn set_target(&mut self, target: f64) {
        if !target.is_finite() {
            return;
        }
        self.target = target;
        if self.at_rest && (target - self.position).abs() < self.cfg.rest_delta {
            self.position = target;
            return;
        }
        self.at_rest = false;
    }

    /// Jump straight to the target and stop.
    pub fn snap_to_target(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
        self.at_rest = true;
    }

    /// Advance by `dt` seconds and return the new position.
    pub fn step(&mut self, dt: f64) -> f64 {
        if self.at_rest || !dt.is_finite() || dt <= 0.0 {
            return self.position;
        }

        let (x, v) = self.solve(self.position - self.target, self.velocity, dt);
        self.position = self.target + x;
        self.velocity = v;

        if x.abs() < self.cfg.rest_delta && v.abs() < self.cfg.rest_speed {
            self.snap_to_target();
        }
        self.position
    }

    /// Displacement and velocity after `t` seconds, starting from displacement `x0` and
    /// velocity `v0`.
    fn solve(&self, x0: f64, v0: f64, t: f64) -> (f64, f64) {
        let w0 = self.cfg.omega();
        let zeta = self.cfg.damping_ratio();

        if (zeta - 1.0).abs() < 1e-6 {
            let b = v0 + w0 * x0;
            let e = (-w0 * t).exp();
            let x = e * (x0 + b * t);
            let v = e * (b - w0 * (x0 + b * t));
            return (x, v);
        }

        if zeta < 1.0 {
            let a = zeta * w0;
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let b = (v0 + a * x0) / wd;
            let e = (-a * t).exp();
            let (s, c) = (wd * t).sin_cos();
            let x = e * (x0 * c + b * s);
            let v = e * ((-a * x0 + wd * b) * c + (-a * b - wd * x0) * s);
            return (x, v);
        }

        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - root);
        let r2 = -w0 * (zeta + root);
        let c1 = (v0 - r2 * x0) / (r1 - r2);
        let c2 = x0 - c1;
        let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
        (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/spring.rs"]
mod tests;
