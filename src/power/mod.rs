//! Power-mode policy: continuous scroll-driven animation, or a single static frame.

/// Environment variable carrying the reduced-motion preference.
pub const REDUCED_MOTION_ENV: &str = "PADEL_HERO_REDUCED_MOTION";
/// Environment variable carrying the battery save-mode flag.
pub const BATTERY_SAVE_ENV: &str = "PADEL_HERO_BATTERY_SAVE";

/// Signals read once at mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PowerSignals {
    pub prefers_reduced_motion: bool,
    /// `None` when the platform cannot report battery state.
    pub battery_save: Option<bool>,
}

impl PowerSignals {
    /// Read both signals from the process environment.
    ///
    /// An unset or unrecognized value counts as "no signal".
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            prefers_reduced_motion: lookup(REDUCED_MOTION_ENV)
                .as_deref()
                .and_then(parse_flag)
                .unwrap_or(false),
            battery_save: lookup(BATTERY_SAVE_ENV).as_deref().and_then(parse_flag),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// How the hero renders for the rest of the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PowerMode {
    /// Continuous per-refresh ticks driven by scroll.
    #[default]
    Normal,
    /// Frame 0 painted once; no further ticks.
    LowPower,
}

impl PowerMode {
    pub fn from_signals(signals: &PowerSignals) -> Self {
        let mode = if signals.prefers_reduced_motion || signals.battery_save == Some(true) {
            Self::LowPower
        } else {
            Self::Normal
        };
        tracing::info!(
            ?mode,
            reduced_motion = signals.prefers_reduced_motion,
            battery_save = ?signals.battery_save,
            "power mode selected"
        );
        mode
    }

    pub fn is_low_power(self) -> bool {
        self == Self::LowPower
    }
}

#[cfg(test)]
#[path = "../../tests/unit/power/policy.rs"]
mod tests;
