use crate::animation::curve::{CurveStop, ProgressCurve};
use crate::foundation::error::{HeroError, HeroResult};

/// A caption layer whose opacity follows scroll progress.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextBeat {
    pub id: String,
    /// Caption lines, top to bottom.
    pub lines: Vec<String>,
    pub curve: ProgressCurve,
}

impl TextBeat {
    /// A beat that fades in over `[a, b]` and out over `[b, c]`.
    pub fn triangle(id: &str, lines: &[&str], breakpoints: [f64; 3]) -> HeroResult<Self> {
        Ok(Self {
            id: id.to_string(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
            curve: ProgressCurve::triangle(breakpoints)?,
        })
    }

    pub fn opacity(&self, progress: f64) -> f64 {
        self.curve.sample(progress).clamp(0.0, 1.0)
    }
}

/// Opacity of one layer at a given progress.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BeatOpacity {
    pub id: String,
    pub opacity: f64,
}

/// The caption layers above the hero canvas.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BeatOverlay {
    pub beats: Vec<TextBeat>,
    /// The "Scroll" hint that fades out as soon as the visitor starts scrolling.
    #[serde(default)]
    pub scroll_hint: Option<TextBeat>,
}

impl BeatOverlay {
    /// The four captions and scroll hint of the club's landing page.
    pub fn padel_defaults() -> Self {
        let beat = |id: &str, lines: &[&str], bp: [f64; 3]| TextBeat {
            id: id.to_string(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
            curve: ProgressCurve::from_sorted_unchecked(vec![
                CurveStop::linear(bp[0], 0.0),
                CurveStop::linear(bp[1], 1.0),
                CurveStop::linear(bp[2], 0.0),
            ]),
        };
        Self {
            beats: vec![
                beat("power", &["THE POWER OF", "PRECISION"], [0.0, 0.2, 0.25]),
                beat("aero", &["AERODYNAMIC CORE"], [0.3, 0.4, 0.55]),
                beat(
                    "social",
                    &["SOCIAL BY NATURE", "COMPETITIVE BY DESIGN"],
                    [0.6, 0.7, 0.85],
                ),
                beat("court", &["YOUR COURT", "AWAITS"], [0.9, 0.95, 1.0]),
            ],
            scroll_hint: Some(TextBeat {
                id: "scroll_hint".to_string(),
                lines: vec!["Scroll".to_string()],
                curve: ProgressCurve::from_sorted_unchecked(vec![
                    CurveStop::linear(0.0, 1.0),
                    CurveStop::linear(0.1, 0.0),
                ]),
            }),
        }
    }

    pub fn validate(&self) -> HeroResult<()> {
        let mut seen = std::collections::BTreeSet::new();
        for beat in self.beats.iter().chain(self.scroll_hint.iter()) {
            if beat.id.is_empty() {
                return Err(HeroError::validation("text beat id must be non-empty"));
            }
            if !seen.insert(beat.id.as_str()) {
                return Err(HeroError::validation(format!(
                    "duplicate text beat id '{}'",
                    beat.id
                )));
            }
            beat.curve.validate().map_err(|e| {
                HeroError::validation(format!("text beat '{}': {e}", beat.id))
            })?;
        }
        Ok(())
    }

    /// Opacity of every layer (beats first, then the scroll hint) at `progress`.
    pub fn opacities(&self, progress: f64) -> Vec<BeatOpacity> {
        self.beats
            .iter()
            .chain(self.scroll_hint.iter())
            .map(|b| BeatOpacity {
                id: b.id.clone(),
                opacity: b.opacity(progress),
            })
            .collect()
    }

    /// Beats whose opacity is above zero at `progress`.
    pub fn visible(&self, progress: f64) -> impl Iterator<Item = (&TextBeat, f64)> {
        self.beats
            .iter()
            .map(move |b| (b, b.opacity(progress)))
            .filter(|(_, o)| *o > 0.0)
    }
}

impl Default for BeatOverlay {
    fn default() -> Self {
        Self::padel_defaults()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/beats.rs"]
mod tests;
