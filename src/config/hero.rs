use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::assets::loader::LoaderOpts;
use crate::assets::naming::FrameNaming;
use crate::foundation::core::{FrameCount, SurfaceSize};
use crate::foundation::error::{HeroError, HeroResult};
use crate::overlay::beats::{BeatOverlay, TextBeat};
use crate::render::backend::RenderSettings;
use crate::scroll::spring::SpringConfig;

/// Host container height in viewport heights (500vh).
pub const DEFAULT_CONTAINER_HEIGHT_VH: f64 = 5.0;

/// Everything a [`crate::HeroView`] needs besides its frame source and power signals.
///
/// This is the JSON-facing, human-edited form. Missing fields take the stock hero's values, so
/// `{}` is a valid configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub frame_count: FrameCount,
    pub naming: FrameNaming,
    /// Logical drawing-surface resolution.
    pub surface: SurfaceSize,
    pub container_height_vh: f64,
    pub spring: SpringConfig,
    pub beats: Vec<TextBeat>,
    /// `null` disables the hint.
    pub scroll_hint: Option<TextBeat>,
    pub render: RenderSettings,
    pub loader: LoaderOpts,
}

impl Default for HeroConfig {
    fn default() -> Self {
        let overlay = BeatOverlay::padel_defaults();
        Self {
            frame_count: FrameCount::HERO,
            naming: FrameNaming::default(),
            surface: SurfaceSize::FULL_HD,
            container_height_vh: DEFAULT_CONTAINER_HEIGHT_VH,
            spring: SpringConfig::default(),
            beats: overlay.beats,
            scroll_hint: overlay.scroll_hint,
            render: RenderSettings::default(),
            loader: LoaderOpts::default(),
        }
    }
}

impl HeroConfig {
    /// Parse a configuration from a JSON reader. Does not validate.
    pub fn from_reader<R: std::io::Read>(r: R) -> HeroResult<Self> {
        serde_json::from_reader(r).map_err(|e| HeroError::config(format!("parse hero JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk. Does not validate.
    pub fn from_path(path: impl AsRef<Path>) -> HeroResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            HeroError::config(format!("open hero JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> HeroResult<()> {
        SurfaceSize::new(self.surface.width, self.surface.height)?;
        if !self.container_height_vh.is_finite() || self.container_height_vh <= 1.0 {
            return Err(HeroError::validation(
                "container_height_vh must be finite and > 1",
            ));
        }
        self.naming.validate_for(self.frame_count)?;
        self.spring.validate()?;
        self.overlay().validate()?;
        if self.loader.threads == Some(0) {
            return Err(HeroError::validation("loader threads must be >= 1"));
        }
        Ok(())
    }

    /// The caption layers as one overlay.
    pub fn overlay(&self) -> BeatOverlay {
        BeatOverlay {
            beats: self.beats.clone(),
            scroll_hint: self.scroll_hint.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/hero.rs"]
mod tests;
