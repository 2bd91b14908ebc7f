use crate::foundation::core::{FrameCount, FrameIndex};
use crate::foundation::error::{HeroError, HeroResult};

/// Naming contract between the hero and the asset pipeline.
///
/// With the defaults, frame 7 lives at `/frames/frame_007.jpg`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FrameNaming {
    /// Directory holding the frames, relative to the assets root.
    pub dir: String,
    /// File name prefix before the padded index.
    pub prefix: String,
    /// Zero-padded width of the index.
    pub digits: u8,
    /// File extension without the dot.
    pub extension: String,
}

impl Default for FrameNaming {
    fn default() -> Self {
        Self {
            dir: "frames".to_string(),
            prefix: "frame_".to_string(),
            digits: 3,
            extension: "jpg".to_string(),
        }
    }
}

impl FrameNaming {
    pub fn validate(&self) -> HeroResult<()> {
        if !(1..=9).contains(&self.digits) {
            return Err(HeroError::validation("frame naming digits must be in 1..=9"));
        }
        if self.extension.is_empty() || self.extension.contains(['/', '\\', '.']) {
            return Err(HeroError::validation(
                "frame naming extension must be a bare, non-empty extension",
            ));
        }
        if self.prefix.contains(['/', '\\']) {
            return Err(HeroError::validation(
                "frame naming prefix must not contain path separators",
            ));
        }
        normalize_rel_path(&self.dir)?;
        Ok(())
    }

    /// Check that every index of `count` fits in the padded width.
    pub fn validate_for(&self, count: FrameCount) -> HeroResult<()> {
        self.validate()?;
        let width = count.last().0.to_string().len();
        if width > usize::from(self.digits) {
            return Err(HeroError::validation(format!(
                "frame count {} needs {width} digits but naming pads to {}",
                count.get(),
                self.digits
            )));
        }
        Ok(())
    }

    /// File name of a frame, e.g. `frame_007.jpg`.
    pub fn file_name(&self, idx: FrameIndex) -> String {
        format!(
            "{}{:0width$}.{}",
            self.prefix,
            idx.0,
            self.extension,
            width = usize::from(self.digits)
        )
    }

    /// Path relative to the assets root, e.g. `frames/frame_007.jpg`.
    pub fn rel_path(&self, idx: FrameIndex) -> HeroResult<String> {
        normalize_rel_path(&format!("{}/{}", self.dir, self.file_name(idx)))
    }

    /// Site-absolute URL path, e.g. `/frames/frame_007.jpg`.
    pub fn url_path(&self, idx: FrameIndex) -> HeroResult<String> {
        Ok(format!("/{}", self.rel_path(idx)?))
    }
}

/// Normalize and validate asset paths relative to the assets root.
///
/// The result uses `/` separators and drops `.` segments. Absolute paths and parent
/// traversals (`..`) are rejected.
pub fn normalize_rel_path(source: &str) -> HeroResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(HeroError::validation("asset paths must be relative"));
    }
    if s.is_empty() {
        return Err(HeroError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(HeroError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(HeroError::validation("asset path must contain a file name"));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/naming.rs"]
mod tests;
