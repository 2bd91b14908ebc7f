/// Convenience result alias used across the crate.
pub type HeroResult<T> = Result<T, HeroError>;

/// Error type for configuration, asset, and rendering failures.
///
/// Nothing on the per-tick path returns this type: a missing frame or an unavailable drawing
/// surface degrades to a no-op paint instead.
#[derive(thiserror::Error, Debug)]
pub enum HeroError {
    /// A value or configuration failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A frame asset could not be fetched or decoded.
    #[error("asset error: {0}")]
    Asset(String),

    /// The renderer or the loader's worker pool could not be set up.
    #[error("render error: {0}")]
    Render(String),

    /// A configuration file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped error from a lower-level library.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HeroError {
    /// Build a [`HeroError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HeroError::Asset`].
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`HeroError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`HeroError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
