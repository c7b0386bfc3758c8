use reverie_model::{ModelError, VideoId};
use thiserror::Error;

/// Why a carousel did not mount. The page keeps the feature inactive and
/// carries on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarouselUnavailable {
    #[error("no carousel items")]
    NoItems(#[source] ModelError),
    #[error("viewport host reported no width")]
    NoViewport,
    #[error("viewport width {0} is not usable")]
    InvalidViewport(f32),
    #[error("item pitch {0} must be positive")]
    InvalidPitch(f32),
    #[error("viewport width {width} fits more than {max} items")]
    ViewportTooWide { width: f32, max: usize },
}

/// Failures reported by the external video-embedding API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("could not create player for {id}: {reason}")]
    PlayerCreation { id: VideoId, reason: String },
    #[error("player command for {id} failed: {reason}")]
    Command { id: VideoId, reason: String },
}

/// A textual configuration value that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValueError {
    #[error("unknown easing '{0}'")]
    Easing(String),
    #[error("unknown busy policy '{0}' (expected 'ignore' or 'queue')")]
    BusyPolicy(String),
}
