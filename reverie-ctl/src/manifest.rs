//! Page manifest: the TOML description of a page's markup and tuning.
//!
//! ```toml
//! [viewport]
//! width = 1122.0
//!
//! [carousel]
//! busy_policy = "queue"
//!
//! [[items]]
//! label = "First Snow"
//! width = 300.0
//!
//! [[tracks]]
//! id = "dQw4w9WgXcQ"
//!
//! [surprise]
//! shakes_to_reveal = 5
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use reverie_model::{Item, VideoId};
use reverie_player::{ConfigValueError, PageSpec, RuntimeConfig};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse manifest {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value for {field}")]
    Value {
        field: &'static str,
        #[source]
        source: ConfigValueError,
    },
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageManifest {
    #[serde(default)]
    pub viewport: ViewportSection,
    #[serde(default)]
    pub carousel: CarouselSection,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub tracks: Vec<TrackEntry>,
    /// Presence of the section means the page carries the dialog.
    pub surprise: Option<SurpriseSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewportSection {
    /// Visible width in pixels. Absent means the page has no carousel
    /// viewport.
    pub width: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CarouselSection {
    pub gap: Option<f32>,
    pub transition_ms: Option<u64>,
    pub easing: Option<String>,
    pub busy_policy: Option<String>,
    pub queue_capacity: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackEntry {
    pub id: VideoId,
    /// When false the simulated API fails to create this player.
    #[serde(default = "default_available")]
    pub available: bool,
    /// When false the player is created but every play command fails.
    #[serde(default = "default_available")]
    pub playable: bool,
}

fn default_available() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurpriseSection {
    pub shake_threshold: Option<f64>,
    pub shakes_to_reveal: Option<u32>,
}

impl PageManifest {
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let raw = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: Self = toml::from_str(&raw).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "Loaded manifest {}: {} items, {} tracks",
            path.display(),
            manifest.items.len(),
            manifest.tracks.len()
        );
        Ok(manifest)
    }

    /// Validate tuning values into runtime overrides.
    pub fn runtime_config(&self) -> Result<RuntimeConfig, ManifestError> {
        let carousel = &self.carousel;
        if let Some(gap) = carousel.gap
            && (!gap.is_finite() || gap < 0.0)
        {
            return Err(ManifestError::Invalid {
                field: "carousel.gap",
                reason: format!("{gap} is not a non-negative length"),
            });
        }
        if carousel.queue_capacity == Some(0) {
            return Err(ManifestError::Invalid {
                field: "carousel.queue_capacity",
                reason: "must be at least 1".into(),
            });
        }

        let easing = carousel
            .easing
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(|source| ManifestError::Value {
                field: "carousel.easing",
                source,
            })?;
        let busy_policy = carousel
            .busy_policy
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(|source| ManifestError::Value {
                field: "carousel.busy_policy",
                source,
            })?;

        let surprise = self.surprise.clone().unwrap_or_default();
        if let Some(threshold) = surprise.shake_threshold
            && (!threshold.is_finite() || threshold < 0.0)
        {
            return Err(ManifestError::Invalid {
                field: "surprise.shake_threshold",
                reason: format!("{threshold} is not a non-negative magnitude"),
            });
        }
        if surprise.shakes_to_reveal == Some(0) {
            return Err(ManifestError::Invalid {
                field: "surprise.shakes_to_reveal",
                reason: "must be at least 1".into(),
            });
        }

        Ok(RuntimeConfig {
            item_gap: carousel.gap,
            transition_ms: carousel.transition_ms,
            easing,
            busy_policy,
            queue_capacity: carousel.queue_capacity,
            shake_threshold: surprise.shake_threshold,
            shakes_to_reveal: surprise.shakes_to_reveal,
        })
    }

    pub fn page_spec(&self) -> Result<PageSpec, ManifestError> {
        Ok(PageSpec {
            items: self.items.clone(),
            tracks: self.tracks.iter().map(|t| t.id.clone()).collect(),
            surprise: self.surprise.is_some(),
            config: self.runtime_config()?,
        })
    }

    /// Tracks the simulated API should refuse to create players for.
    pub fn unavailable_tracks(&self) -> Vec<VideoId> {
        self.tracks
            .iter()
            .filter(|t| !t.available)
            .map(|t| t.id.clone())
            .collect()
    }

    /// Tracks whose simulated players refuse to play.
    pub fn stalled_tracks(&self) -> Vec<VideoId> {
        self.tracks
            .iter()
            .filter(|t| !t.playable)
            .map(|t| t.id.clone())
            .collect()
    }
}

/// Load `.env` from the working directory when present.
pub fn load_env_file() -> Result<Option<PathBuf>, ManifestError> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(err.into()),
    }
}
