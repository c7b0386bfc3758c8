use crate::error::ModelError;

/// Identifier of an embedded video, as understood by the playback API.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct VideoId(String);

impl VideoId {
    /// Build a video id from raw text. Surrounding whitespace is dropped.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ModelError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyVideoId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// DOM-style element id of the player slot for this video.
    pub fn player_slot(&self) -> String {
        format!("player-{}", self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VideoId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VideoId> for String {
    fn from(value: VideoId) -> Self {
        value.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
