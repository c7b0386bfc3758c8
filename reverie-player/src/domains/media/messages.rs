//! Messages for the media deck

use reverie_model::VideoId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaMessage {
    // Embedding API lifecycle
    ApiReady,
    PlayerReady(VideoId),
    PlayerError { id: VideoId, code: i32 },

    // Buttons
    Play(VideoId),
    Pause(VideoId),
}
