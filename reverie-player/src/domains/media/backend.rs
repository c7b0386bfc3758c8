//! Contract for the external video-embedding API

use reverie_model::VideoId;

use crate::error::PlaybackError;

/// Opaque handle to a player created by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerHandle(pub u64);

/// The embedding API as seen by the media deck. Implementations wrap a real
/// iframe API, a native player, or a test double.
pub trait PlaybackBackend {
    /// Whether the API script/library is already present.
    fn is_api_loaded(&self) -> bool;

    /// Ask for the API to be loaded. Readiness is reported later through
    /// the page's `ApiReady` message.
    fn request_api(&mut self) -> Result<(), PlaybackError>;

    /// Create a player bound to the element slot named `slot`.
    fn create_player(
        &mut self,
        id: &VideoId,
        slot: &str,
    ) -> Result<PlayerHandle, PlaybackError>;

    fn play(
        &mut self,
        id: &VideoId,
        player: PlayerHandle,
    ) -> Result<(), PlaybackError>;

    fn pause(
        &mut self,
        id: &VideoId,
        player: PlayerHandle,
    ) -> Result<(), PlaybackError>;
}
