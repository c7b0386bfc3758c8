//! MediaDeck: per-page registry of embedded video players

use std::collections::HashMap;

use reverie_model::VideoId;

use super::backend::{PlaybackBackend, PlayerHandle};
use crate::error::PlaybackError;
use crate::notice::{Notice, NoticeSink};

/// Result of [`MediaDeck::ensure_api_loaded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiLoad {
    AlreadyLoaded,
    Requested,
    /// A request was already made and readiness has not been reported yet.
    Pending,
}

#[derive(Debug, Default)]
pub struct MediaDeck {
    /// Track ids in page order.
    tracks: Vec<VideoId>,
    players: HashMap<VideoId, PlayerHandle>,
    api_requested: bool,
    api_ready: bool,
}

impl MediaDeck {
    pub fn new(tracks: Vec<VideoId>) -> Self {
        Self {
            tracks,
            ..Self::default()
        }
    }

    /// Request the embedding API unless it is already present.
    pub fn ensure_api_loaded<B>(
        &mut self,
        backend: &mut B,
    ) -> Result<ApiLoad, PlaybackError>
    where
        B: PlaybackBackend + ?Sized,
    {
        if backend.is_api_loaded() {
            return Ok(ApiLoad::AlreadyLoaded);
        }
        if self.api_requested {
            return Ok(ApiLoad::Pending);
        }
        backend.request_api()?;
        self.api_requested = true;
        log::info!("Loading video API");
        Ok(ApiLoad::Requested)
    }

    /// Create a player for every track. A failing track is logged and
    /// skipped; the rest still register. Returns the number of players
    /// created by this call.
    pub fn on_api_ready<B>(&mut self, backend: &mut B) -> usize
    where
        B: PlaybackBackend + ?Sized,
    {
        log::info!("Video API ready");
        self.api_ready = true;

        let mut created = 0;
        for id in &self.tracks {
            if self.players.contains_key(id) {
                continue;
            }
            match backend.create_player(id, &id.player_slot()) {
                Ok(handle) => {
                    self.players.insert(id.clone(), handle);
                    created += 1;
                }
                Err(err) => {
                    log::error!("Error initializing player for {}: {}", id, err);
                }
            }
        }
        created
    }

    pub fn on_player_ready(&self, id: &VideoId) {
        log::info!("Player ready for video ID: {}", id);
    }

    pub fn on_player_error<N>(&self, id: &VideoId, code: i32, notices: &mut N)
    where
        N: NoticeSink + ?Sized,
    {
        log::error!("Video player error for {}: {}", id, code);
        notices.notify(Notice::VideoUnavailable(id.clone()));
    }

    /// Start playback. Unknown ids (including every id before the API is
    /// ready) raise [`Notice::CannotPlay`]. Returns whether playback started.
    pub fn play<B, N>(
        &mut self,
        backend: &mut B,
        id: &VideoId,
        notices: &mut N,
    ) -> bool
    where
        B: PlaybackBackend + ?Sized,
        N: NoticeSink + ?Sized,
    {
        let Some(&handle) = self.players.get(id) else {
            log::error!("Player not found for video ID: {}", id);
            notices.notify(Notice::CannotPlay(id.clone()));
            return false;
        };
        match backend.play(id, handle) {
            Ok(()) => {
                log::info!("Playing video: {}", id);
                true
            }
            Err(err) => {
                log::error!("Failed to play {}: {}", id, err);
                notices.notify(Notice::CannotPlay(id.clone()));
                false
            }
        }
    }

    /// Pause playback. Unknown ids are only logged.
    pub fn pause<B>(&mut self, backend: &mut B, id: &VideoId) -> bool
    where
        B: PlaybackBackend + ?Sized,
    {
        let Some(&handle) = self.players.get(id) else {
            log::error!("Player not found for video ID: {}", id);
            return false;
        };
        match backend.pause(id, handle) {
            Ok(()) => {
                log::info!("Paused video: {}", id);
                true
            }
            Err(err) => {
                log::error!("Failed to pause {}: {}", id, err);
                false
            }
        }
    }

    pub fn tracks(&self) -> &[VideoId] {
        &self.tracks
    }

    pub fn is_registered(&self, id: &VideoId) -> bool {
        self.players.contains_key(id)
    }

    pub fn registered_count(&self) -> usize {
        self.players.len()
    }

    pub fn is_api_ready(&self) -> bool {
        self.api_ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct FakeBackend {
        loaded: bool,
        load_requests: usize,
        broken: Vec<VideoId>,
        created: Vec<String>,
        next_handle: u64,
        commands: Vec<(String, PlayerHandle)>,
    }

    impl PlaybackBackend for FakeBackend {
        fn is_api_loaded(&self) -> bool {
            self.loaded
        }

        fn request_api(&mut self) -> Result<(), PlaybackError> {
            self.load_requests += 1;
            Ok(())
        }

        fn create_player(
            &mut self,
            id: &VideoId,
            slot: &str,
        ) -> Result<PlayerHandle, PlaybackError> {
            if self.broken.contains(id) {
                return Err(PlaybackError::PlayerCreation {
                    id: id.clone(),
                    reason: "missing element".into(),
                });
            }
            self.created.push(slot.to_string());
            self.next_handle += 1;
            Ok(PlayerHandle(self.next_handle))
        }

        fn play(&mut self, id: &VideoId, player: PlayerHandle) -> Result<(), PlaybackError> {
            self.commands.push((format!("play {id}"), player));
            Ok(())
        }

        fn pause(&mut self, id: &VideoId, player: PlayerHandle) -> Result<(), PlaybackError> {
            self.commands.push((format!("pause {id}"), player));
            Ok(())
        }
    }

    fn vid(raw: &str) -> VideoId {
        VideoId::new(raw).unwrap()
    }

    #[test]
    fn api_is_requested_once() {
        let mut deck = MediaDeck::new(vec![vid("a")]);
        let mut backend = FakeBackend::default();

        assert_eq!(deck.ensure_api_loaded(&mut backend), Ok(ApiLoad::Requested));
        assert_eq!(deck.ensure_api_loaded(&mut backend), Ok(ApiLoad::Pending));
        assert_eq!(backend.load_requests, 1);

        backend.loaded = true;
        assert_eq!(
            deck.ensure_api_loaded(&mut backend),
            Ok(ApiLoad::AlreadyLoaded)
        );
    }

    #[test]
    fn failing_track_does_not_block_the_others() {
        let mut deck = MediaDeck::new(vec![vid("a"), vid("b"), vid("c")]);
        let mut backend = FakeBackend {
            broken: vec![vid("b")],
            ..FakeBackend::default()
        };

        assert_eq!(deck.on_api_ready(&mut backend), 2);
        assert!(deck.is_registered(&vid("a")));
        assert!(!deck.is_registered(&vid("b")));
        assert_eq!(backend.created, vec!["player-a", "player-c"]);

        // A second readiness report does not recreate players
        assert_eq!(deck.on_api_ready(&mut backend), 0);
    }

    #[test]
    fn play_and_pause_route_to_registered_players() {
        let mut deck = MediaDeck::new(vec![vid("a")]);
        let mut backend = FakeBackend::default();
        let mut notices = Vec::new();

        // Before readiness nothing is registered
        assert!(!deck.play(&mut backend, &vid("a"), &mut notices));
        assert_eq!(notices, vec![Notice::CannotPlay(vid("a"))]);
        notices.clear();

        deck.on_api_ready(&mut backend);
        assert!(deck.play(&mut backend, &vid("a"), &mut notices));
        assert!(deck.pause(&mut backend, &vid("a")));
        assert!(notices.is_empty());
        assert_eq!(
            backend.commands,
            vec![
                ("play a".to_string(), PlayerHandle(1)),
                ("pause a".to_string(), PlayerHandle(1))
            ]
        );
    }

    #[test]
    fn pause_of_unknown_video_is_silent() {
        let mut deck = MediaDeck::new(Vec::new());
        let mut backend = FakeBackend::default();
        assert!(!deck.pause(&mut backend, &vid("ghost")));
        assert!(backend.commands.is_empty());
    }

    #[test]
    fn player_errors_raise_unavailable_notice() {
        let deck = MediaDeck::new(vec![vid("a")]);
        let mut notices = Vec::new();
        deck.on_player_error(&vid("a"), 150, &mut notices);
        assert_eq!(notices, vec![Notice::VideoUnavailable(vid("a"))]);
    }
}
