//! Headless host: a simulated viewport and a simulated embedding API

use std::collections::HashSet;
use std::time::Duration;

use reverie_model::VideoId;
use reverie_player::domains::carousel::{TrackFrame, TransitionAnimator};
use reverie_player::domains::media::PlayerHandle;
use reverie_player::infra::constants::carousel::transition;
use reverie_player::{PlaybackBackend, PlaybackError, ViewportHost};

/// Viewport that records every frame and plays animated ones out with a
/// [`TransitionAnimator`].
#[derive(Debug, Clone)]
pub struct SimulatedViewport {
    width: Option<f32>,
    animator: TransitionAnimator,
    frames: Vec<TrackFrame>,
    tick: Duration,
}

impl SimulatedViewport {
    pub fn new(width: Option<f32>) -> Self {
        Self {
            width,
            animator: TransitionAnimator::new(),
            frames: Vec::new(),
            tick: Duration::from_millis(transition::TICK_MS),
        }
    }

    pub fn frames(&self) -> &[TrackFrame] {
        &self.frames
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    /// Offset the track currently shows.
    pub fn shown_offset(&self) -> f32 {
        self.animator.current()
    }

    /// Tick the running tween to completion. Returns the number of ticks,
    /// or None when nothing was animating.
    pub fn play_out(&mut self) -> Option<usize> {
        if !self.animator.is_active() {
            return None;
        }
        let mut ticks = 0;
        while let Some(offset) = self.animator.tick(self.tick) {
            ticks += 1;
            log::trace!("tick {} offset={:.1}", ticks, offset);
            if !self.animator.is_active() {
                break;
            }
        }
        Some(ticks)
    }

    /// Jump the running tween to its end.
    pub fn skip_to_end(&mut self) -> bool {
        self.animator.finish().is_some()
    }
}

impl ViewportHost for SimulatedViewport {
    fn viewport_width(&self) -> Option<f32> {
        self.width
    }

    fn render(&mut self, frame: TrackFrame) {
        log::debug!("render {}", frame);
        self.animator.begin(frame);
        self.frames.push(frame);
    }
}

/// Embedding API stand-in. The API becomes loaded when the host reports it
/// ready; players for `unavailable` ids fail to create and players for
/// `stalled` ids refuse to play.
#[derive(Debug, Clone, Default)]
pub struct SimulatedBackend {
    loaded: bool,
    requested: bool,
    unavailable: HashSet<VideoId>,
    stalled: HashSet<VideoId>,
    next_handle: u64,
    playing: HashSet<VideoId>,
}

impl SimulatedBackend {
    pub fn new(unavailable: impl IntoIterator<Item = VideoId>) -> Self {
        Self {
            unavailable: unavailable.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_stalled(mut self, stalled: impl IntoIterator<Item = VideoId>) -> Self {
        self.stalled = stalled.into_iter().collect();
        self
    }

    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    pub fn was_requested(&self) -> bool {
        self.requested
    }

    pub fn is_playing(&self, id: &VideoId) -> bool {
        self.playing.contains(id)
    }
}

impl PlaybackBackend for SimulatedBackend {
    fn is_api_loaded(&self) -> bool {
        self.loaded
    }

    fn request_api(&mut self) -> Result<(), PlaybackError> {
        self.requested = true;
        log::debug!("Requested embedding API");
        Ok(())
    }

    fn create_player(
        &mut self,
        id: &VideoId,
        slot: &str,
    ) -> Result<PlayerHandle, PlaybackError> {
        if self.unavailable.contains(id) {
            return Err(PlaybackError::PlayerCreation {
                id: id.clone(),
                reason: format!("no embeddable video for slot {slot}"),
            });
        }
        self.next_handle += 1;
        Ok(PlayerHandle(self.next_handle))
    }

    fn play(
        &mut self,
        id: &VideoId,
        player: PlayerHandle,
    ) -> Result<(), PlaybackError> {
        if self.stalled.contains(id) {
            return Err(PlaybackError::Command {
                id: id.clone(),
                reason: format!("player {} stalled", player.0),
            });
        }
        self.playing.insert(id.clone());
        Ok(())
    }

    fn pause(
        &mut self,
        id: &VideoId,
        _player: PlayerHandle,
    ) -> Result<(), PlaybackError> {
        self.playing.remove(id);
        Ok(())
    }
}
