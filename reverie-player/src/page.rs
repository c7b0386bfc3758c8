//! Page: composition root for the three page features
//!
//! Each feature mounts on its own. A feature that cannot mount stays
//! inactive and its messages are dropped; the other features are unaffected.

use std::fmt;

use reverie_model::{Item, VideoId};

use crate::domains::carousel::{
    CarouselMessage, Direction, InfiniteCarousel, MotionOutcome, Settle,
    ViewportHost,
};
use crate::domains::media::{MediaDeck, MediaMessage, PlaybackBackend};
use crate::domains::surprise::{SurpriseDialog, SurpriseMessage};
use crate::infra::RuntimeConfig;
use crate::notice::Notice;

/// Everything the page needs to know at mount time.
#[derive(Debug, Clone, Default)]
pub struct PageSpec {
    /// Cards present on the page, in order.
    pub items: Vec<Item>,
    /// Video tracks present on the page, in order.
    pub tracks: Vec<VideoId>,
    /// Whether the page carries the surprise dialog markup.
    pub surprise: bool,
    pub config: RuntimeConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageMessage {
    Carousel(CarouselMessage),
    Media(MediaMessage),
    Surprise(SurpriseMessage),
}

impl From<CarouselMessage> for PageMessage {
    fn from(message: CarouselMessage) -> Self {
        Self::Carousel(message)
    }
}

impl From<MediaMessage> for PageMessage {
    fn from(message: MediaMessage) -> Self {
        Self::Media(message)
    }
}

impl From<SurpriseMessage> for PageMessage {
    fn from(message: SurpriseMessage) -> Self {
        Self::Surprise(message)
    }
}

/// Features that can be inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Carousel,
    Surprise,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Carousel => write!(f, "carousel"),
            Self::Surprise => write!(f, "surprise"),
        }
    }
}

/// What handling a message did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Motion(MotionOutcome),
    Settle(Settle),
    PlayersCreated(usize),
    Playback { id: VideoId, started: bool },
    Surprise { open: bool, revealed: bool },
    /// Handled by logging only.
    Logged,
    Inactive(Feature),
}

#[derive(Debug)]
pub struct Page<H, B> {
    host: H,
    backend: B,
    carousel: Option<InfiniteCarousel>,
    media: MediaDeck,
    surprise: Option<SurpriseDialog>,
    notices: Vec<Notice>,
}

impl<H, B> Page<H, B>
where
    H: ViewportHost,
    B: PlaybackBackend,
{
    pub fn mount(spec: PageSpec, mut host: H, mut backend: B) -> Self {
        let PageSpec {
            items,
            tracks,
            surprise,
            config,
        } = spec;

        let carousel = match InfiniteCarousel::mount(
            items,
            &mut host,
            config.carousel_config(),
        ) {
            Ok(carousel) => Some(carousel),
            Err(reason) => {
                log::warn!("Carousel inactive: {}", reason);
                None
            }
        };

        let mut media = MediaDeck::new(tracks);
        if let Err(err) = media.ensure_api_loaded(&mut backend) {
            log::error!("Error in video player setup: {}", err);
        }

        let surprise = surprise.then(|| SurpriseDialog::new(config.shake_config()));
        if surprise.is_none() {
            log::info!("Surprise dialog inactive: no dialog on page");
        }

        log::info!(
            "Page mounted: carousel={}, tracks={}, surprise={}",
            carousel.is_some(),
            media.tracks().len(),
            surprise.is_some()
        );

        Self {
            host,
            backend,
            carousel,
            media,
            surprise,
            notices: Vec::new(),
        }
    }

    pub fn update(&mut self, message: impl Into<PageMessage>) -> PageOutcome {
        match message.into() {
            PageMessage::Carousel(message) => self.update_carousel(message),
            PageMessage::Media(message) => self.update_media(message),
            PageMessage::Surprise(message) => self.update_surprise(message),
        }
    }

    fn update_carousel(&mut self, message: CarouselMessage) -> PageOutcome {
        let Some(carousel) = self.carousel.as_mut() else {
            log::debug!("Dropping {:?}: carousel inactive", message);
            return PageOutcome::Inactive(Feature::Carousel);
        };
        let host = &mut self.host;
        match message {
            CarouselMessage::Next => {
                PageOutcome::Motion(carousel.advance(Direction::Forward, host))
            }
            CarouselMessage::Prev => PageOutcome::Motion(carousel.retreat(host)),
            CarouselMessage::Step(direction) => {
                PageOutcome::Motion(carousel.advance(direction, host))
            }
            CarouselMessage::Search(query) => PageOutcome::Motion(carousel.search(
                &query,
                host,
                &mut self.notices,
            )),
            CarouselMessage::TransitionFinished => {
                PageOutcome::Settle(carousel.transition_finished(host))
            }
        }
    }

    fn update_media(&mut self, message: MediaMessage) -> PageOutcome {
        let backend = &mut self.backend;
        match message {
            MediaMessage::ApiReady => {
                PageOutcome::PlayersCreated(self.media.on_api_ready(backend))
            }
            MediaMessage::PlayerReady(id) => {
                self.media.on_player_ready(&id);
                PageOutcome::Logged
            }
            MediaMessage::PlayerError { id, code } => {
                self.media.on_player_error(&id, code, &mut self.notices);
                PageOutcome::Logged
            }
            MediaMessage::Play(id) => {
                let started = self.media.play(backend, &id, &mut self.notices);
                PageOutcome::Playback { id, started }
            }
            MediaMessage::Pause(id) => {
                self.media.pause(backend, &id);
                PageOutcome::Playback { id, started: false }
            }
        }
    }

    fn update_surprise(&mut self, message: SurpriseMessage) -> PageOutcome {
        let Some(dialog) = self.surprise.as_mut() else {
            log::debug!("Dropping {:?}: surprise dialog inactive", message);
            return PageOutcome::Inactive(Feature::Surprise);
        };
        match message {
            SurpriseMessage::Open => dialog.open(),
            SurpriseMessage::Close => dialog.close(),
            SurpriseMessage::OverlayClicked(target) => dialog.click_overlay(target),
            SurpriseMessage::MessageClicked => dialog.click_message(),
            SurpriseMessage::DeviceMotion(sample) => {
                dialog.on_motion(&sample);
            }
        }
        PageOutcome::Surprise {
            open: dialog.is_open(),
            revealed: dialog.is_revealed(),
        }
    }

    /// Drain notices raised since the last call.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn carousel(&self) -> Option<&InfiniteCarousel> {
        self.carousel.as_ref()
    }

    pub fn media(&self) -> &MediaDeck {
        &self.media
    }

    pub fn surprise(&self) -> Option<&SurpriseDialog> {
        self.surprise.as_ref()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
