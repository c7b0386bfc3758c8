//! Infinite carousel controller
//!
//! Owns the item sequence, the display track and the transition state
//! machine. Rendering goes out through [`ViewportHost`]; the host reports back
//! with [`InfiniteCarousel::transition_finished`] once an animated frame has
//! played out. Rebases after a wrap are rendered without a transition, on a
//! slot that shows the same card, so the seam never shows.

use std::collections::VecDeque;

use reverie_model::{Item, ItemSequence};

use super::state::{CarouselState, MotionRequest, MotionState};
use super::track::{DisplayTrack, TrackGeometry};
use super::types::{BusyPolicy, CarouselConfig, Direction, TrackFrame, Transition};
use crate::error::CarouselUnavailable;
use crate::infra::constants::carousel::layout;
use crate::notice::{Notice, NoticeSink};

/// Rendering surface for the track.
pub trait ViewportHost {
    /// Pixel width of the visible region, or None when there is no viewport.
    fn viewport_width(&self) -> Option<f32>;

    /// Move the track. Animated frames must be followed by exactly one
    /// completion signal once they finish.
    fn render(&mut self, frame: TrackFrame);
}

/// Result of a motion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionOutcome {
    /// An animated transition toward `target` was rendered.
    Started { target: usize },
    /// Held back until the current transition settles.
    Queued,
    /// Dropped because a transition is in flight (or the queue is full).
    Ignored,
    /// Already at the requested slot; nothing rendered.
    Unchanged,
    /// The request was invalid; a notice was raised.
    Rejected,
}

/// Result of a completion signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// No transition was in flight; the signal was ignored.
    Stray,
    Settled {
        /// Slot the transition landed on, after any rebase.
        position: usize,
        /// Whether the position was rebased off a clone.
        rebased: bool,
        /// Outcome of the queued request replayed afterwards, if any.
        resumed: Option<MotionOutcome>,
    },
}

#[derive(Debug)]
pub struct InfiniteCarousel {
    items: ItemSequence,
    config: CarouselConfig,
    state: CarouselState,
    motion: MotionState,
    pending: VecDeque<MotionRequest>,
}

impl InfiniteCarousel {
    /// Measure the viewport once, lay out the track and snap to the first
    /// original item.
    pub fn mount<H>(
        items: Vec<Item>,
        host: &mut H,
        config: CarouselConfig,
    ) -> Result<Self, CarouselUnavailable>
    where
        H: ViewportHost + ?Sized,
    {
        let items = ItemSequence::new(items).map_err(CarouselUnavailable::NoItems)?;
        let viewport_width =
            host.viewport_width().ok_or(CarouselUnavailable::NoViewport)?;
        if !viewport_width.is_finite() || viewport_width < 0.0 {
            return Err(CarouselUnavailable::InvalidViewport(viewport_width));
        }
        let pitch = items.leading_width() + config.item_gap;
        if !pitch.is_finite() || pitch <= 0.0 {
            return Err(CarouselUnavailable::InvalidPitch(pitch));
        }

        let geometry = TrackGeometry::measure(viewport_width, pitch, layout::MAX_VISIBLE_ITEMS)
            .ok_or(CarouselUnavailable::ViewportTooWide {
                width: viewport_width,
                max: layout::MAX_VISIBLE_ITEMS,
            })?;
        let state = CarouselState::new(items.len(), geometry);

        log::debug!(
            "Carousel mounted: items={}, pitch={}, visible={}, clones={}, position={}",
            items.len(),
            geometry.pitch,
            geometry.visible_count,
            geometry.clone_count,
            state.position()
        );

        host.render(state.frame(Transition::None));

        Ok(Self {
            items,
            config,
            state,
            motion: MotionState::Idle,
            pending: VecDeque::new(),
        })
    }

    /// Move one slot in `direction`.
    pub fn advance<H>(&mut self, direction: Direction, host: &mut H) -> MotionOutcome
    where
        H: ViewportHost + ?Sized,
    {
        self.request(MotionRequest::Step(direction), host)
    }

    /// Move one slot backward.
    pub fn retreat<H>(&mut self, host: &mut H) -> MotionOutcome
    where
        H: ViewportHost + ?Sized,
    {
        self.advance(Direction::Backward, host)
    }

    /// Jump to the first original whose label matches `query` (trimmed,
    /// case-insensitive). Clones are never searched.
    pub fn search<H, N>(
        &mut self,
        query: &str,
        host: &mut H,
        notices: &mut N,
    ) -> MotionOutcome
    where
        H: ViewportHost + ?Sized,
        N: NoticeSink + ?Sized,
    {
        if query.trim().is_empty() {
            notices.notify(Notice::EmptyQuery);
            return MotionOutcome::Rejected;
        }
        match self.items.position_of_label(query) {
            Some(index) => self.request(MotionRequest::JumpTo(index), host),
            None => {
                log::debug!("Carousel search missed: {:?}", query.trim());
                notices.notify(Notice::MemoryNotFound);
                MotionOutcome::Rejected
            }
        }
    }

    /// Completion signal from the host for the in-flight transition.
    pub fn transition_finished<H>(&mut self, host: &mut H) -> Settle
    where
        H: ViewportHost + ?Sized,
    {
        let MotionState::Transitioning { target } = self.motion else {
            log::debug!("Ignoring stray transition completion while idle");
            return Settle::Stray;
        };
        self.motion = MotionState::Idle;
        debug_assert_eq!(target, self.state.position());

        let rebased = match self.state.rebase() {
            Some(from) => {
                log::debug!(
                    "Carousel rebased {} -> {}",
                    from,
                    self.state.position()
                );
                host.render(self.state.frame(Transition::None));
                true
            }
            None => false,
        };

        let position = self.state.position();
        let mut resumed = None;
        while let Some(request) = self.pending.pop_front() {
            let outcome = self.begin(request, host);
            resumed = Some(outcome);
            if matches!(outcome, MotionOutcome::Started { .. }) {
                break;
            }
        }

        Settle::Settled {
            position,
            rebased,
            resumed,
        }
    }

    fn request<H>(&mut self, request: MotionRequest, host: &mut H) -> MotionOutcome
    where
        H: ViewportHost + ?Sized,
    {
        if self.motion == MotionState::Idle {
            return self.begin(request, host);
        }
        match self.config.busy_policy {
            BusyPolicy::Ignore => {
                log::debug!("Carousel busy; ignoring {:?}", request);
                MotionOutcome::Ignored
            }
            BusyPolicy::Queue if self.pending.len() < self.config.queue_capacity => {
                self.pending.push_back(request);
                MotionOutcome::Queued
            }
            BusyPolicy::Queue => {
                log::warn!(
                    "Carousel queue full ({}); dropping {:?}",
                    self.config.queue_capacity,
                    request
                );
                MotionOutcome::Ignored
            }
        }
    }

    fn begin<H>(&mut self, request: MotionRequest, host: &mut H) -> MotionOutcome
    where
        H: ViewportHost + ?Sized,
    {
        let target = match request {
            MotionRequest::Step(direction) => self.state.step_target(direction),
            MotionRequest::JumpTo(index) => self.state.jump_target(index),
        };
        if target == self.state.position() {
            return MotionOutcome::Unchanged;
        }

        self.state.set_position(target);
        self.motion = MotionState::Transitioning { target };
        host.render(self.state.frame(self.config.animated()));
        MotionOutcome::Started { target }
    }

    pub fn position(&self) -> usize {
        self.state.position()
    }

    pub fn offset(&self) -> f32 {
        self.state.offset()
    }

    /// Frame describing where the track currently rests (or is heading).
    pub fn frame(&self) -> TrackFrame {
        self.state.frame(Transition::None)
    }

    pub fn geometry(&self) -> &TrackGeometry {
        self.state.geometry()
    }

    pub fn display_track(&self) -> &DisplayTrack {
        self.state.track()
    }

    pub fn clone_count(&self) -> usize {
        self.state.geometry().clone_count
    }

    pub fn visible_count(&self) -> usize {
        self.state.geometry().visible_count
    }

    /// Number of original items (N).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &ItemSequence {
        &self.items
    }

    /// Original item shown at the current position.
    pub fn current_item(&self) -> Option<&Item> {
        self.state
            .track()
            .original_at(self.state.position())
            .and_then(|index| self.items.get(index))
    }

    pub fn motion(&self) -> MotionState {
        self.motion
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.motion, MotionState::Transitioning { .. })
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }
}
