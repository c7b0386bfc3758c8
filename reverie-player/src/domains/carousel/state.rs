//! CarouselState: position bookkeeping over the display track

use super::track::{DisplayTrack, TrackGeometry};
use super::types::{Direction, TrackFrame, Transition};

/// Transition state machine. A motion is only started from `Idle`; the
/// host's completion signal returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    #[default]
    Idle,
    /// Animating toward a display-track slot.
    Transitioning { target: usize },
}

/// A motion request as accepted from the input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionRequest {
    Step(Direction),
    /// Jump to the slot of an original item (index into the item sequence).
    JumpTo(usize),
}

#[derive(Debug, Clone)]
pub struct CarouselState {
    geometry: TrackGeometry,
    track: DisplayTrack,
    /// Index into the display track; the single source of truth. The pixel
    /// offset is always derived from it.
    position: usize,
}

impl CarouselState {
    /// Start on the first original slot.
    pub fn new(item_count: usize, geometry: TrackGeometry) -> Self {
        let track = DisplayTrack::new(item_count, geometry.clone_count);
        Self {
            geometry,
            track,
            position: track.first_original_slot(),
        }
    }

    pub fn geometry(&self) -> &TrackGeometry {
        &self.geometry
    }

    pub fn track(&self) -> &DisplayTrack {
        &self.track
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn offset(&self) -> f32 {
        self.geometry.offset_of(self.position)
    }

    pub fn frame(&self, transition: Transition) -> TrackFrame {
        TrackFrame {
            offset: self.offset(),
            transition,
        }
    }

    pub fn is_steady(&self) -> bool {
        self.track.is_steady(self.position)
    }

    /// Slot one step away from the current position. Only ever called from a
    /// steady slot, so the result stays on the track.
    pub fn step_target(&self, direction: Direction) -> usize {
        self.position
            .saturating_add_signed(direction.delta())
            .min(self.track.slot_count().saturating_sub(1))
    }

    pub fn jump_target(&self, index: usize) -> usize {
        self.track.slot_of(index)
    }

    pub(crate) fn set_position(&mut self, slot: usize) {
        debug_assert!(slot < self.track.slot_count());
        self.position = slot;
    }

    /// Move off a clone onto the matching original. Returns the slot that
    /// was left when a rebase happened.
    pub(crate) fn rebase(&mut self) -> Option<usize> {
        let steady = self.track.rebase(self.position)?;
        let from = std::mem::replace(&mut self.position, steady);
        Some(from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_state() -> CarouselState {
        CarouselState::new(10, TrackGeometry::measure(1122.0, 330.0, 1024).unwrap())
    }

    #[test]
    fn starts_on_first_original() {
        let state = reference_state();
        assert_eq!(state.position(), 4);
        assert_eq!(state.offset(), 1320.0);
        assert!(state.is_steady());
    }

    #[test]
    fn stepping_past_the_tail_rebases_to_the_head() {
        let mut state = reference_state();
        state.set_position(13);
        let target = state.step_target(Direction::Forward);
        assert_eq!(target, 14);
        state.set_position(target);
        assert!(!state.is_steady());

        assert_eq!(state.rebase(), Some(14));
        assert_eq!(state.position(), 4);
        assert_eq!(state.rebase(), None);
    }

    #[test]
    fn stepping_before_the_head_rebases_to_the_tail() {
        let mut state = reference_state();
        let target = state.step_target(Direction::Backward);
        assert_eq!(target, 3);
        state.set_position(target);

        assert_eq!(state.rebase(), Some(3));
        assert_eq!(state.position(), 13);
        assert_eq!(state.offset(), 13.0 * 330.0);
    }
}
