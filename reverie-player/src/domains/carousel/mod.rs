//! Infinite carousel
//!
//! A horizontally scrolling track of memory cards that appears to loop
//! forever. The originals are padded with mirrored clones on both sides;
//! after a move lands on a clone the controller silently rebases onto the
//! matching original. State, track geometry, the controller and the
//! host-side animator live in separate modules.

pub mod animator;
pub mod controller;
pub mod messages;
pub mod state;
pub mod track;
pub mod types;

pub use animator::TransitionAnimator;
pub use controller::{InfiniteCarousel, MotionOutcome, Settle, ViewportHost};
pub use messages::CarouselMessage;
pub use state::{CarouselState, MotionRequest, MotionState};
pub use track::{DisplayTrack, TrackGeometry};
pub use types::*;
