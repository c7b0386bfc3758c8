//! Common imports for hosts embedding the page engine

pub use crate::domains::carousel::{
    BusyPolicy, CarouselConfig, CarouselMessage, Direction, Easing,
    InfiniteCarousel, MotionOutcome, Settle, TrackFrame, Transition,
    TransitionAnimator, ViewportHost,
};
pub use crate::domains::media::{
    MediaDeck, MediaMessage, PlaybackBackend, PlayerHandle,
};
pub use crate::domains::surprise::{
    ClickTarget, ShakeConfig, SurpriseDialog, SurpriseMessage,
};
pub use crate::error::{CarouselUnavailable, PlaybackError};
pub use crate::infra::RuntimeConfig;
pub use crate::notice::{Notice, NoticeSink};
pub use crate::page::{Feature, Page, PageMessage, PageOutcome, PageSpec};
pub use reverie_model::{
    Acceleration, Item, ItemSequence, MotionSample, VideoId,
};
