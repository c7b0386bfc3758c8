//! Behavior engine for the Reverie memories page.
//!
//! The crate is rendering-independent: the infinite carousel, the media deck
//! and the surprise dialog are plain state machines driven by messages.
//! Hosts plug in through [`ViewportHost`], [`PlaybackBackend`] and
//! [`NoticeSink`].

pub mod domains;
pub mod error;
pub mod infra;
pub mod notice;
pub mod page;
pub mod prelude;

pub use domains::carousel::ViewportHost;
pub use domains::media::PlaybackBackend;
pub use error::{CarouselUnavailable, ConfigValueError, PlaybackError};
pub use infra::RuntimeConfig;
pub use notice::{Notice, NoticeSink};
pub use page::{Feature, Page, PageMessage, PageOutcome, PageSpec};
