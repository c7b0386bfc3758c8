//! Media deck
//!
//! Wires the page's video tracks to an external embedding API: loads the
//! API once, creates one player per track when it reports ready, and routes
//! play/pause buttons to the right player.

pub mod backend;
pub mod deck;
pub mod messages;

pub use backend::{PlaybackBackend, PlayerHandle};
pub use deck::{ApiLoad, MediaDeck};
pub use messages::MediaMessage;
