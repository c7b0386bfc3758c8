//! Surprise dialog
//!
//! A modal whose message starts blurred. Clicking the message, or shaking
//! the device while the modal is open, reveals it.

pub mod dialog;
pub mod messages;
pub mod shake;

pub use dialog::{ClickTarget, MessageVisibility, SurpriseDialog};
pub use messages::SurpriseMessage;
pub use shake::{ShakeConfig, ShakeDetector};
