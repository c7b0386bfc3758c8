//! Core data model definitions shared across Reverie crates.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod item;
pub mod motion;

pub use error::ModelError;
pub use ids::VideoId;
pub use item::{Item, ItemSequence, normalize_label};
pub use motion::{Acceleration, MotionSample};
