//! Headless host for the Reverie page engine.
//!
//! Loads a TOML page manifest, mounts a [`reverie_player::Page`] against a
//! simulated viewport and embedding API, and replays interaction scripts.

pub mod host;
pub mod inspect;
pub mod manifest;
pub mod session;

pub use manifest::{ManifestError, PageManifest};
pub use session::{Command, CommandError, RunSummary, Session};
