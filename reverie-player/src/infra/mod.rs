//! Compiled defaults and user-adjustable runtime configuration

pub mod constants;
pub mod runtime_config;

pub use runtime_config::RuntimeConfig;
