//! Page features, one module per domain

pub mod carousel;
pub mod media;
pub mod surprise;
