use thiserror::Error;

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("item sequence must contain at least one item")]
    EmptySequence,
    #[error("item {index} has an invalid width {width}")]
    InvalidItemWidth { index: usize, width: f32 },
    #[error("video id must not be empty")]
    EmptyVideoId,
}
