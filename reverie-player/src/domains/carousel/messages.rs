//! Input-surface messages for the carousel

use super::types::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselMessage {
    // Navigation
    Next,
    Prev,
    Step(Direction),
    /// Search button or Enter in the search field.
    Search(String),

    // Viewport host
    TransitionFinished,
}
