//! User-visible notices raised by page features

use std::fmt;

use reverie_model::VideoId;

/// A message the input surface should show to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Search was triggered with nothing but whitespace.
    EmptyQuery,
    /// No original card carries the searched label.
    MemoryNotFound,
    /// The playback API reported an error for this video.
    VideoUnavailable(VideoId),
    /// Play was requested for a video with no registered player.
    CannotPlay(VideoId),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQuery => {
                write!(f, "Please enter a memory or wish to search!")
            }
            Self::MemoryNotFound => {
                write!(f, "Memory not found! Try another one.")
            }
            Self::VideoUnavailable(id) => write!(
                f,
                "Video {id} is unavailable. Please try the external link."
            ),
            Self::CannotPlay(id) => write!(
                f,
                "Cannot play video {id}. Please try the external link."
            ),
        }
    }
}

/// Receiver of notices; the input surface in a real host.
pub trait NoticeSink {
    fn notify(&mut self, notice: Notice);
}

impl NoticeSink for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}
