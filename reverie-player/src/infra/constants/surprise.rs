//! Surprise dialog constants

/// Shake gesture detection.
pub mod shake {
    /// A motion sample counts as a shake when |x| + |y| + |z| exceeds this (m/s²).
    pub const THRESHOLD: f64 = 20.0;
    /// Shakes needed to reveal the message.
    pub const SHAKES_TO_REVEAL: u32 = 5;
}
