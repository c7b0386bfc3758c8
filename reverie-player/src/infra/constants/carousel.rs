//! Infinite carousel constants
//!
//! Shared defaults for track geometry and transition feel. Tuning should
//! happen here so every mounted carousel updates consistently.

/// Geometry defaults.
pub mod layout {
    /// Fixed gap between consecutive cards (px). Pitch = card width + gap.
    pub const ITEM_GAP_PX: f32 = 30.0;
    /// Most whole cards a viewport may fit. Wider viewports do not mount;
    /// K, and with it the rendered track, grows with this count.
    pub const MAX_VISIBLE_ITEMS: usize = 1024;
}

/// Animated transition defaults.
pub mod transition {
    /// Duration of a single animated move (ms).
    pub const DURATION_MS: u64 = 600;
    /// Control points of the cubic-bezier timing curve (x1, y1, x2, y2).
    pub const BEZIER: [f32; 4] = [0.25, 0.1, 0.25, 1.0];
    /// Frame step used by hosts that tick the tween themselves (~60 FPS).
    pub const TICK_MS: u64 = 16;
}

/// Behavior while a transition is in flight.
pub mod busy {
    /// Maximum number of motion requests held back under the queue policy.
    pub const QUEUE_CAPACITY: usize = 8;
}
