//! Runtime configuration for user-adjustable constants
//!
//! Fields are `Option<T>` overrides; accessors fall back to the compiled
//! constants when a field is `None`.

use std::time::Duration;

use crate::domains::carousel::{BusyPolicy, CarouselConfig, Easing};
use crate::domains::surprise::ShakeConfig;
use crate::infra::constants::{carousel, surprise};

#[derive(Debug, Default, Clone)]
pub struct RuntimeConfig {
    // ========== CAROUSEL ==========
    /// Gap between cards (px)
    pub item_gap: Option<f32>,
    /// Animated move duration (ms)
    pub transition_ms: Option<u64>,
    /// Timing curve for animated moves
    pub easing: Option<Easing>,
    /// Behavior for requests arriving mid-transition
    pub busy_policy: Option<BusyPolicy>,
    /// Bound on held-back requests under the queue policy
    pub queue_capacity: Option<usize>,

    // ========== SURPRISE ==========
    /// Shake magnitude threshold (m/s²)
    pub shake_threshold: Option<f64>,
    /// Shakes needed to reveal
    pub shakes_to_reveal: Option<u32>,
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== CAROUSEL ACCESSORS ==========

    pub fn item_gap(&self) -> f32 {
        self.item_gap.unwrap_or(carousel::layout::ITEM_GAP_PX)
    }

    pub fn transition_ms(&self) -> u64 {
        self.transition_ms
            .unwrap_or(carousel::transition::DURATION_MS)
    }

    pub fn easing(&self) -> Easing {
        self.easing.unwrap_or_default()
    }

    pub fn busy_policy(&self) -> BusyPolicy {
        self.busy_policy.unwrap_or_default()
    }

    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity
            .unwrap_or(carousel::busy::QUEUE_CAPACITY)
    }

    // ========== SURPRISE ACCESSORS ==========

    pub fn shake_threshold(&self) -> f64 {
        self.shake_threshold
            .unwrap_or(surprise::shake::THRESHOLD)
    }

    pub fn shakes_to_reveal(&self) -> u32 {
        self.shakes_to_reveal
            .unwrap_or(surprise::shake::SHAKES_TO_REVEAL)
    }

    /// Bundle carousel settings so the controller never sees RuntimeConfig.
    pub fn carousel_config(&self) -> CarouselConfig {
        CarouselConfig {
            item_gap: self.item_gap(),
            transition_duration: Duration::from_millis(self.transition_ms()),
            easing: self.easing(),
            busy_policy: self.busy_policy(),
            queue_capacity: self.queue_capacity(),
        }
    }

    pub fn shake_config(&self) -> ShakeConfig {
        ShakeConfig {
            threshold: self.shake_threshold(),
            required: self.shakes_to_reveal(),
        }
    }
}
