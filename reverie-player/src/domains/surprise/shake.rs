//! Shake gesture detection from device-motion samples

use reverie_model::MotionSample;

use crate::infra::constants::surprise::shake;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeConfig {
    /// Minimum |x| + |y| + |z| (exclusive) for a sample to count.
    pub threshold: f64,
    /// Counted samples needed to fire.
    pub required: u32,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            threshold: shake::THRESHOLD,
            required: shake::SHAKES_TO_REVEAL,
        }
    }
}

/// Counts strong motion samples; fires once every `required` of them.
///
/// The counter is cumulative: samples need not be consecutive and there is
/// no time window.
#[derive(Debug, Clone, Default)]
pub struct ShakeDetector {
    config: ShakeConfig,
    count: u32,
}

impl ShakeDetector {
    pub fn new(config: ShakeConfig) -> Self {
        Self { config, count: 0 }
    }

    /// Feed one sample. Returns true when this sample completes a gesture;
    /// the counter then starts over.
    pub fn observe(&mut self, sample: &MotionSample) -> bool {
        let Some(acceleration) = sample.acceleration_including_gravity else {
            return false;
        };
        if acceleration.magnitude_l1() <= self.config.threshold {
            return false;
        }
        self.count += 1;
        log::debug!("Shake {}/{}", self.count, self.config.required);
        if self.count >= self.config.required {
            self.count = 0;
            return true;
        }
        false
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn config(&self) -> &ShakeConfig {
        &self.config
    }
}
