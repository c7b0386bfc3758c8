/// Acceleration including gravity, in m/s². Axes the device did not report
/// are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Acceleration {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl Acceleration {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    /// Sum of absolute axis values. Missing axes count as zero.
    pub fn magnitude_l1(&self) -> f64 {
        [self.x, self.y, self.z]
            .into_iter()
            .map(|axis| axis.unwrap_or(0.0).abs())
            .sum()
    }
}

/// A single device-motion event. Some devices deliver events with no
/// acceleration payload at all.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionSample {
    pub acceleration_including_gravity: Option<Acceleration>,
}

impl MotionSample {
    pub fn with_acceleration(acceleration: Acceleration) -> Self {
        Self {
            acceleration_including_gravity: Some(acceleration),
        }
    }
}
