//! Shared types for the infinite carousel module

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigValueError;
use crate::infra::constants::carousel::{busy, layout, transition};

/// Timing curve for animated transitions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// CSS-style cubic-bezier with control points (x1, y1, x2, y2).
    CubicBezier([f32; 4]),
}

impl Default for Easing {
    fn default() -> Self {
        Self::CubicBezier(transition::BEZIER)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::EaseIn => write!(f, "ease-in"),
            Self::EaseOut => write!(f, "ease-out"),
            Self::EaseInOut => write!(f, "ease-in-out"),
            Self::CubicBezier([x1, y1, x2, y2]) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

impl FromStr for Easing {
    type Err = ConfigValueError;

    /// Accepts `linear`, `ease-in`, `ease-out`, `ease-in-out`, `ease`
    /// (the default curve) and `cubic-bezier(x1, y1, x2, y2)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().to_ascii_lowercase();
        match raw.as_str() {
            "linear" => return Ok(Self::Linear),
            "ease-in" => return Ok(Self::EaseIn),
            "ease-out" => return Ok(Self::EaseOut),
            "ease-in-out" => return Ok(Self::EaseInOut),
            "ease" => return Ok(Self::default()),
            _ => {}
        }

        let invalid = || ConfigValueError::Easing(s.trim().to_string());
        let args = raw
            .strip_prefix("cubic-bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let points = args
            .split(',')
            .map(|part| part.trim().parse::<f32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;
        let [x1, y1, x2, y2] = <[f32; 4]>::try_from(points).map_err(|_| invalid())?;
        // x control points must stay inside [0, 1] for the curve to be a function of time
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(invalid());
        }
        Ok(Self::CubicBezier([x1, y1, x2, y2]))
    }
}

/// How the viewport should move to a new offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    /// Instant snap. Used for the initial layout and for rebases.
    None,
    Animated { duration: Duration, easing: Easing },
}

impl Transition {
    pub fn is_animated(&self) -> bool {
        matches!(self, Self::Animated { .. })
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Animated { duration, easing } => {
                write!(f, "transform {}s {}", duration.as_secs_f32(), easing)
            }
        }
    }
}

/// One render instruction for the viewport host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackFrame {
    /// Leftward translation of the track in pixels.
    pub offset: f32,
    pub transition: Transition,
}

impl TrackFrame {
    pub fn snap(offset: f32) -> Self {
        Self {
            offset,
            transition: Transition::None,
        }
    }
}

impl fmt::Display for TrackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translateX(-{}px) transition={}",
            self.offset, self.transition
        )
    }
}

/// Direction of a single-step move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn delta(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// Map a signed step (+1 / -1) to a direction. Zero has no direction.
    pub fn from_sign(step: i32) -> Option<Self> {
        match step.signum() {
            1 => Some(Self::Forward),
            -1 => Some(Self::Backward),
            _ => None,
        }
    }
}

/// What the controller does with motion requests while a transition is in
/// flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BusyPolicy {
    /// Drop the request.
    #[default]
    Ignore,
    /// Hold the request and replay it once the current transition settles.
    Queue,
}

impl fmt::Display for BusyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignore => write!(f, "ignore"),
            Self::Queue => write!(f, "queue"),
        }
    }
}

impl FromStr for BusyPolicy {
    type Err = ConfigValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "queue" => Ok(Self::Queue),
            other => Err(ConfigValueError::BusyPolicy(other.to_string())),
        }
    }
}

/// Static configuration for a carousel instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Gap between cards; the pitch is the leading card width plus this.
    pub item_gap: f32,
    pub transition_duration: Duration,
    pub easing: Easing,
    pub busy_policy: BusyPolicy,
    /// Bound on held-back requests under [`BusyPolicy::Queue`].
    pub queue_capacity: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_gap: layout::ITEM_GAP_PX,
            transition_duration: Duration::from_millis(transition::DURATION_MS),
            easing: Easing::default(),
            busy_policy: BusyPolicy::default(),
            queue_capacity: busy::QUEUE_CAPACITY,
        }
    }
}

impl CarouselConfig {
    /// The transition used for every user-driven move.
    pub fn animated(&self) -> Transition {
        Transition::Animated {
            duration: self.transition_duration,
            easing: self.easing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_and_bezier_easings() {
        assert_eq!("Linear".parse::<Easing>().unwrap(), Easing::Linear);
        assert_eq!("ease".parse::<Easing>().unwrap(), Easing::default());
        assert_eq!(
            "cubic-bezier(0.4, 0, 0.2, 1)".parse::<Easing>().unwrap(),
            Easing::CubicBezier([0.4, 0.0, 0.2, 1.0])
        );
        assert!("cubic-bezier(1.5, 0, 0.2, 1)".parse::<Easing>().is_err());
        assert!("cubic-bezier(0.1, 0.2)".parse::<Easing>().is_err());
        assert!("bouncy".parse::<Easing>().is_err());
    }

    #[test]
    fn default_transition_renders_like_a_css_declaration() {
        let config = CarouselConfig::default();
        assert_eq!(
            config.animated().to_string(),
            "transform 0.6s cubic-bezier(0.25, 0.1, 0.25, 1)"
        );
        assert_eq!(Transition::None.to_string(), "none");
        assert_eq!(
            TrackFrame::snap(1320.0).to_string(),
            "translateX(-1320px) transition=none"
        );
    }

    #[test]
    fn direction_from_sign() {
        assert_eq!(Direction::from_sign(1), Some(Direction::Forward));
        assert_eq!(Direction::from_sign(-3), Some(Direction::Backward));
        assert_eq!(Direction::from_sign(0), None);
    }
}
