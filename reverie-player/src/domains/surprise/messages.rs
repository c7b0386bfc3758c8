//! Messages for the surprise dialog

use reverie_model::MotionSample;

use super::dialog::ClickTarget;

#[derive(Debug, Clone, PartialEq)]
pub enum SurpriseMessage {
    Open,
    Close,
    /// A click somewhere inside the modal overlay.
    OverlayClicked(ClickTarget),
    MessageClicked,
    DeviceMotion(MotionSample),
}
