//! SurpriseDialog: modal state and reveal logic

use reverie_model::MotionSample;

use super::shake::{ShakeConfig, ShakeDetector};

/// Blur state of the hidden message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageVisibility {
    #[default]
    Blurred,
    Revealed,
}

/// Where a click inside the modal overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed backdrop itself.
    Backdrop,
    /// Anything inside the dialog content.
    Content,
}

#[derive(Debug, Clone)]
pub struct SurpriseDialog {
    open: bool,
    message: MessageVisibility,
    /// The "shake to reveal" hint; hidden for good after the first reveal.
    hint_visible: bool,
    shake: ShakeDetector,
}

impl Default for SurpriseDialog {
    fn default() -> Self {
        Self::new(ShakeConfig::default())
    }
}

impl SurpriseDialog {
    pub fn new(config: ShakeConfig) -> Self {
        Self {
            open: false,
            message: MessageVisibility::Blurred,
            hint_visible: true,
            shake: ShakeDetector::new(config),
        }
    }

    /// Open the modal with the message blurred again.
    pub fn open(&mut self) {
        self.open = true;
        self.message = MessageVisibility::Blurred;
        log::info!("Opened surprise modal");
    }

    pub fn close(&mut self) {
        self.open = false;
        log::info!("Closed surprise modal");
    }

    /// Clicks on the backdrop close the modal; clicks on content do not.
    pub fn click_overlay(&mut self, target: ClickTarget) {
        if self.open && target == ClickTarget::Backdrop {
            self.open = false;
            log::info!("Closed surprise modal by clicking outside");
        }
    }

    pub fn click_message(&mut self) {
        self.reveal();
    }

    pub fn reveal(&mut self) {
        self.message = MessageVisibility::Revealed;
        self.hint_visible = false;
        log::info!("Revealed surprise message");
    }

    /// Feed a device-motion sample. Only counts while the modal is open.
    /// Returns true when the sample triggered a reveal.
    pub fn on_motion(&mut self, sample: &MotionSample) -> bool {
        if !self.open {
            return false;
        }
        if self.shake.observe(sample) {
            self.reveal();
            return true;
        }
        false
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn message(&self) -> MessageVisibility {
        self.message
    }

    pub fn is_revealed(&self) -> bool {
        self.message == MessageVisibility::Revealed
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn shake_count(&self) -> u32 {
        self.shake.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reverie_model::Acceleration;

    fn hard_shake() -> MotionSample {
        MotionSample::with_acceleration(Acceleration::new(14.0, -8.0, 9.8))
    }

    #[test]
    fn shaking_an_open_dialog_reveals_the_message() {
        let mut dialog = SurpriseDialog::new(ShakeConfig::default());
        dialog.open();
        assert!(dialog.hint_visible());

        let fired: Vec<bool> = (0..5).map(|_| dialog.on_motion(&hard_shake())).collect();
        assert_eq!(fired, vec![false, false, false, false, true]);
        assert!(dialog.is_revealed());
        assert!(!dialog.hint_visible());
        assert_eq!(dialog.shake_count(), 0);
    }

    #[test]
    fn shakes_while_closed_are_ignored() {
        let mut dialog = SurpriseDialog::new(ShakeConfig::default());
        for _ in 0..10 {
            assert!(!dialog.on_motion(&hard_shake()));
        }
        assert_eq!(dialog.shake_count(), 0);
        assert_eq!(dialog.message(), MessageVisibility::Blurred);
    }

    #[test]
    fn shake_progress_survives_closing() {
        let mut dialog = SurpriseDialog::new(ShakeConfig::default());
        dialog.open();
        for _ in 0..3 {
            dialog.on_motion(&hard_shake());
        }
        dialog.close();
        dialog.open();
        assert_eq!(dialog.shake_count(), 3);
        dialog.on_motion(&hard_shake());
        assert!(dialog.on_motion(&hard_shake()));
    }

    #[test]
    fn reopening_blurs_but_hint_stays_hidden() {
        let mut dialog = SurpriseDialog::new(ShakeConfig::default());
        dialog.open();
        dialog.click_message();
        assert!(dialog.is_revealed());

        dialog.close();
        dialog.open();
        assert_eq!(dialog.message(), MessageVisibility::Blurred);
        assert!(!dialog.hint_visible());
    }

    #[test]
    fn only_backdrop_clicks_close() {
        let mut dialog = SurpriseDialog::new(ShakeConfig::default());
        dialog.open();
        dialog.click_overlay(ClickTarget::Content);
        assert!(dialog.is_open());
        dialog.click_overlay(ClickTarget::Backdrop);
        assert!(!dialog.is_open());
    }
}
