//! Activation control: the caller-visible toggle.
//!
//! The control only decides what the next state is and how to label itself.
//! Arming and cleanup happen in the state machine once the new state is set.

use super::state::PickerState;

/// Label shown while disarmed.
pub const DEFAULT_IDLE_LABEL: &str = "Pick";
/// Label shown while armed.
pub const DEFAULT_ARMED_LABEL: &str = "Close";

/// Two-state toggle with one label per state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationControl {
    idle_label: String,
    armed_label: String,
}

impl Default for ActivationControl {
    fn default() -> Self {
        Self::with_labels(DEFAULT_IDLE_LABEL, DEFAULT_ARMED_LABEL)
    }
}

impl ActivationControl {
    pub fn with_labels(idle: impl Into<String>, armed: impl Into<String>) -> Self {
        Self {
            idle_label: idle.into(),
            armed_label: armed.into(),
        }
    }

    /// Label reflecting `state`.
    pub fn label(&self, state: PickerState) -> &str {
        match state {
            PickerState::Disarmed => &self.idle_label,
            PickerState::Armed => &self.armed_label,
        }
    }

    /// The state a press leads to.
    pub fn press(&self, current: PickerState) -> PickerState {
        current.toggled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let control = ActivationControl::default();
        assert_eq!(control.label(PickerState::Disarmed), "Pick");
        assert_eq!(control.label(PickerState::Armed), "Close");
    }

    #[test]
    fn test_custom_labels() {
        let control = ActivationControl::with_labels("Select element", "Cancel");
        assert_eq!(control.label(PickerState::Disarmed), "Select element");
        assert_eq!(control.label(PickerState::Armed), "Cancel");
    }

    #[test]
    fn test_press_flips_state() {
        let control = ActivationControl::default();
        assert_eq!(control.press(PickerState::Disarmed), PickerState::Armed);
        assert_eq!(control.press(PickerState::Armed), PickerState::Disarmed);
    }
}
