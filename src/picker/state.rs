//! Picker state.

use std::fmt;

use serde::Serialize;

/// Whether a picker is currently intercepting the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PickerState {
    /// No listeners attached, no overlay mounted.
    #[default]
    Disarmed,
    /// Listeners attached, overlay mounted, cursor and scrolling overridden.
    Armed,
}

impl PickerState {
    pub fn is_armed(&self) -> bool {
        matches!(self, PickerState::Armed)
    }

    /// The opposite state.
    pub fn toggled(&self) -> Self {
        match self {
            PickerState::Disarmed => PickerState::Armed,
            PickerState::Armed => PickerState::Disarmed,
        }
    }
}

impl fmt::Display for PickerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerState::Disarmed => write!(f, "disarmed"),
            PickerState::Armed => write!(f, "armed"),
        }
    }
}

/// Counters describing what a picker has done since it was mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PickerStats {
    /// Times listeners were attached
    pub arms: u64,
    /// Times listeners were detached, by any exit path
    pub disarms: u64,
    /// Times the overlay was moved onto a hovered target
    pub highlights: u64,
    /// Confirmed selections handed to the caller
    pub selections: u64,
}
