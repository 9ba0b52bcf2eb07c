//! Command-based control for LED drivers.

use crate::colors::Color;
use crate::sequence::ColorSequence;
use crate::time::Interval;
use crate::types::Mode;

/// Actions for controlling an LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedAction {
    /// Switch display mode.
    SetMode(Mode, Interval),
    /// Set the on-phase color.
    SetColor(Color),
    /// Set the alternation sequence.
    SetColorSequence(ColorSequence),
    /// Alternate between two colors.
    SetAlternatingColors(Color, Color),
}

impl LedAction {
    /// Switch to `mode` with the default interval.
    pub fn mode(mode: Mode) -> Self {
        LedAction::SetMode(mode, Interval::default())
    }
}

/// Command targeting a specific LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedCommand<Id> {
    pub led_id: Id,
    pub action: LedAction,
}

impl<Id> LedCommand<Id> {
    /// Creates command.
    pub fn new(led_id: Id, action: LedAction) -> Self {
        Self { led_id, action }
    }
}
