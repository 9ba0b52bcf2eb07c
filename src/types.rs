//! Core types describing what an LED should display.

/// Display mode of an LED.
///
/// The blink modes name the phase the LED starts in, which lets two LEDs
/// blink in opposition when given the same interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// Steady off.
    #[default]
    Off = 0,

    /// Steady on.
    On = 1,

    /// Blink, starting in the off phase.
    BlinkFromOff = 2,

    /// Blink, starting in the on phase.
    BlinkFromOn = 3,

    /// Walk through the configured color sequence. RGB only.
    Alternate = 4,
}

impl Mode {
    /// Converts a raw mode value. Returns `None` for values outside the set.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Mode::Off),
            1 => Some(Mode::On),
            2 => Some(Mode::BlinkFromOff),
            3 => Some(Mode::BlinkFromOn),
            4 => Some(Mode::Alternate),
            _ => None,
        }
    }

    /// The per-tick operation this mode needs, if it needs the timer at all.
    pub const fn tick_handler(self) -> Option<TickHandler> {
        match self {
            Mode::Off | Mode::On => None,
            Mode::BlinkFromOff | Mode::BlinkFromOn => Some(TickHandler::Toggle),
            Mode::Alternate => Some(TickHandler::Alternate),
        }
    }

    /// True if this mode keeps the periodic timer armed.
    #[inline]
    pub const fn is_periodic(self) -> bool {
        self.tick_handler().is_some()
    }
}

/// Operation dispatched on each timer expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickHandler {
    /// Flip between the on and off phase.
    Toggle,

    /// Show the next color of the sequence.
    Alternate,
}

/// Wiring of an RGB LED as requested at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedType {
    /// Common anode: channels are active low.
    Anode,

    /// Common cathode: channels are active high.
    #[default]
    Cathode,

    /// Single-color LED. Not meaningful for three channels and treated as
    /// [`LedType::Cathode`] there.
    Single,
}

/// Relationship between output value and brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Higher value is brighter.
    #[default]
    Direct,

    /// Higher value is dimmer.
    Inverted,
}

impl Polarity {
    /// Adjusts a channel intensity for this polarity.
    #[inline]
    pub const fn apply(self, intensity: u8) -> u8 {
        match self {
            Polarity::Direct => intensity,
            Polarity::Inverted => u8::MAX - intensity,
        }
    }
}

impl From<LedType> for Polarity {
    fn from(led_type: LedType) -> Self {
        match led_type {
            LedType::Anode => Polarity::Inverted,
            LedType::Cathode | LedType::Single => Polarity::Direct,
        }
    }
}
