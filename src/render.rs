//! Translation of colors and on/off phases into channel writes.
//!
//! The mapping itself ([`intensities`], [`channel_writes`]) is pure; the
//! `write_*` helpers issue the result to `embedded-hal` outputs. HAL errors
//! are logged and dropped since nothing upstream can act on them.

use crate::colors::Color;
use crate::types::Polarity;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use log::{trace, warn};
use palette::Srgb;

/// Full-scale value of an 8-bit channel intensity.
pub const PWM_FULL_SCALE: u8 = u8::MAX;

/// A single command for one output channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelWrite {
    /// Solid high, no modulation.
    High,

    /// Solid low, no modulation.
    Low,

    /// Duty cycle of `n / 255`, strictly between 0 and 255.
    Duty(u8),
}

impl ChannelWrite {
    /// Picks the write for an already polarity-adjusted intensity.
    ///
    /// The extremes become solid writes so the PWM peripheral never has to
    /// produce a 0% or 100% duty cycle.
    #[inline]
    pub const fn from_intensity(intensity: u8) -> Self {
        match intensity {
            PWM_FULL_SCALE => ChannelWrite::High,
            0 => ChannelWrite::Low,
            duty => ChannelWrite::Duty(duty),
        }
    }
}

/// Splits `color` into its three channel intensities after applying
/// `polarity`.
pub fn intensities(color: Color, polarity: Polarity) -> Srgb<u8> {
    Srgb::new(
        polarity.apply(color.red()),
        polarity.apply(color.green()),
        polarity.apply(color.blue()),
    )
}

/// Computes the writes for channels A, B and C.
pub fn channel_writes(color: Color, polarity: Polarity) -> [ChannelWrite; 3] {
    let rgb = intensities(color, polarity);
    [
        ChannelWrite::from_intensity(rgb.red),
        ChannelWrite::from_intensity(rgb.green),
        ChannelWrite::from_intensity(rgb.blue),
    ]
}

/// Issues `write` to a PWM channel.
pub fn write_channel<P: SetDutyCycle>(channel: &mut P, write: ChannelWrite) {
    let result = match write {
        ChannelWrite::High => channel.set_duty_cycle_fully_on(),
        ChannelWrite::Low => channel.set_duty_cycle_fully_off(),
        ChannelWrite::Duty(duty) => {
            channel.set_duty_cycle_fraction(u16::from(duty), u16::from(PWM_FULL_SCALE))
        }
    };
    if let Err(e) = result {
        warn!("PWM write {:?} failed: {:?}", write, e);
    }
}

/// Drives a single-color LED pin. No polarity adjustment applies.
pub fn write_level<S: OutputPin>(pin: &mut S, lit: bool) {
    trace!("single LED {}", if lit { "on" } else { "off" });
    let result = if lit { pin.set_high() } else { pin.set_low() };
    if let Err(e) = result {
        warn!("pin write failed: {:?}", e);
    }
}
