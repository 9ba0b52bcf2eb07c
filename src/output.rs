//! Physical outputs owned by an LED driver.

use crate::colors::Color;
use crate::render::{channel_writes, write_channel, write_level};
use crate::types::Polarity;
use core::convert::Infallible;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::pwm::{self, SetDutyCycle};
use log::trace;

/// The outputs of one LED, chosen at construction and fixed afterwards.
#[derive(Debug)]
pub enum Outputs<S, P> {
    /// One digital pin driving a single-color LED.
    Single(S),

    /// Three PWM channels driving an RGB LED.
    Rgb(RgbChannels<P>),
}

impl<S: OutputPin, P: SetDutyCycle> Outputs<S, P> {
    /// True for a single-color LED.
    #[inline]
    pub fn is_single(&self) -> bool {
        matches!(self, Outputs::Single(_))
    }

    /// Polarity of the wiring. Single-color LEDs are always direct.
    pub fn polarity(&self) -> Polarity {
        match self {
            Outputs::Single(_) => Polarity::Direct,
            Outputs::Rgb(channels) => channels.polarity,
        }
    }
}

/// Channels A, B and C of an RGB LED together with their wiring polarity.
///
/// All three channels share one type. Channels coming from different PWM
/// peripherals can be wrapped in an enum that implements `SetDutyCycle`.
#[derive(Debug)]
pub struct RgbChannels<P> {
    a: P,
    b: P,
    c: P,
    polarity: Polarity,
}

impl<P: SetDutyCycle> RgbChannels<P> {
    /// Groups three channels. Bits 23–16 of a color go to `a`, 15–8 to `b`
    /// and 7–0 to `c`.
    pub fn new(a: P, b: P, c: P, polarity: Polarity) -> Self {
        Self { a, b, c, polarity }
    }

    /// Wiring polarity.
    #[inline]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Writes `color` to the three channels.
    pub fn show(&mut self, color: Color) {
        let [a, b, c] = channel_writes(color, self.polarity);
        trace!("RGB {}: A={:?} B={:?} C={:?}", color, a, b, c);
        write_channel(&mut self.a, a);
        write_channel(&mut self.b, b);
        write_channel(&mut self.c, c);
    }
}

impl<S: OutputPin, P: SetDutyCycle> Outputs<S, P> {
    /// Shows the on or off phase. An RGB LED in its on phase shows `color`.
    pub(crate) fn illuminate(&mut self, lit: bool, color: Color) {
        match self {
            Outputs::Single(pin) => write_level(pin, lit),
            Outputs::Rgb(channels) => channels.show(if lit { color } else { Color::NONE }),
        }
    }
}

/// Placeholder for the digital pin of an RGB driver. Cannot be constructed.
#[derive(Debug)]
pub enum NoPin {}

impl digital::ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        match *self {}
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        match *self {}
    }
}

/// Placeholder for the PWM channels of a single-color driver. Cannot be
/// constructed.
#[derive(Debug)]
pub enum NoPwm {}

impl pwm::ErrorType for NoPwm {
    type Error = Infallible;
}

impl SetDutyCycle for NoPwm {
    fn max_duty_cycle(&self) -> u16 {
        match *self {}
    }

    fn set_duty_cycle(&mut self, _duty: u16) -> Result<(), Self::Error> {
        match *self {}
    }
}
