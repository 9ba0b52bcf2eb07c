//! Timer-driven LED driver with mode management.
//!
//! Provides [`Led`], which owns the outputs of one single-color or RGB LED
//! and the periodic timer that animates it, and keeps both in step with the
//! requested [`Mode`].

use crate::colors::Color;
use crate::command::LedAction;
use crate::output::{NoPin, NoPwm, Outputs, RgbChannels};
use crate::sequence::ColorSequence;
use crate::time::{Interval, PeriodicTimer};
use crate::types::{LedType, Mode, Polarity, TickHandler};
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use log::{debug, trace};

/// Controls a single LED (one pin or three PWM channels) through display
/// modes.
///
/// Each driver owns its outputs and its timer. Changing the mode disarms the
/// timer before anything else changes, applies the first frame of the new
/// mode immediately, and re-arms the timer for modes that animate. The
/// platform's timer interrupt then calls [`Led::on_timer`] on every expiry.
///
/// Methods take `&mut self`, so a driver reachable from both an interrupt
/// handler and foreground code must be wrapped in a
/// [`SharedLed`](crate::SharedLed), which runs every call inside a critical
/// section.
///
/// # Type Parameters
/// * `S` - Digital pin of a single-color LED ([`NoPin`] for RGB)
/// * `P` - PWM channel type of an RGB LED ([`NoPwm`] for single-color)
/// * `T` - Periodic timer dedicated to this LED
pub struct Led<S: OutputPin, P: SetDutyCycle, T: PeriodicTimer> {
    outputs: Outputs<S, P>,
    timer: T,
    mode: Mode,
    illuminated: bool,
    active_color: Color,
    sequence: ColorSequence,
    sequence_index: usize,
    tick_handler: Option<TickHandler>,
}

impl<S: OutputPin, T: PeriodicTimer> Led<S, NoPwm, T> {
    /// Creates a single-color driver. The LED starts off.
    ///
    /// `pin` must already be configured as an output by the HAL.
    pub fn single(pin: S, timer: T) -> Self {
        Self::from_outputs(Outputs::Single(pin), timer)
    }
}

impl<P: SetDutyCycle, T: PeriodicTimer> Led<NoPin, P, T> {
    /// Creates an RGB driver. The LED starts off, with white as its color.
    ///
    /// `LedType::Single` makes no sense for three channels and is treated as
    /// [`LedType::Cathode`].
    pub fn rgb(a: P, b: P, c: P, timer: T, led_type: LedType) -> Self {
        let polarity = Polarity::from(led_type);
        debug!("RGB LED with {:?} polarity", polarity);
        Self::from_outputs(Outputs::Rgb(RgbChannels::new(a, b, c, polarity)), timer)
    }
}

impl<S: OutputPin, P: SetDutyCycle, T: PeriodicTimer> Led<S, P, T> {
    fn from_outputs(mut outputs: Outputs<S, P>, timer: T) -> Self {
        outputs.illuminate(false, Color::NONE);

        Self {
            outputs,
            timer,
            mode: Mode::Off,
            illuminated: false,
            active_color: Color::WHITE,
            sequence: ColorSequence::single(Color::WHITE),
            sequence_index: 0,
            tick_handler: None,
        }
    }

    /// Switches to `mode`, animating every `interval_ms` milliseconds where
    /// the mode animates.
    ///
    /// Intervals below [`MIN_INTERVAL_MS`](crate::MIN_INTERVAL_MS) are
    /// raised to it. [`Mode::Alternate`] on a single-color LED cannot be
    /// displayed: the timer is still stopped and the LED keeps its current
    /// output, settling into [`Mode::On`] or [`Mode::Off`] to match it.
    pub fn set_mode(&mut self, mode: Mode, interval_ms: u32) {
        self.disarm();
        let interval = Interval::from_millis(interval_ms);

        if mode == Mode::Alternate && self.outputs.is_single() {
            debug!("alternate mode needs an RGB LED, holding current output");
            self.settle();
            return;
        }

        debug!("mode {:?}, interval {} ms", mode, interval.as_millis());
        self.mode = mode;
        self.active_color = self.sequence.first();

        match mode {
            Mode::Off | Mode::BlinkFromOff => {
                self.illuminated = false;
                self.outputs.illuminate(false, self.active_color);
            }
            Mode::On | Mode::BlinkFromOn => {
                self.illuminated = true;
                self.outputs.illuminate(true, self.active_color);
            }
            Mode::Alternate => {
                self.illuminated = true;
                self.outputs.illuminate(true, self.active_color);
                self.sequence_index = self.sequence.advance(0);
            }
        }

        if let Some(handler) = mode.tick_handler() {
            self.arm(handler, interval);
        }
    }

    /// Like [`Led::set_mode`] with a raw mode value.
    ///
    /// Values outside the known set stop the timer and otherwise change
    /// nothing, settling the mode as described for [`Led::set_mode`].
    pub fn set_mode_raw(&mut self, raw: u8, interval_ms: u32) {
        match Mode::from_raw(raw) {
            Some(mode) => self.set_mode(mode, interval_ms),
            None => {
                self.disarm();
                debug!("unknown mode {}, holding current output", raw);
                self.settle();
            }
        }
    }

    /// Handles a timer expiry by running the registered per-tick operation.
    ///
    /// Call this from the timer's interrupt handler. The expiry is first
    /// acknowledged with the timer: an interrupt left over from before the
    /// last [`Led::set_mode`] is rejected there and ignored, as is any
    /// expiry while nothing is registered.
    pub fn on_timer(&mut self) {
        if !self.timer.acknowledge() {
            trace!("no expiry of the current arming pending");
            return;
        }

        match self.tick_handler {
            Some(TickHandler::Toggle) => self.toggle(),
            Some(TickHandler::Alternate) => self.alternate(),
            None => {}
        }
    }

    /// Handles a control action by dispatching to the matching method.
    pub fn handle_action(&mut self, action: LedAction) {
        match action {
            LedAction::SetMode(mode, interval) => self.set_mode(mode, interval.as_millis()),
            LedAction::SetColor(color) => self.set_color(color),
            LedAction::SetColorSequence(sequence) => self.replace_sequence(sequence),
            LedAction::SetAlternatingColors(first, second) => {
                self.set_alternating_colors(first, second)
            }
        }
    }

    /// Sets the color shown in the on phase. Ignored for single-color LEDs.
    ///
    /// Replaces the color sequence with this one color. The output is not
    /// touched; the color shows from the next frame on.
    pub fn set_color(&mut self, color: Color) {
        self.replace_sequence(ColorSequence::single(color));
    }

    /// Sets up to [`MAX_SEQUENCE_COLORS`](crate::MAX_SEQUENCE_COLORS) colors
    /// for [`Mode::Alternate`]; the first one is also the on-phase color.
    /// Extra colors are dropped. Ignored for single-color LEDs.
    pub fn set_color_sequence(&mut self, colors: &[Color]) {
        self.replace_sequence(ColorSequence::from_slice(colors));
    }

    /// Sets two colors to alternate between. Ignored for single-color LEDs.
    pub fn set_alternating_colors(&mut self, first: Color, second: Color) {
        self.replace_sequence(ColorSequence::from_slice(&[first, second]));
    }

    /// Returns the current mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the color of the on phase. During alternation this is the
    /// color shown last, even after the sequence was replaced. Single-color
    /// LEDs report white.
    pub fn color(&self) -> Color {
        if self.outputs.is_single() {
            Color::WHITE
        } else {
            self.active_color
        }
    }

    /// Returns the configured color sequence.
    #[inline]
    pub fn color_sequence(&self) -> &ColorSequence {
        &self.sequence
    }

    /// Returns true while the LED is in its on phase.
    #[inline]
    pub fn is_illuminated(&self) -> bool {
        self.illuminated
    }

    /// Returns true while the timer is armed for this LED.
    #[inline]
    pub fn is_timer_active(&self) -> bool {
        self.tick_handler.is_some()
    }

    /// Returns the slot of the sequence the next alternation tick shows.
    #[inline]
    pub fn sequence_index(&self) -> usize {
        self.sequence_index
    }

    /// Returns the wiring polarity.
    #[inline]
    pub fn polarity(&self) -> Polarity {
        self.outputs.polarity()
    }

    /// Returns true for a single-color LED.
    #[inline]
    pub fn is_single(&self) -> bool {
        self.outputs.is_single()
    }

    fn replace_sequence(&mut self, sequence: ColorSequence) {
        if self.outputs.is_single() {
            debug!("single-color LED has no color, ignoring");
            return;
        }

        debug!("color sequence {:?}", sequence.as_array());
        self.sequence = sequence;
        if self.mode != Mode::Alternate {
            self.active_color = sequence.first();
        }
        self.sequence_index = sequence.clamp_index(self.sequence_index);
    }

    /// Flips the on/off phase.
    fn toggle(&mut self) {
        self.illuminated = !self.illuminated;
        self.outputs.illuminate(self.illuminated, self.active_color);
    }

    /// Shows the current sequence slot and moves to the next.
    fn alternate(&mut self) {
        if self.outputs.is_single() {
            return;
        }

        let color = self.sequence.get(self.sequence_index);
        self.active_color = color;
        self.illuminated = true;
        self.outputs.illuminate(true, color);
        self.sequence_index = self.sequence.advance(self.sequence_index);
    }

    /// Settles the mode after a request that could not be honored, keeping
    /// the output as it is.
    fn settle(&mut self) {
        self.mode = if self.illuminated { Mode::On } else { Mode::Off };
    }

    fn arm(&mut self, handler: TickHandler, interval: Interval) {
        self.tick_handler = Some(handler);
        self.timer.arm(interval, true);
    }

    fn disarm(&mut self) {
        if self.tick_handler.take().is_some() {
            self.timer.disarm();
        }
    }
}

impl<S: OutputPin, P: SetDutyCycle, T: PeriodicTimer> Drop for Led<S, P, T> {
    fn drop(&mut self) {
        self.disarm();
    }
}
