//! Sharing one driver between foreground code and its timer interrupt.
//!
//! ```ignore
//! static STATUS: SharedLed<NoPin, Pwm, Timer> = SharedLed::new();
//!
//! #[interrupt]
//! fn TIMER1() {
//!     STATUS.on_timer();
//! }
//!
//! fn main() -> ! {
//!     STATUS.init(Led::rgb(red, green, blue, timer1, LedType::Anode));
//!     STATUS.set_color(Color::ORANGE);
//!     STATUS.set_mode(Mode::BlinkFromOn, 250);
//!     // ...
//! }
//! ```

use crate::colors::Color;
use crate::command::LedAction;
use crate::led::Led;
use crate::time::PeriodicTimer;
use crate::types::Mode;
use core::cell::RefCell;
use critical_section::Mutex;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

/// A [`Led`] behind a critical-section mutex.
///
/// Every method enters a critical section for its whole duration, so a
/// timer interrupt can never observe or modify the driver halfway through a
/// foreground call, nor the other way around. Can be placed in a `static`.
pub struct SharedLed<S: OutputPin, P: SetDutyCycle, T: PeriodicTimer> {
    led: Mutex<RefCell<Option<Led<S, P, T>>>>,
}

impl<S: OutputPin, P: SetDutyCycle, T: PeriodicTimer> SharedLed<S, P, T> {
    /// Creates an empty slot. Calls before [`SharedLed::init`] do nothing.
    pub const fn new() -> Self {
        Self {
            led: Mutex::new(RefCell::new(None)),
        }
    }

    /// Installs `led`, returning the driver it replaces.
    pub fn init(&self, led: Led<S, P, T>) -> Option<Led<S, P, T>> {
        critical_section::with(|cs| self.led.borrow_ref_mut(cs).replace(led))
    }

    /// Removes the driver.
    pub fn take(&self) -> Option<Led<S, P, T>> {
        critical_section::with(|cs| self.led.borrow_ref_mut(cs).take())
    }

    /// Runs `f` on the driver inside a critical section. Returns `None` if
    /// no driver is installed.
    pub fn with<R>(&self, f: impl FnOnce(&mut Led<S, P, T>) -> R) -> Option<R> {
        critical_section::with(|cs| self.led.borrow_ref_mut(cs).as_mut().map(f))
    }

    /// Timer interrupt entry point, see [`Led::on_timer`].
    pub fn on_timer(&self) {
        self.with(Led::on_timer);
    }

    /// See [`Led::set_mode`].
    pub fn set_mode(&self, mode: Mode, interval_ms: u32) {
        self.with(|led| led.set_mode(mode, interval_ms));
    }

    /// See [`Led::set_color`].
    pub fn set_color(&self, color: Color) {
        self.with(|led| led.set_color(color));
    }

    /// See [`Led::set_color_sequence`].
    pub fn set_color_sequence(&self, colors: &[Color]) {
        self.with(|led| led.set_color_sequence(colors));
    }

    /// See [`Led::set_alternating_colors`].
    pub fn set_alternating_colors(&self, first: Color, second: Color) {
        self.with(|led| led.set_alternating_colors(first, second));
    }

    /// See [`Led::handle_action`].
    pub fn handle_action(&self, action: LedAction) {
        self.with(|led| led.handle_action(action));
    }

    /// Current mode, if a driver is installed.
    pub fn mode(&self) -> Option<Mode> {
        self.with(|led| led.mode())
    }

    /// Current color, if a driver is installed.
    pub fn color(&self) -> Option<Color> {
        self.with(|led| led.color())
    }
}

impl<S: OutputPin, P: SetDutyCycle, T: PeriodicTimer> Default for SharedLed<S, P, T> {
    fn default() -> Self {
        Self::new()
    }
}
