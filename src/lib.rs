#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Led`**: Drives one single-color or RGB LED through display modes, owning its outputs and timer
//! - **`Mode`**: Steady `Off`/`On`, `BlinkFromOff`/`BlinkFromOn`, or `Alternate` through a color sequence
//! - **`Color`**: Packed `0xRRGGBB` color; `Color::NONE` is "all off" and ends a sequence
//! - **`ColorSequence`**: Up to six colors cycled by `Mode::Alternate`
//! - **`Interval`**: Blink/alternation period, clamped to at least 5 ms
//! - **`PeriodicTimer`**: Trait to implement for the timer dedicated to an LED
//! - **`SharedLed`**: Critical-section wrapper for a driver shared with its timer interrupt
//! - **`LedAction`**: Commands that can be sent to control drivers
//!
//! Output goes through `embedded-hal` 1.0: `OutputPin` for single-color LEDs and
//! `SetDutyCycle` for the three channels of an RGB LED. Channel values of 0 and
//! 255 are written as solid off/on, everything in between as a duty cycle.

pub mod colors;
pub mod command;
pub mod led;
pub mod output;
pub mod render;
pub mod sequence;
pub mod shared;
pub mod time;
pub mod types;

pub use colors::Color;
pub use command::{LedAction, LedCommand};
pub use led::Led;
pub use output::{NoPin, NoPwm, Outputs, RgbChannels};
pub use render::{ChannelWrite, PWM_FULL_SCALE};
pub use sequence::{ColorSequence, MAX_SEQUENCE_COLORS};
pub use shared::SharedLed;
pub use time::{DEFAULT_INTERVAL_MS, Interval, MIN_INTERVAL_MS, PeriodicTimer};
pub use types::{LedType, Mode, Polarity, TickHandler};
