//! Shared test infrastructure for timed-led integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::pwm::{self, SetDutyCycle};
use timed_led::{ChannelWrite, Interval, Led, LedType, NoPin, NoPwm, PeriodicTimer};

// ============================================================================
// Recorded hardware activity
// ============================================================================

/// One call made by the driver into the mocked hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Digital pin write
    Level(bool),
    /// PWM channel write (channel index 0..3)
    Pwm(usize, ChannelWrite),
    /// Timer armed with interval in ms and recurring flag
    Arm(u32, bool),
    /// Timer disarmed
    Disarm,
}

/// Records every hardware call in order
pub struct Recorder {
    events: RefCell<heapless::Vec<Event, 256>>,
    armed: Cell<bool>,
    expired: Cell<bool>,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(heapless::Vec::new()),
            armed: Cell::new(false),
            expired: Cell::new(false),
        }
    }

    /// Latches an expiry if the timer is armed, like a hardware period match
    pub fn expire(&self) {
        if self.armed.get() {
            self.expired.set(true);
        }
    }

    fn push(&self, event: Event) {
        self.events
            .borrow_mut()
            .push(event)
            .expect("recorder capacity exceeded");
    }

    pub fn events(&self) -> heapless::Vec<Event, 256> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Last level written to the single-color pin
    pub fn last_level(&self) -> Option<bool> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            Event::Level(high) => Some(*high),
            _ => None,
        })
    }

    /// Last write issued to each of the three PWM channels
    pub fn last_frame(&self) -> [Option<ChannelWrite>; 3] {
        let mut frame = [None; 3];
        for event in self.events.borrow().iter() {
            if let Event::Pwm(channel, write) = event {
                frame[*channel] = Some(*write);
            }
        }
        frame
    }

    /// All RGB frames written so far, three channel writes each
    pub fn frames(&self) -> std::vec::Vec<[ChannelWrite; 3]> {
        let writes: std::vec::Vec<ChannelWrite> = self
            .events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Pwm(_, write) => Some(*write),
                _ => None,
            })
            .collect();
        writes
            .chunks_exact(3)
            .map(|chunk| [chunk[0], chunk[1], chunk[2]])
            .collect()
    }

    pub fn count(&self, wanted: Event) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| **event == wanted)
            .count()
    }

    pub fn arm_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, Event::Arm(..)))
            .count()
    }
}

// ============================================================================
// Mock hardware
// ============================================================================

/// Mock digital pin
pub struct MockPin<'a> {
    recorder: &'a Recorder,
}

impl digital::ErrorType for MockPin<'_> {
    type Error = Infallible;
}

impl OutputPin for MockPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.recorder.push(Event::Level(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.recorder.push(Event::Level(true));
        Ok(())
    }
}

/// Mock PWM channel with an 8-bit duty range
pub struct MockPwm<'a> {
    channel: usize,
    recorder: &'a Recorder,
}

impl pwm::ErrorType for MockPwm<'_> {
    type Error = Infallible;
}

impl SetDutyCycle for MockPwm<'_> {
    fn max_duty_cycle(&self) -> u16 {
        255
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.recorder
            .push(Event::Pwm(self.channel, ChannelWrite::Duty(duty as u8)));
        Ok(())
    }

    fn set_duty_cycle_fully_off(&mut self) -> Result<(), Self::Error> {
        self.recorder.push(Event::Pwm(self.channel, ChannelWrite::Low));
        Ok(())
    }

    fn set_duty_cycle_fully_on(&mut self) -> Result<(), Self::Error> {
        self.recorder.push(Event::Pwm(self.channel, ChannelWrite::High));
        Ok(())
    }
}

/// Mock periodic timer
pub struct MockTimer<'a> {
    recorder: &'a Recorder,
}

impl PeriodicTimer for MockTimer<'_> {
    fn arm(&mut self, interval: Interval, recurring: bool) {
        self.recorder
            .push(Event::Arm(interval.as_millis(), recurring));
        self.recorder.armed.set(true);
        self.recorder.expired.set(false);
    }

    fn disarm(&mut self) {
        self.recorder.push(Event::Disarm);
        self.recorder.armed.set(false);
        self.recorder.expired.set(false);
    }

    fn acknowledge(&mut self) -> bool {
        self.recorder.expired.replace(false)
    }
}

// ============================================================================
// Driver constructors
// ============================================================================

pub type SingleLed<'a> = Led<MockPin<'a>, NoPwm, MockTimer<'a>>;
pub type RgbLed<'a> = Led<NoPin, MockPwm<'a>, MockTimer<'a>>;

pub fn single_led(recorder: &Recorder) -> SingleLed<'_> {
    Led::single(MockPin { recorder }, MockTimer { recorder })
}

pub fn rgb_led(recorder: &Recorder, led_type: LedType) -> RgbLed<'_> {
    Led::rgb(
        MockPwm {
            channel: 0,
            recorder,
        },
        MockPwm {
            channel: 1,
            recorder,
        },
        MockPwm {
            channel: 2,
            recorder,
        },
        MockTimer { recorder },
        led_type,
    )
}

/// Latches one expiry and runs the interrupt handler
pub fn tick<S: OutputPin, P: SetDutyCycle, T: PeriodicTimer>(
    recorder: &Recorder,
    led: &mut Led<S, P, T>,
) {
    recorder.expire();
    led.on_timer();
}

// ============================================================================
// Frame helpers
// ============================================================================

pub const DARK: [ChannelWrite; 3] = [ChannelWrite::Low; 3];

/// Frame expected for `color` on a cathode LED
pub fn cathode_frame(color: timed_led::Color) -> [ChannelWrite; 3] {
    [
        ChannelWrite::from_intensity(color.red()),
        ChannelWrite::from_intensity(color.green()),
        ChannelWrite::from_intensity(color.blue()),
    ]
}
