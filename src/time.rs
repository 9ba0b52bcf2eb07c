//! Blink interval and the periodic timer abstraction.

/// Shortest interval the timer facility supports, in milliseconds.
pub const MIN_INTERVAL_MS: u32 = 5;

/// Interval used by [`Interval::default`], in milliseconds.
pub const DEFAULT_INTERVAL_MS: u32 = 500;

/// Period between timer expiries.
///
/// Always at least [`MIN_INTERVAL_MS`]; shorter requests are raised to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Interval(u32);

impl Interval {
    /// The shortest supported interval.
    pub const MIN: Interval = Interval(MIN_INTERVAL_MS);

    /// Creates an interval, clamping it up to [`Interval::MIN`].
    #[inline]
    pub const fn from_millis(millis: u32) -> Self {
        if millis < MIN_INTERVAL_MS {
            Interval::MIN
        } else {
            Interval(millis)
        }
    }

    /// Interval in milliseconds.
    #[inline]
    pub const fn as_millis(self) -> u32 {
        self.0
    }
}

impl Default for Interval {
    fn default() -> Self {
        Interval(DEFAULT_INTERVAL_MS)
    }
}

impl From<u32> for Interval {
    fn from(millis: u32) -> Self {
        Interval::from_millis(millis)
    }
}

/// Trait for abstracting a periodic hardware or OS timer.
///
/// Implement this for the timer dedicated to one LED. The timer's interrupt
/// handler is expected to call [`Led::on_timer`](crate::Led::on_timer) (or
/// [`SharedLed::on_timer`](crate::SharedLed::on_timer)) on every expiry; the
/// driver keeps track of which operation that call runs.
///
/// An expiry can already be latched when the driver disarms or re-arms the
/// timer, and its interrupt then runs after the reconfiguration. Both
/// [`arm`](PeriodicTimer::arm) and [`disarm`](PeriodicTimer::disarm) must
/// therefore clear the expiry flag, so that
/// [`acknowledge`](PeriodicTimer::acknowledge) rejects such a leftover
/// interrupt.
pub trait PeriodicTimer {
    /// Starts the timer and clears any pending expiry. With `recurring` set,
    /// it expires every `interval` until disarmed.
    fn arm(&mut self, interval: Interval, recurring: bool);

    /// Stops the timer and clears any pending expiry. Must be harmless on a
    /// timer that is not running.
    fn disarm(&mut self);

    /// Clears the expiry flag, returning true if the current arming had
    /// expired since the flag was last cleared.
    fn acknowledge(&mut self) -> bool;
}

impl<T: PeriodicTimer + ?Sized> PeriodicTimer for &mut T {
    fn arm(&mut self, interval: Interval, recurring: bool) {
        (**self).arm(interval, recurring);
    }

    fn disarm(&mut self) {
        (**self).disarm();
    }

    fn acknowledge(&mut self) -> bool {
        (**self).acknowledge()
    }
}
