//! RP2040 timer as the tick scheduler's clock.
//!
//! The hardware timer counts microseconds from boot, which is the resolution
//! the scheduler measures tick work in.

use fugit::{MicrosDurationU64, TimerInstantU64};
use led_chronograph::{TimeDuration, TimeInstant, TimeSource};

/// Elapsed tick work, in timer microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration(MicrosDurationU64);

impl TimeDuration for Duration {
    const ZERO: Self = Duration(MicrosDurationU64::from_ticks(0));

    fn as_micros(&self) -> u64 {
        self.0.to_micros()
    }

    fn from_millis(millis: u64) -> Self {
        Duration(MicrosDurationU64::millis(millis))
    }

    fn saturating_sub(self, other: Self) -> Self {
        Duration(MicrosDurationU64::from_ticks(
            self.0.ticks().saturating_sub(other.0.ticks()),
        ))
    }
}

/// Timer counter reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant(TimerInstantU64<1_000_000>);

impl TimeInstant for Instant {
    type Duration = Duration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Duration(MicrosDurationU64::from_ticks(
            self.0.ticks().saturating_sub(earlier.0.ticks()),
        ))
    }
}

/// Reads tick start and end times off the RP2040 timer.
///
/// `Timer` is `Copy`, so the same peripheral can also be handed to the
/// scheduler as its `DelayNs`.
pub struct HardwareTimer(rp_pico::hal::Timer);

impl HardwareTimer {
    pub fn new(timer: rp_pico::hal::Timer) -> Self {
        Self(timer)
    }
}

impl TimeSource<Instant> for HardwareTimer {
    fn now(&self) -> Instant {
        Instant(self.0.get_counter())
    }
}
