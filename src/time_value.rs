//! Hours/minutes/seconds/subseconds accumulator.
//!
//! [`TimeValue`] is the quantity every mode tracks. The clock and stopwatch
//! move it forward with [`TimeValue::advance`]; the countdown moves it back
//! with [`TimeValue::retreat`]. Both keep every field in range after each call.

use core::fmt;

/// Milliseconds in one second, the subsecond modulus.
pub const MILLIS_PER_SECOND: u16 = 1000;

/// A unit of a [`TimeValue`] that can be edited directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeUnit {
    /// Seconds, 0-59.
    #[default]
    Seconds,
    /// Minutes, 0-59.
    Minutes,
    /// Hours, 0-23.
    Hours,
}

impl TimeUnit {
    /// Returns the next unit in edit order: Seconds, Minutes, Hours, Seconds.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            TimeUnit::Seconds => TimeUnit::Minutes,
            TimeUnit::Minutes => TimeUnit::Hours,
            TimeUnit::Hours => TimeUnit::Seconds,
        }
    }
}

/// A normalized hours/minutes/seconds/subseconds quadruple.
///
/// Invariant: `hours < 24`, `minutes < 60`, `seconds < 60`, `subseconds < 1000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeValue {
    hours: u8,
    minutes: u8,
    seconds: u8,
    subseconds: u16,
}

impl TimeValue {
    /// All fields zero.
    pub const ZERO: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
        subseconds: 0,
    };

    /// Creates a time value, wrapping each field into its range.
    pub const fn new(hours: u8, minutes: u8, seconds: u8, subseconds: u16) -> Self {
        Self {
            hours: hours % 24,
            minutes: minutes % 60,
            seconds: seconds % 60,
            subseconds: subseconds % MILLIS_PER_SECOND,
        }
    }

    #[inline]
    pub fn hours(&self) -> u8 {
        self.hours
    }

    #[inline]
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    #[inline]
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    #[inline]
    pub fn subseconds(&self) -> u16 {
        self.subseconds
    }

    /// Returns the value of a single editable unit.
    pub fn unit(&self, unit: TimeUnit) -> u8 {
        match unit {
            TimeUnit::Seconds => self.seconds,
            TimeUnit::Minutes => self.minutes,
            TimeUnit::Hours => self.hours,
        }
    }

    /// Total milliseconds since 00:00:00:000.
    pub fn total_millis(&self) -> u32 {
        let whole_seconds =
            self.hours as u32 * 3600 + self.minutes as u32 * 60 + self.seconds as u32;
        whole_seconds * MILLIS_PER_SECOND as u32 + self.subseconds as u32
    }

    /// Returns true if all four fields are zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Zeroes all fields.
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::ZERO;
    }

    /// Adds `tick_ms` to the value, carrying into seconds, minutes and hours.
    ///
    /// Hours wrap modulo 24, so 23:59:59:975 advanced by 25 ms is midnight.
    pub fn advance(&mut self, tick_ms: u16) {
        let total = self.subseconds as u32 + tick_ms as u32;
        self.subseconds = (total % MILLIS_PER_SECOND as u32) as u16;

        let carry = total / MILLIS_PER_SECOND as u32;
        if carry == 0 {
            return;
        }

        let seconds = self.seconds as u32 + carry;
        self.seconds = (seconds % 60) as u8;

        let minutes = self.minutes as u32 + seconds / 60;
        self.minutes = (minutes % 60) as u8;

        let hours = self.hours as u32 + minutes / 60;
        self.hours = (hours % 24) as u8;
    }

    /// Subtracts `tick_ms - borrow_ms` from the value, borrowing across units.
    ///
    /// `borrow_ms` is the countdown compensation: each retreat takes slightly
    /// less than a full tick. A borrow from seconds wraps seconds to 59 and
    /// takes a minute; a borrow from minutes wraps minutes to 59 and takes an
    /// hour. When less than one step remains the value lands on exactly zero
    /// instead of wrapping, so a countdown always reaches its expired state.
    pub fn retreat(&mut self, tick_ms: u16, borrow_ms: u16) {
        let step = tick_ms.saturating_sub(borrow_ms);

        if self.total_millis() <= step as u32 {
            self.clear();
            return;
        }

        let mut subseconds = self.subseconds as i32 - step as i32;
        while subseconds < 0 {
            subseconds += MILLIS_PER_SECOND as i32;
            self.borrow_second();
        }

        self.subseconds = subseconds as u16;
    }

    fn borrow_second(&mut self) {
        if self.seconds > 0 {
            self.seconds -= 1;
            return;
        }

        self.seconds = 59;
        if self.minutes > 0 {
            self.minutes -= 1;
            return;
        }

        self.minutes = 59;
        self.hours = (self.hours + 23) % 24;
    }

    /// Assigns one unit directly, then normalizes.
    ///
    /// Seconds or minutes past 59 carry into the next unit and wrap; hours
    /// wrap modulo 24.
    pub fn set_unit(&mut self, unit: TimeUnit, value: u8) {
        match unit {
            TimeUnit::Seconds => {
                self.seconds = value % 60;
                self.add_minutes(value / 60);
            }
            TimeUnit::Minutes => {
                self.minutes = value % 60;
                self.add_hours(value / 60);
            }
            TimeUnit::Hours => {
                self.hours = value % 24;
            }
        }
    }

    /// Increments one unit by one, carrying once into the next unit on overflow.
    pub fn increment_unit(&mut self, unit: TimeUnit) {
        let value = self.unit(unit);
        self.set_unit(unit, value + 1);
    }

    fn add_minutes(&mut self, minutes: u8) {
        let total = self.minutes as u16 + minutes as u16;
        self.minutes = (total % 60) as u8;
        self.add_hours((total / 60) as u8);
    }

    fn add_hours(&mut self, hours: u8) {
        self.hours = ((self.hours as u16 + hours as u16) % 24) as u8;
    }
}

impl fmt::Display for TimeValue {
    /// Formats as `HH:MM:SS:mmm`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:03}",
            self.hours, self.minutes, self.seconds, self.subseconds
        )
    }
}
