//! Time abstraction traits for measuring tick work.
//!
//! The scheduler never reads a wall clock directly. Boards implement these
//! traits over whatever monotonic counter they have (a hardware timer, an
//! `embassy_time::Instant`, `std::time::Instant` on a host).

/// Trait for abstracting monotonic time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq + PartialOrd {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to whole microseconds.
    fn as_micros(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Saturating subtraction (returns ZERO on underflow).
    fn saturating_sub(self, other: Self) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations should saturate to `ZERO` if `earlier` is later than `self`.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}
