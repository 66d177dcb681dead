//! Shared test infrastructure for led-chronograph integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use embedded_hal::delay::DelayNs;
use led_chronograph::{
    ButtonEvents, ButtonId, ButtonPanel, CharDisplay, Chronograph, ChronographConfig, LED_COUNT,
    LedBank, TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps microseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_micros(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis * 1000)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing (microseconds since start)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source that moves forward by a fixed step every time it is read,
/// standing in for the work a tick takes.
pub struct MockTimeSource {
    current: Cell<u64>,
    step_per_read: Cell<u64>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current: Cell::new(0),
            step_per_read: Cell::new(0),
        }
    }

    /// Each `now()` call advances time by this many microseconds afterwards.
    pub fn set_step_per_read(&self, micros: u64) {
        self.step_per_read.set(micros);
    }

    pub fn advance(&self, micros: u64) {
        self.current.set(self.current.get() + micros);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        let now = self.current.get();
        self.current.set(now + self.step_per_read.get());
        TestInstant(now)
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Records every requested sleep in nanoseconds.
pub struct MockDelay {
    sleeps: heapless::Vec<u64, 64>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self {
            sleeps: heapless::Vec::new(),
        }
    }

    pub fn sleeps_ns(&self) -> &[u64] {
        &self.sleeps
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        let _ = self.sleeps.push(ns as u64);
    }

    fn delay_us(&mut self, us: u32) {
        let _ = self.sleeps.push(us as u64 * 1000);
    }

    fn delay_ms(&mut self, ms: u32) {
        let _ = self.sleeps.push(ms as u64 * 1_000_000);
    }
}

// ============================================================================
// Mock LED Bank
// ============================================================================

/// LED bank that records levels and counts writes
pub struct MockLeds {
    levels: [bool; LED_COUNT],
    writes: usize,
}

impl MockLeds {
    pub fn new() -> Self {
        Self {
            levels: [false; LED_COUNT],
            writes: 0,
        }
    }

    pub fn levels(&self) -> &[bool; LED_COUNT] {
        &self.levels
    }

    pub fn all_on(&self) -> bool {
        self.levels.iter().all(|&on| on)
    }

    pub fn all_off(&self) -> bool {
        self.levels.iter().all(|&on| !on)
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Decodes the bank back into (hours, minutes, seconds).
    pub fn decode(&self) -> (u8, u8, u8) {
        let field = |first: usize, width: usize| {
            (0..width).fold(0u8, |acc, bit| acc | ((self.levels[first + bit] as u8) << bit))
        };
        (field(12, 5), field(6, 6), field(0, 6))
    }
}

impl LedBank for MockLeds {
    fn write_pin(&mut self, index: usize, level: bool) {
        self.levels[index] = level;
        self.writes += 1;
    }
}

// ============================================================================
// Mock Display
// ============================================================================

/// Two-row character display backed by fixed-width row buffers
pub struct MockDisplay {
    rows: [[u8; 20]; 2],
    col: usize,
    row: usize,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            rows: [[b' '; 20]; 2],
            col: 0,
            row: 0,
        }
    }

    /// Row contents with trailing spaces trimmed.
    pub fn row(&self, row: usize) -> &str {
        core::str::from_utf8(&self.rows[row]).unwrap().trim_end()
    }
}

impl CharDisplay for MockDisplay {
    fn set_cursor(&mut self, col: u8, row: u8) {
        self.col = col as usize;
        self.row = row as usize;
    }

    fn write_str(&mut self, text: &str) {
        for byte in text.bytes() {
            if self.col < self.rows[self.row].len() {
                self.rows[self.row][self.col] = byte;
                self.col += 1;
            }
        }
    }
}

// ============================================================================
// Scripted Button Panel
// ============================================================================

/// Button panel whose levels the test sets directly
pub struct ScriptedButtons {
    pressed: [bool; 5],
}

impl ScriptedButtons {
    pub fn new() -> Self {
        Self { pressed: [false; 5] }
    }

    pub fn set(&mut self, button: ButtonId, pressed: bool) {
        self.pressed[button.index()] = pressed;
    }
}

impl ButtonPanel for ScriptedButtons {
    fn is_pressed(&mut self, button: ButtonId) -> bool {
        self.pressed[button.index()]
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type TestChronograph = Chronograph<MockLeds, MockDisplay>;

pub fn chronograph() -> TestChronograph {
    Chronograph::new(MockLeds::new(), MockDisplay::new(), ChronographConfig::default())
}

pub fn chronograph_with(config: ChronographConfig) -> TestChronograph {
    Chronograph::new(MockLeds::new(), MockDisplay::new(), config)
}

/// Events for a tick in which `button` was released.
pub fn release(button: ButtonId) -> ButtonEvents {
    ButtonEvents::NONE.with_release(button)
}

/// Events for a tick in which `button` is held down.
pub fn hold(button: ButtonId) -> ButtonEvents {
    ButtonEvents::NONE.with_held(button)
}

/// Runs `count` ticks with no button activity.
pub fn idle_ticks(chrono: &mut TestChronograph, count: usize) {
    for _ in 0..count {
        chrono.tick(ButtonEvents::NONE);
    }
}
