//! Projection of time values onto the LED bank and the character display.
//!
//! Defines the [`LedBank`] and [`CharDisplay`] traits for hardware abstraction
//! and the free functions the controller uses to draw through them.

use crate::time_value::TimeValue;
use core::fmt::Write;
use heapless::String;

/// Number of LEDs driven: 6 for seconds, 6 for minutes, 5 for hours.
pub const LED_COUNT: usize = 17;

/// Columns written per display row.
pub const DISPLAY_COLUMNS: usize = 16;

/// Display row holding the mode label.
pub const LABEL_ROW: u8 = 0;

/// Display row holding the `HH:MM:SS:mmm` time text.
pub const TIME_ROW: u8 = 1;

const SECONDS_LEDS: (usize, u32) = (0, 6);
const MINUTES_LEDS: (usize, u32) = (6, 6);
const HOURS_LEDS: (usize, u32) = (12, 5);

/// Trait for abstracting a bank of individually addressable binary LEDs.
///
/// Indices `0..LED_COUNT` must be valid. Handle any hardware errors
/// internally - this method cannot fail.
pub trait LedBank {
    /// Drives the LED at `index` on (`true`) or off (`false`).
    fn write_pin(&mut self, index: usize, level: bool);
}

/// Trait for abstracting a two-row character display.
///
/// Writes are expected to be visible immediately, with no flush step.
pub trait CharDisplay {
    /// Moves the write position to `col`, `row`.
    fn set_cursor(&mut self, col: u8, row: u8);

    /// Writes text at the current position.
    fn write_str(&mut self, text: &str);
}

/// Writes the binary seconds, minutes and hours of `time` to the LED bank.
pub fn render_leds<L: LedBank>(leds: &mut L, time: &TimeValue) {
    write_bits(leds, SECONDS_LEDS, time.seconds());
    write_bits(leds, MINUTES_LEDS, time.minutes());
    write_bits(leds, HOURS_LEDS, time.hours());
}

fn write_bits<L: LedBank>(leds: &mut L, (first, width): (usize, u32), value: u8) {
    for bit in 0..width {
        leds.write_pin(first + bit as usize, value & (1 << bit) != 0);
    }
}

/// Drives every LED to the same level.
pub fn set_all_leds<L: LedBank>(leds: &mut L, level: bool) {
    for index in 0..LED_COUNT {
        leds.write_pin(index, level);
    }
}

/// Writes `time` as `HH:MM:SS:mmm` on the time row.
pub fn render_text<D: CharDisplay>(display: &mut D, time: &TimeValue) {
    let mut text: String<DISPLAY_COLUMNS> = String::new();
    // 12 characters always fit the row.
    let _ = write!(text, "{}", time);

    display.set_cursor(0, TIME_ROW);
    display.write_str(&text);
}

/// Writes `label` on the label row, padded to clear any longer previous label.
pub fn render_label<D: CharDisplay>(display: &mut D, label: &str) {
    let mut text: String<DISPLAY_COLUMNS> = String::new();
    for ch in label.chars().take(DISPLAY_COLUMNS) {
        let _ = text.push(ch);
    }
    while text.len() < DISPLAY_COLUMNS {
        let _ = text.push(' ');
    }

    display.set_cursor(0, LABEL_ROW);
    display.write_str(&text);
}

/// Attention flash shown while a countdown sits expired.
///
/// All LEDs switch on at phase 0 and off at phase `on_ticks`, and the phase
/// wraps every `cycle_ticks`. LEDs are only written on those two transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Flasher {
    phase: u16,
}

impl Flasher {
    pub const fn new() -> Self {
        Self { phase: 0 }
    }

    /// Current position within the flash cycle.
    #[inline]
    pub fn phase(&self) -> u16 {
        self.phase
    }

    /// Restarts the cycle so the next step switches the LEDs on.
    #[inline]
    pub fn reset(&mut self) {
        self.phase = 0;
    }

    /// Renders one tick of the flash and advances the phase.
    pub fn render_flash<L: LedBank>(&mut self, leds: &mut L, cycle_ticks: u16, on_ticks: u16) {
        if self.phase == 0 {
            set_all_leds(leds, true);
        } else if self.phase == on_ticks {
            set_all_leds(leds, false);
        }

        self.phase = (self.phase + 1) % cycle_ticks.max(1);
    }
}
