//! `embedded-hal` GPIO adapters for the panel traits.
//!
//! Boards that expose plain digital pins can wrap them here instead of
//! implementing [`LedBank`] and [`ButtonPanel`] by hand.

use crate::button::{BUTTON_COUNT, ButtonId, ButtonPanel};
use crate::render::LedBank;
use embedded_hal::digital::{InputPin, OutputPin, PinState};

/// Electrical level at which a button reads pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Pressed pulls the pin low (pull-up wiring).
    Low,
    /// Pressed drives the pin high (pull-down wiring).
    High,
}

/// LED bank over an array of push-pull output pins.
///
/// Pin write errors are dropped; the per-tick path has nowhere to report them.
pub struct GpioLeds<P: OutputPin, const N: usize> {
    pins: [P; N],
}

impl<P: OutputPin, const N: usize> GpioLeds<P, N> {
    /// Wraps the pins; index `i` drives `pins[i]`.
    pub fn new(pins: [P; N]) -> Self {
        Self { pins }
    }

    /// Releases the pins.
    pub fn release(self) -> [P; N] {
        self.pins
    }
}

impl<P: OutputPin, const N: usize> LedBank for GpioLeds<P, N> {
    fn write_pin(&mut self, index: usize, level: bool) {
        if let Some(pin) = self.pins.get_mut(index) {
            let _ = pin.set_state(PinState::from(level));
        }
    }
}

/// Button panel over five input pins, ordered as [`ButtonId::ALL`].
///
/// A failed read reports the button as released.
pub struct GpioButtons<P: InputPin> {
    pins: [P; BUTTON_COUNT],
    active: ActiveLevel,
}

impl<P: InputPin> GpioButtons<P> {
    pub fn new(pins: [P; BUTTON_COUNT], active: ActiveLevel) -> Self {
        Self { pins, active }
    }

    /// Releases the pins.
    pub fn release(self) -> [P; BUTTON_COUNT] {
        self.pins
    }
}

impl<P: InputPin> ButtonPanel for GpioButtons<P> {
    fn is_pressed(&mut self, button: ButtonId) -> bool {
        let pin = &mut self.pins[button.index()];
        let level = match self.active {
            ActiveLevel::Low => pin.is_low(),
            ActiveLevel::High => pin.is_high(),
        };
        level.unwrap_or(false)
    }
}
