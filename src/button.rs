//! Release-edge detection for level-sampled buttons.
//!
//! Buttons are sampled once per tick. A press is latched while the level reads
//! pressed and reported as a single release event on the first tick the level
//! reads released. There is no debounce filter beyond the tick period itself:
//! a contact that bounces across two samples produces two events.

/// The five logical buttons on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Start/stop in stopwatch and timer modes; increment while editing.
    StartStop,
    /// Reset the running value, or zero the selected unit while editing.
    Clear,
    /// Move the edit cursor to the next unit.
    UnitSelect,
    /// Cycle Clock, Stopwatch, Timer.
    ModeToggle,
    /// Enter or leave time editing.
    SetTime,
}

impl ButtonId {
    /// All buttons, in panel order.
    pub const ALL: [ButtonId; BUTTON_COUNT] = [
        ButtonId::StartStop,
        ButtonId::Clear,
        ButtonId::UnitSelect,
        ButtonId::ModeToggle,
        ButtonId::SetTime,
    ];

    /// Position of this button in [`ButtonId::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Number of physical buttons.
pub const BUTTON_COUNT: usize = 5;

/// Trait for abstracting the button inputs.
///
/// Implement this for your GPIO inputs. Read failures should report the
/// button as released; this method cannot fail.
pub trait ButtonPanel {
    /// Returns true if the button currently reads pressed.
    fn is_pressed(&mut self, button: ButtonId) -> bool;
}

/// Edge detector state for one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeDetector {
    release_pending: bool,
    held: bool,
}

impl EdgeDetector {
    /// Creates a detector with no press latched.
    pub const fn new() -> Self {
        Self {
            release_pending: false,
            held: false,
        }
    }

    /// Feeds one level sample, returning true exactly once per press-release.
    pub fn sample(&mut self, pressed: bool) -> bool {
        self.held = pressed;

        if pressed {
            self.release_pending = true;
            false
        } else if self.release_pending {
            self.release_pending = false;
            true
        } else {
            false
        }
    }

    /// Returns true if the last sample read pressed.
    #[inline]
    pub fn is_held(&self) -> bool {
        self.held
    }
}

/// Button activity observed in a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvents {
    released: [bool; BUTTON_COUNT],
    held: [bool; BUTTON_COUNT],
}

impl ButtonEvents {
    /// No releases, nothing held.
    pub const NONE: Self = Self {
        released: [false; BUTTON_COUNT],
        held: [false; BUTTON_COUNT],
    };

    /// Returns true if the button was released this tick.
    #[inline]
    pub fn released(&self, button: ButtonId) -> bool {
        self.released[button.index()]
    }

    /// Returns true if the button reads pressed this tick.
    #[inline]
    pub fn held(&self, button: ButtonId) -> bool {
        self.held[button.index()]
    }

    /// Marks a release event, for driving the controller without hardware.
    pub fn with_release(mut self, button: ButtonId) -> Self {
        self.released[button.index()] = true;
        self
    }

    /// Marks a button as held, for driving the controller without hardware.
    pub fn with_held(mut self, button: ButtonId) -> Self {
        self.held[button.index()] = true;
        self
    }
}

/// Edge detectors for all five buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonBank {
    detectors: [EdgeDetector; BUTTON_COUNT],
}

impl ButtonBank {
    pub const fn new() -> Self {
        Self {
            detectors: [EdgeDetector::new(); BUTTON_COUNT],
        }
    }

    /// Samples every button once and returns this tick's events.
    pub fn poll<B: ButtonPanel>(&mut self, panel: &mut B) -> ButtonEvents {
        let mut events = ButtonEvents::NONE;

        for button in ButtonId::ALL {
            let detector = &mut self.detectors[button.index()];
            events.released[button.index()] = detector.sample(panel.is_pressed(button));
            events.held[button.index()] = detector.is_held();
        }

        events
    }
}
