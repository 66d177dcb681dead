#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`TimeValue`**: Normalized hours/minutes/seconds/subseconds, advanced or retreated by one tick
//! - **`TimeUnit`**: The unit (seconds, minutes, hours) selected while setting a time
//! - **`ButtonBank`**: Turns level-sampled buttons into single release events and held signals
//! - **`Chronograph`**: The Clock / Stopwatch / Timer state machine and its rendering
//! - **`State`**: Active mode plus, for editable modes, whether it is being set
//! - **`TickScheduler`**: Samples buttons, runs a tick, sleeps out the rest of the period
//! - **`ChronographConfig`**: Validated tick, compensation, auto-repeat and flash timing
//! - **`LedBank`** / **`CharDisplay`** / **`ButtonPanel`**: Traits to implement for your hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! The LED bank shows seconds, minutes and hours in binary on 6 + 6 + 5 LEDs;
//! the display shows the mode on row 0 and `HH:MM:SS:mmm` on row 1.

mod fmt;

pub mod button;
pub mod config;
pub mod controller;
pub mod hal;
pub mod render;
pub mod scheduler;
pub mod time;
pub mod time_value;

pub use button::{BUTTON_COUNT, ButtonBank, ButtonEvents, ButtonId, ButtonPanel, EdgeDetector};
pub use config::{ChronographConfig, ConfigBuilder, ConfigError};
pub use controller::{Activity, Chronograph, EditSession, Mode, Runner, State};
pub use hal::{ActiveLevel, GpioButtons, GpioLeds};
pub use render::{CharDisplay, DISPLAY_COLUMNS, Flasher, LED_COUNT, LedBank};
pub use scheduler::{TickOutcome, TickScheduler, TickStats};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use time_value::{TimeUnit, TimeValue};
