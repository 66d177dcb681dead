//! Tick timing configuration.

/// Default tick period in milliseconds.
pub const DEFAULT_TICK_MS: u16 = 8;

/// Default countdown compensation, subtracted from the tick when retreating.
pub const DEFAULT_BORROW_MS: u16 = 2;

/// Default number of held ticks between edit auto-repeat increments.
pub const DEFAULT_REPEAT_TICKS: u16 = 19;

/// Default length of one expiry flash cycle, in ticks.
pub const DEFAULT_FLASH_CYCLE_TICKS: u16 = 80;

/// Default tick within the flash cycle at which the LEDs switch off.
pub const DEFAULT_FLASH_ON_TICKS: u16 = 40;

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick period of zero.
    ZeroTick,

    /// Tick period does not divide one second evenly.
    TickNotDivisor { tick_ms: u16 },

    /// Countdown compensation is not smaller than the tick period.
    BorrowTooLarge { borrow_ms: u16, tick_ms: u16 },

    /// Auto-repeat interval of zero ticks.
    ZeroRepeat,

    /// Flash on-phase does not fall inside the flash cycle.
    InvalidFlashPhase { on_ticks: u16, cycle_ticks: u16 },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroTick => write!(f, "tick period must be non-zero"),
            ConfigError::TickNotDivisor { tick_ms } => {
                write!(f, "tick period of {} ms does not divide 1000 ms", tick_ms)
            }
            ConfigError::BorrowTooLarge { borrow_ms, tick_ms } => {
                write!(
                    f,
                    "countdown compensation of {} ms must be below the {} ms tick",
                    borrow_ms, tick_ms
                )
            }
            ConfigError::ZeroRepeat => write!(f, "auto-repeat interval must be non-zero"),
            ConfigError::InvalidFlashPhase {
                on_ticks,
                cycle_ticks,
            } => {
                write!(
                    f,
                    "flash on-phase of {} ticks must be between 1 and {} exclusive",
                    on_ticks, cycle_ticks
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Validated timing parameters shared by the controller and scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChronographConfig {
    tick_ms: u16,
    borrow_ms: u16,
    repeat_ticks: u16,
    flash_cycle_ticks: u16,
    flash_on_ticks: u16,
}

impl ChronographConfig {
    /// Creates a new configuration builder starting from the defaults.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Tick period in milliseconds.
    #[inline]
    pub fn tick_ms(&self) -> u16 {
        self.tick_ms
    }

    /// Milliseconds a countdown retreat holds back from each tick.
    #[inline]
    pub fn borrow_ms(&self) -> u16 {
        self.borrow_ms
    }

    /// Held ticks between auto-repeat increments while editing.
    #[inline]
    pub fn repeat_ticks(&self) -> u16 {
        self.repeat_ticks
    }

    /// Ticks in one full expiry flash cycle.
    #[inline]
    pub fn flash_cycle_ticks(&self) -> u16 {
        self.flash_cycle_ticks
    }

    /// Tick within the flash cycle at which LEDs switch off.
    #[inline]
    pub fn flash_on_ticks(&self) -> u16 {
        self.flash_on_ticks
    }
}

impl Default for ChronographConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            borrow_ms: DEFAULT_BORROW_MS,
            repeat_ticks: DEFAULT_REPEAT_TICKS,
            flash_cycle_ticks: DEFAULT_FLASH_CYCLE_TICKS,
            flash_on_ticks: DEFAULT_FLASH_ON_TICKS,
        }
    }
}

/// Builder for constructing validated configurations.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: ChronographConfig,
}

impl ConfigBuilder {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        Self {
            config: ChronographConfig::default(),
        }
    }

    /// Sets the tick period in milliseconds.
    pub fn tick_ms(mut self, tick_ms: u16) -> Self {
        self.config.tick_ms = tick_ms;
        self
    }

    /// Sets the countdown compensation in milliseconds.
    pub fn borrow_ms(mut self, borrow_ms: u16) -> Self {
        self.config.borrow_ms = borrow_ms;
        self
    }

    /// Sets the number of held ticks between auto-repeat increments.
    pub fn repeat_ticks(mut self, repeat_ticks: u16) -> Self {
        self.config.repeat_ticks = repeat_ticks;
        self
    }

    /// Sets the flash cycle length and the tick at which LEDs switch off.
    pub fn flash(mut self, cycle_ticks: u16, on_ticks: u16) -> Self {
        self.config.flash_cycle_ticks = cycle_ticks;
        self.config.flash_on_ticks = on_ticks;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `ZeroTick` - Tick period is zero
    /// * `TickNotDivisor` - 1000 ms is not a whole number of ticks
    /// * `BorrowTooLarge` - Compensation would stall or reverse the countdown
    /// * `ZeroRepeat` - Auto-repeat interval is zero
    /// * `InvalidFlashPhase` - On-phase is zero or not shorter than the cycle
    pub fn build(self) -> Result<ChronographConfig, ConfigError> {
        let config = self.config;

        if config.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }

        if 1000 % config.tick_ms != 0 {
            return Err(ConfigError::TickNotDivisor {
                tick_ms: config.tick_ms,
            });
        }

        if config.borrow_ms >= config.tick_ms {
            return Err(ConfigError::BorrowTooLarge {
                borrow_ms: config.borrow_ms,
                tick_ms: config.tick_ms,
            });
        }

        if config.repeat_ticks == 0 {
            return Err(ConfigError::ZeroRepeat);
        }

        if config.flash_on_ticks == 0 || config.flash_on_ticks >= config.flash_cycle_ticks {
            return Err(ConfigError::InvalidFlashPhase {
                on_ticks: config.flash_on_ticks,
                cycle_ticks: config.flash_cycle_ticks,
            });
        }

        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
