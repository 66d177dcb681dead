//! Fixed-cadence tick loop.
//!
//! [`TickScheduler`] samples the buttons, runs one [`Chronograph`] tick, then
//! sleeps whatever is left of the tick period. A tick whose work overruns the
//! period skips the sleep entirely; missed time is not caught up.

use crate::button::{ButtonBank, ButtonPanel};
use crate::config::ChronographConfig;
use crate::controller::Chronograph;
use crate::render::{CharDisplay, LedBank};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use embedded_hal::delay::DelayNs;

/// How a single tick used its time budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome<D> {
    /// Work finished early; slept for the contained remainder.
    Slept(D),

    /// Work took the whole period or longer; no sleep.
    Overrun(D),
}

/// Counters kept across ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickStats {
    /// Ticks run.
    pub ticks: u32,
    /// Ticks whose work exceeded the period.
    pub overruns: u32,
}

/// Drives a [`Chronograph`] at a fixed tick period.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `S` - Delay implementation used to sleep out the tick
/// * `B` - Button panel implementation type
pub struct TickScheduler<'t, I: TimeInstant, T: TimeSource<I>, S: DelayNs, B: ButtonPanel> {
    time_source: &'t T,
    delay: S,
    panel: B,
    buttons: ButtonBank,
    period: I::Duration,
    last_start: Option<I>,
    stats: TickStats,
}

impl<'t, I: TimeInstant, T: TimeSource<I>, S: DelayNs, B: ButtonPanel> TickScheduler<'t, I, T, S, B> {
    /// Creates a scheduler ticking at `config`'s tick period.
    pub fn new(time_source: &'t T, delay: S, panel: B, config: &ChronographConfig) -> Self {
        Self {
            time_source,
            delay,
            panel,
            buttons: ButtonBank::new(),
            period: I::Duration::from_millis(config.tick_ms() as u64),
            last_start: None,
            stats: TickStats::default(),
        }
    }

    /// Runs one tick and sleeps out the rest of the period.
    pub fn run_tick<L: LedBank, D: CharDisplay>(
        &mut self,
        chronograph: &mut Chronograph<L, D>,
    ) -> TickOutcome<I::Duration> {
        let start = self.time_source.now();
        self.last_start = Some(start);

        let events = self.buttons.poll(&mut self.panel);
        chronograph.tick(events);

        let work = self.time_source.now().duration_since(start);
        self.stats.ticks = self.stats.ticks.wrapping_add(1);

        if work >= self.period {
            self.stats.overruns = self.stats.overruns.wrapping_add(1);
            warn!("tick overran by {} us", work.saturating_sub(self.period).as_micros());
            return TickOutcome::Overrun(work);
        }

        let remaining = self.period.saturating_sub(work);
        self.delay
            .delay_us(u32::try_from(remaining.as_micros()).unwrap_or(u32::MAX));
        TickOutcome::Slept(remaining)
    }

    /// Runs ticks forever.
    pub fn run<L: LedBank, D: CharDisplay>(&mut self, chronograph: &mut Chronograph<L, D>) -> ! {
        info!("tick loop started");
        loop {
            self.run_tick(chronograph);
        }
    }

    /// The configured tick period.
    #[inline]
    pub fn period(&self) -> I::Duration {
        self.period
    }

    /// When the most recent tick started, if any has run.
    #[inline]
    pub fn last_start(&self) -> Option<I> {
        self.last_start
    }

    /// Mutable access to the button panel, e.g. to reconfigure pins.
    #[inline]
    pub fn panel_mut(&mut self) -> &mut B {
        &mut self.panel
    }

    #[inline]
    pub fn stats(&self) -> TickStats {
        self.stats
    }

    /// Releases the delay and button panel.
    pub fn release(self) -> (S, B) {
        (self.delay, self.panel)
    }
}
