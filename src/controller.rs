//! Mode controller: what each button means, and what each tick does.
//!
//! Provides [`Chronograph`], which owns the three time values, the LED bank and
//! the character display, and steps them once per tick from the button
//! activity the scheduler samples. The mode and editing sub-state are a single
//! [`State`] enum, so combinations such as "editing the stopwatch" cannot be
//! represented.

use crate::button::{ButtonEvents, ButtonId};
use crate::config::ChronographConfig;
use crate::render::{
    CharDisplay, Flasher, LedBank, render_label, render_leds, render_text, set_all_leds,
};
use crate::time_value::{TimeUnit, TimeValue};

/// The three display modes, in toggle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Time of day.
    Clock,
    /// Count-up stopwatch.
    Stopwatch,
    /// Countdown timer.
    Timer,
}

impl Mode {
    /// Returns the next mode: Clock, Stopwatch, Timer, Clock.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            Mode::Clock => Mode::Stopwatch,
            Mode::Stopwatch => Mode::Timer,
            Mode::Timer => Mode::Clock,
        }
    }

    /// Text shown on the label row while this mode is idle.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Clock => "Clock",
            Mode::Stopwatch => "Stopwatch",
            Mode::Timer => "Timer",
        }
    }

    fn idle(self) -> State {
        match self {
            Mode::Clock => State::Clock(Activity::Idle),
            Mode::Stopwatch => State::Stopwatch,
            Mode::Timer => State::Timer(Activity::Idle),
        }
    }
}

/// An in-progress manual time edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EditSession {
    cursor: TimeUnit,
    held_ticks: u16,
}

impl EditSession {
    /// The unit that receives increment and clear actions.
    #[inline]
    pub fn cursor(&self) -> TimeUnit {
        self.cursor
    }

    /// Consecutive ticks the increment button has been held since the last repeat.
    #[inline]
    pub fn held_ticks(&self) -> u16 {
        self.held_ticks
    }
}

/// Whether an editable mode is running normally or being set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Activity {
    Idle,
    Editing(EditSession),
}

/// Controller state: the active mode and, for editable modes, its activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Clock(Activity),
    Stopwatch,
    Timer(Activity),
}

impl State {
    /// The mode this state belongs to.
    pub fn mode(&self) -> Mode {
        match self {
            State::Clock(_) => Mode::Clock,
            State::Stopwatch => Mode::Stopwatch,
            State::Timer(_) => Mode::Timer,
        }
    }

    /// The edit session, if the active mode is being set.
    pub fn edit_session(&self) -> Option<EditSession> {
        match self {
            State::Clock(Activity::Editing(session)) | State::Timer(Activity::Editing(session)) => {
                Some(*session)
            }
            _ => None,
        }
    }
}

/// A time value that only moves while started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Runner {
    time: TimeValue,
    running: bool,
}

impl Runner {
    #[inline]
    pub fn time(&self) -> TimeValue {
        self.time
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    fn reset(&mut self) {
        self.time.clear();
        self.running = false;
    }
}

/// Clock, stopwatch and countdown timer driving an LED bank and a character display.
///
/// Call [`Chronograph::tick`] once per tick with that tick's button events;
/// [`crate::TickScheduler`] does this at a fixed cadence.
///
/// # Type Parameters
/// * `L` - LED bank implementation type
/// * `D` - Character display implementation type
pub struct Chronograph<L: LedBank, D: CharDisplay> {
    leds: L,
    display: D,
    config: ChronographConfig,
    state: State,
    time_of_day: TimeValue,
    stopwatch: Runner,
    countdown: Runner,
    flasher: Flasher,
    // Whole seconds last drawn on the LEDs, `None` after a blank or flash.
    leds_shown: Option<TimeValue>,
    // Start/Stop was still down when editing ended; its release is not a start.
    start_stop_consumed: bool,
}

impl<L: LedBank, D: CharDisplay> Chronograph<L, D> {
    /// Creates a chronograph in Clock mode at 00:00:00:000 with all LEDs off.
    pub fn new(mut leds: L, mut display: D, config: ChronographConfig) -> Self {
        set_all_leds(&mut leds, false);
        render_label(&mut display, Mode::Clock.label());
        render_text(&mut display, &TimeValue::ZERO);

        Self {
            leds,
            display,
            config,
            state: State::Clock(Activity::Idle),
            time_of_day: TimeValue::ZERO,
            stopwatch: Runner::default(),
            countdown: Runner::default(),
            flasher: Flasher::new(),
            leds_shown: None,
            start_stop_consumed: false,
        }
    }

    /// Runs one tick: interprets `events`, advances time, renders.
    pub fn tick(&mut self, events: ButtonEvents) {
        if !matches!(self.state, State::Clock(Activity::Editing(_))) {
            self.time_of_day.advance(self.config.tick_ms());
        }

        match self.state {
            State::Clock(Activity::Editing(session)) | State::Timer(Activity::Editing(session)) => {
                self.tick_editing(session, events);
                self.start_stop_consumed = events.held(ButtonId::StartStop);
            }
            State::Clock(Activity::Idle) | State::Stopwatch | State::Timer(Activity::Idle) => {
                self.tick_idle(events);
            }
        }
    }

    fn tick_idle(&mut self, events: ButtonEvents) {
        let mode = self.state.mode();

        let mut start_stop = events.released(ButtonId::StartStop);
        if self.start_stop_consumed {
            start_stop = false;
            self.start_stop_consumed = events.held(ButtonId::StartStop);
        }

        if events.released(ButtonId::SetTime) && mode != Mode::Stopwatch {
            self.begin_editing();
            return;
        }

        if events.released(ButtonId::ModeToggle) {
            self.switch_mode(mode.next());
            return;
        }

        match mode {
            Mode::Clock => {}
            Mode::Stopwatch => {
                if start_stop {
                    self.stopwatch.running = !self.stopwatch.running;
                    debug!("stopwatch running: {}", self.stopwatch.running);
                }
                if events.released(ButtonId::Clear) {
                    self.stopwatch.reset();
                    debug!("stopwatch cleared");
                }
                if self.stopwatch.running {
                    self.stopwatch.time.advance(self.config.tick_ms());
                }
            }
            Mode::Timer => {
                if start_stop {
                    self.toggle_countdown();
                }
                if events.released(ButtonId::Clear) {
                    self.countdown.reset();
                    debug!("countdown cleared");
                }
                if self.countdown.running {
                    self.countdown
                        .time
                        .retreat(self.config.tick_ms(), self.config.borrow_ms());
                    if self.countdown.time.is_zero() {
                        self.countdown.running = false;
                        info!("countdown expired");
                    }
                }
            }
        }

        self.render_idle(mode);
    }

    fn toggle_countdown(&mut self) {
        if !self.countdown.running && self.countdown.time.is_zero() {
            debug!("countdown at zero, not starting");
            return;
        }
        self.countdown.running = !self.countdown.running;
        debug!("countdown running: {}", self.countdown.running);
    }

    fn render_idle(&mut self, mode: Mode) {
        let time = self.displayed_time();

        if mode == Mode::Timer && time.is_zero() {
            self.flasher.render_flash(
                &mut self.leds,
                self.config.flash_cycle_ticks(),
                self.config.flash_on_ticks(),
            );
            self.leds_shown = None;
        } else if self.leds_shown != Some(whole_seconds(time)) {
            self.draw_leds(time);
        }

        render_text(&mut self.display, &time);
    }

    fn switch_mode(&mut self, mode: Mode) {
        self.stopwatch.running = false;
        self.countdown.running = false;
        self.flasher.reset();
        self.state = mode.idle();

        set_all_leds(&mut self.leds, false);
        self.leds_shown = None;
        let time = self.displayed_time();
        render_label(&mut self.display, mode.label());
        render_text(&mut self.display, &time);

        info!("mode: {}", mode);
    }

    fn begin_editing(&mut self) {
        let session = EditSession::default();

        self.state = match self.state.mode() {
            Mode::Clock => State::Clock(Activity::Editing(session)),
            Mode::Timer => {
                self.countdown.reset();
                State::Timer(Activity::Editing(session))
            }
            Mode::Stopwatch => return,
        };
        self.flasher.reset();

        render_edit_label(&mut self.display, session.cursor);
        self.refresh();

        info!("editing {}", self.state.mode());
    }

    fn end_editing(&mut self) {
        let mode = self.state.mode();
        self.state = mode.idle();

        render_label(&mut self.display, mode.label());
        self.refresh();

        info!("editing finished, mode: {}", mode);
    }

    fn tick_editing(&mut self, mut session: EditSession, events: ButtonEvents) {
        if events.released(ButtonId::SetTime) {
            self.end_editing();
            return;
        }

        if events.released(ButtonId::UnitSelect) {
            session.cursor = session.cursor.next();
            render_edit_label(&mut self.display, session.cursor);
            debug!("edit cursor: {}", session.cursor);
        }

        if events.released(ButtonId::Clear) {
            self.edit_target().set_unit(session.cursor, 0);
            self.refresh();
        }

        if events.held(ButtonId::StartStop) {
            session.held_ticks += 1;
            if session.held_ticks >= self.config.repeat_ticks() {
                session.held_ticks = 0;
                self.edit_target().increment_unit(session.cursor);
                self.draw_leds(self.displayed_time());
            }
        } else {
            session.held_ticks = 0;
        }

        self.state = match self.state {
            State::Clock(_) => State::Clock(Activity::Editing(session)),
            State::Timer(_) => State::Timer(Activity::Editing(session)),
            State::Stopwatch => State::Stopwatch,
        };

        let time = self.displayed_time();
        render_text(&mut self.display, &time);
    }

    fn edit_target(&mut self) -> &mut TimeValue {
        match self.state.mode() {
            Mode::Timer => &mut self.countdown.time,
            Mode::Clock | Mode::Stopwatch => &mut self.time_of_day,
        }
    }

    fn refresh(&mut self) {
        let time = self.displayed_time();
        self.draw_leds(time);
        render_text(&mut self.display, &time);
    }

    fn draw_leds(&mut self, time: TimeValue) {
        render_leds(&mut self.leds, &time);
        self.leds_shown = Some(whole_seconds(time));
    }

    /// The time value the active mode shows.
    pub fn displayed_time(&self) -> TimeValue {
        match self.state.mode() {
            Mode::Clock => self.time_of_day,
            Mode::Stopwatch => self.stopwatch.time,
            Mode::Timer => self.countdown.time,
        }
    }

    /// Sets the time of day, e.g. from a real-time clock at startup.
    pub fn set_time_of_day(&mut self, time: TimeValue) {
        self.time_of_day = time;
    }

    /// Loads a countdown duration without starting it.
    pub fn set_countdown(&mut self, time: TimeValue) {
        self.countdown.time = time;
        self.countdown.running = false;
    }

    /// Returns the current controller state.
    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the active mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Returns true while a time value is being set.
    #[inline]
    pub fn is_editing(&self) -> bool {
        self.state.edit_session().is_some()
    }

    #[inline]
    pub fn time_of_day(&self) -> TimeValue {
        self.time_of_day
    }

    #[inline]
    pub fn stopwatch(&self) -> Runner {
        self.stopwatch
    }

    #[inline]
    pub fn countdown(&self) -> Runner {
        self.countdown
    }

    /// Returns true if the timer is shown and its countdown sits at zero.
    pub fn is_expired(&self) -> bool {
        self.state == State::Timer(Activity::Idle) && self.countdown.time.is_zero()
    }

    /// Position within the expiry flash cycle.
    #[inline]
    pub fn flash_phase(&self) -> u16 {
        self.flasher.phase()
    }

    #[inline]
    pub fn config(&self) -> &ChronographConfig {
        &self.config
    }

    #[inline]
    pub fn leds(&self) -> &L {
        &self.leds
    }

    #[inline]
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Releases the peripherals.
    pub fn release(self) -> (L, D) {
        (self.leds, self.display)
    }
}

// The LEDs carry no subseconds, so they only change when this does.
fn whole_seconds(time: TimeValue) -> TimeValue {
    TimeValue::new(time.hours(), time.minutes(), time.seconds(), 0)
}

fn render_edit_label<D: CharDisplay>(display: &mut D, cursor: TimeUnit) {
    let label = match cursor {
        TimeUnit::Seconds => "Set: Seconds",
        TimeUnit::Minutes => "Set: Minutes",
        TimeUnit::Hours => "Set: Hours",
    };
    render_label(display, label);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullLeds;

    impl LedBank for NullLeds {
        fn write_pin(&mut self, _index: usize, _level: bool) {}
    }

    struct NullDisplay;

    impl CharDisplay for NullDisplay {
        fn set_cursor(&mut self, _col: u8, _row: u8) {}
        fn write_str(&mut self, _text: &str) {}
    }

    fn chronograph() -> Chronograph<NullLeds, NullDisplay> {
        Chronograph::new(NullLeds, NullDisplay, ChronographConfig::default())
    }

    fn release(button: ButtonId) -> ButtonEvents {
        ButtonEvents::NONE.with_release(button)
    }

    #[test]
    fn starts_idle_in_clock_mode() {
        let chrono = chronograph();
        assert_eq!(chrono.state(), State::Clock(Activity::Idle));
        assert!(chrono.time_of_day().is_zero());
    }

    #[test]
    fn stopwatch_never_enters_editing() {
        let mut chrono = chronograph();
        chrono.tick(release(ButtonId::ModeToggle));
        assert_eq!(chrono.mode(), Mode::Stopwatch);

        chrono.tick(release(ButtonId::SetTime));
        assert_eq!(chrono.state(), State::Stopwatch);
    }

    #[test]
    fn clock_freezes_only_while_itself_edited() {
        let mut chrono = chronograph();
        chrono.tick(release(ButtonId::SetTime));
        let frozen = chrono.time_of_day();
        chrono.tick(ButtonEvents::NONE);
        assert_eq!(chrono.time_of_day(), frozen);

        chrono.tick(release(ButtonId::SetTime));
        chrono.tick(release(ButtonId::ModeToggle));
        chrono.tick(release(ButtonId::ModeToggle));
        chrono.tick(release(ButtonId::SetTime));
        assert_eq!(chrono.state().mode(), Mode::Timer);
        assert!(chrono.is_editing());

        let before = chrono.time_of_day();
        chrono.tick(ButtonEvents::NONE);
        assert_eq!(chrono.time_of_day().total_millis(), before.total_millis() + 8);
    }
}
