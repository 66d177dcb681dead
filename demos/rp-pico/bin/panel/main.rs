#![no_std]
#![no_main]

use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::{Sio, Timer, clocks::init_clocks_and_plls, pac, watchdog::Watchdog};
use rtt_target::{rprintln, rtt_init_print};

use rp_pico_demos::rtt_display::RttDisplay;
use rp_pico_demos::time::HardwareTimer;

use led_chronograph::{
    ActiveLevel, Chronograph, ChronographConfig, GpioButtons, GpioLeds, TickScheduler,
};

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== RP Pico Chronograph Panel ===");

    // Get peripherals
    let mut pac = pac::Peripherals::take().unwrap();

    // Set up watchdog driver
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let sio = Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // GPIO0-5 seconds, GPIO6-11 minutes, GPIO12-16 hours
    let leds = GpioLeds::new([
        pins.gpio0.into_push_pull_output().into_dyn_pin(),
        pins.gpio1.into_push_pull_output().into_dyn_pin(),
        pins.gpio2.into_push_pull_output().into_dyn_pin(),
        pins.gpio3.into_push_pull_output().into_dyn_pin(),
        pins.gpio4.into_push_pull_output().into_dyn_pin(),
        pins.gpio5.into_push_pull_output().into_dyn_pin(),
        pins.gpio6.into_push_pull_output().into_dyn_pin(),
        pins.gpio7.into_push_pull_output().into_dyn_pin(),
        pins.gpio8.into_push_pull_output().into_dyn_pin(),
        pins.gpio9.into_push_pull_output().into_dyn_pin(),
        pins.gpio10.into_push_pull_output().into_dyn_pin(),
        pins.gpio11.into_push_pull_output().into_dyn_pin(),
        pins.gpio12.into_push_pull_output().into_dyn_pin(),
        pins.gpio13.into_push_pull_output().into_dyn_pin(),
        pins.gpio14.into_push_pull_output().into_dyn_pin(),
        pins.gpio15.into_push_pull_output().into_dyn_pin(),
        pins.gpio16.into_push_pull_output().into_dyn_pin(),
    ]);

    // Start/stop, clear, unit select, mode, set time; switches to ground
    let buttons = GpioButtons::new(
        [
            pins.gpio17.into_pull_up_input().into_dyn_pin(),
            pins.gpio18.into_pull_up_input().into_dyn_pin(),
            pins.gpio19.into_pull_up_input().into_dyn_pin(),
            pins.gpio20.into_pull_up_input().into_dyn_pin(),
            pins.gpio21.into_pull_up_input().into_dyn_pin(),
        ],
        ActiveLevel::Low,
    );

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let time_source = HardwareTimer::new(timer);

    let config = ChronographConfig::default();
    let mut chronograph = Chronograph::new(leds, RttDisplay::new(), config);
    // Timer is Copy: one handle measures, the other sleeps.
    let mut scheduler = TickScheduler::new(&time_source, timer, buttons, &config);

    rprintln!("Ticking every {} ms", config.tick_ms());
    scheduler.run(&mut chronograph)
}
