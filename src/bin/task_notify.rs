//! STM32 Blue Pill Task Notify Demo
//! =============================================================================================
//!
//! Date			Author          Notes
//! 16/10/2026	    YHY             Initial release
//!
//!==============================================================================================
//!
//! A sampling task watches the button. On a press it waits out a 100 ms
//! debounce window and notifies the LED task, which blocks on the notification
//! and toggles the LED each time it is woken.
//!
//! The button interrupt is not used in this mode; the line is sampled by a
//! task.
//!
//! Hardware Connections:
//!   - Onboard LED: PC13 (active low, no external connection needed)
//!   - Button: PB12 to 3V3 (internal pull-down enabled)
//!
//! Expected Behavior:
//!   - Each press toggles the LED once, however long it is held
//!   - A second press within the debounce window is ignored
//!   - "Notification is received" is logged via defmt RTT on every toggle
//!
//! Flash with:
//!   cargo run --release --target thumbv7m-none-eabi --bin task_notify

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
use {
    defmt_rtt as _, // Global logger
    edge_signal::{
        app,
        config::AppConfig,
        hardware::{gpio_button::GpioButton, gpio_led::GpioLed},
    },
    embassy_executor::Spawner,
    embassy_stm32::gpio::{Input, Level, Output, Pull, Speed},
    panic_probe as _, // Panic handler
};

#[cfg(target_os = "none")]
const CONFIG: AppConfig = AppConfig::notify();

/// Main application entry point
#[cfg(target_os = "none")]
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // Initialize microcontroller peripherals with default configuration
    let p = embassy_stm32::init(Default::default());

    app::print_banner(&CONFIG);

    // Button (PB12): pressed pulls the line high
    let button = GpioButton::new(Input::new(p.PB12, Pull::Down), CONFIG.button_polarity);

    // Onboard LED (PC13): start high, i.e. off
    let led = GpioLed::new(Output::new(p.PC13, Level::High, Speed::Low), CONFIG.led_polarity);

    // Spawns the toggler and the press sampler
    defmt::unwrap!(app::start(&spawner, &CONFIG, button, led));

    app::supervise().await
}

// The firmware only exists on the board; host builds just need an entry point.
#[cfg(not(target_os = "none"))]
fn main() {}
