//! STM32 Blue Pill LED and Button Interrupt (shared flag)
//! =============================================================================================
//!
//! Date			Author          Notes
//! 16/10/2026	    YHY             Initial release
//!
//!==============================================================================================
//!
//! The button's rising edge raises EXTI line 12. The handler acknowledges the
//! latch and flips a shared button flag; a low-priority task polls the flag
//! every quantum and lights the LED while the flag reads "pressed".
//!
//! Hardware Connections:
//!   - Onboard LED: PC13 (active low, no external connection needed)
//!   - Button: PB12 to 3V3 (internal pull-down enabled)
//!
//! Expected Behavior:
//!   - First press lights the LED, next press turns it off, and so on
//!   - No debouncing: a bouncy switch may flip the flag more than once per press
//!   - Uptime and the number of handled edges are logged via defmt RTT
//!
//! Flash with:
//!   cargo run --release --target thumbv7m-none-eabi --bin led_and_button_it

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
    embassy_stm32::{
        gpio::{Input, Level, Output, Pull, Speed},
        interrupt,
    },
    panic_probe as _, // Panic handler
};

#[cfg(target_os = "none")]
const CONFIG: AppConfig = AppConfig::shared_flag();

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

    // Arms EXTI12 and spawns the level follower
    defmt::unwrap!(app::start(&spawner, &CONFIG, button, led));

    app::supervise().await
}

/// EXTI lines 10..=15; only line 12 is unmasked.
#[cfg(target_os = "none")]
#[interrupt]
fn EXTI15_10() {
    app::on_button_interrupt();
}

// The firmware only exists on the board; host builds just need an entry point.
#[cfg(not(target_os = "none"))]
fn main() {}
