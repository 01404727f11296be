//! Firmware wiring: allocates the channel for the selected signaling mode,
//! registers the interrupt-side state and spawns the consumer tasks.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Output};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Delay, Instant, Timer};
use static_cell::StaticCell;

use crate::Error;
use crate::config::{AppConfig, HEARTBEAT_SECS};
use crate::consumer::PollPacing;
use crate::consumer::poller::LevelFollower;
use crate::consumer::sampler::{DebounceWindow, PressSampler};
use crate::consumer::toggler::Toggler;
use crate::edge::EdgeSource;
use crate::hardware::exti::ExtiLine;
use crate::hardware::gpio_button::GpioButton;
use crate::hardware::gpio_led::GpioLed;
use crate::signal::flag::ButtonFlag;
use crate::signal::notify::Notification;
use crate::signal::{SignalingMode, Timeout};

pub type BoardLed = GpioLed<Output<'static>>;
pub type BoardButton = GpioButton<Input<'static>>;
pub type BoardNotification = Notification<CriticalSectionRawMutex>;

type ButtonEdgeSource = EdgeSource<'static, ExtiLine, ButtonFlag>;

static FLAG: StaticCell<ButtonFlag> = StaticCell::new();
static IDLE_BUTTON: StaticCell<BoardButton> = StaticCell::new();
static NOTIFICATION: StaticCell<BoardNotification> = StaticCell::new();

// The one piece of state an interrupt handler has to reach by name.
static EDGE_SOURCE: Mutex<RefCell<Option<ButtonEdgeSource>>> = Mutex::new(RefCell::new(None));

pub fn print_banner(config: &AppConfig) {
    info!("========================================");
    match config.mode {
        SignalingMode::SharedFlag => info!("LED and button interrupt demo (shared flag)"),
        SignalingMode::Notify => info!("This is Demo of Task Notify APIs"),
    }
    info!(
        "Button: P{}{} ({:?}), LED: P{}{} ({:?})",
        config.button_port,
        config.button_line,
        config.button_polarity,
        crate::config::LED_PORT,
        crate::config::LED_PIN,
        config.led_polarity
    );
    info!("Debounce: {} ms ({} ticks)", config.debounce.as_millis(), config.debounce.as_ticks());
    info!("========================================");
}

/// Validate `config` and start the tasks for its signaling mode.
///
/// `button` is sampled by a task in notify mode. In shared-flag mode it is
/// only parked so the pin keeps its input configuration, and the EXTI line is
/// armed instead.
pub fn start(spawner: &Spawner, config: &AppConfig, button: BoardButton, led: BoardLed) -> Result<(), Error> {
    config.validate()?;
    match config.mode {
        SignalingMode::SharedFlag => start_shared_flag(spawner, config, button, led),
        SignalingMode::Notify => start_notify(spawner, config, button, led),
    }
}

fn start_shared_flag(spawner: &Spawner, config: &AppConfig, button: BoardButton, led: BoardLed) -> Result<(), Error> {
    let flag: &'static ButtonFlag = FLAG.init(ButtonFlag::new());
    let line = ExtiLine::configure(config.button_port, config.button_line, config.edge)?;

    // Register before unmasking; the vector cannot fire inside the critical section.
    critical_section::with(|cs| {
        let mut slot = EDGE_SOURCE.borrow_ref_mut(cs);
        let source = slot.insert(EdgeSource::new(line, flag));
        source.line().listen(config.irq_priority)
    })?;
    info!(
        "EXTI{} armed on {:?} edge, priority {}",
        config.button_line, config.edge, config.irq_priority
    );

    // Never dropped: dropping an embassy pin resets it to analog.
    IDLE_BUTTON.init(button);

    spawner.spawn(level_follower_task(flag, led, config.pacing))?;
    Ok(())
}

fn start_notify(spawner: &Spawner, config: &AppConfig, button: BoardButton, led: BoardLed) -> Result<(), Error> {
    let notification: &'static BoardNotification = NOTIFICATION.init(Notification::new(config.notify_action));

    spawner.spawn(toggler_task(notification, led, config.notify_timeout))?;
    spawner.spawn(press_sampler_task(button, notification, config.debounce, config.pacing))?;
    Ok(())
}

/// Body of the button EXTI handler.
///
/// The handler must be registered before its line is unmasked; reaching this
/// without one would leave the latch set and spin in the handler forever, so
/// halt instead.
pub fn on_button_interrupt() {
    critical_section::with(|cs| match EDGE_SOURCE.borrow_ref_mut(cs).as_mut() {
        Some(source) => source.on_interrupt(),
        None => panic!("button interrupt with no edge source registered"),
    });
}

/// Interrupts handled by the edge source, if one is registered.
pub fn edges_handled() -> Option<u32> {
    critical_section::with(|cs| EDGE_SOURCE.borrow_ref(cs).as_ref().map(|source| source.edges()))
}

/// Supervisor loop for `main`: periodic liveness report.
pub async fn supervise() -> ! {
    loop {
        Timer::after_secs(HEARTBEAT_SECS).await;
        let uptime = Instant::now().as_secs();
        match edges_handled() {
            Some(edges) => info!("Status: uptime {} s, {} button edges", uptime, edges),
            None => info!("Status: uptime {} s", uptime),
        }
    }
}

#[embassy_executor::task]
async fn level_follower_task(flag: &'static ButtonFlag, led: BoardLed, pacing: PollPacing) {
    LevelFollower::new(flag, led).run(pacing, Delay).await
}

#[embassy_executor::task]
async fn press_sampler_task(
    button: BoardButton,
    notification: &'static BoardNotification,
    debounce: DebounceWindow,
    pacing: PollPacing,
) {
    PressSampler::new(button, notification, Delay, debounce, pacing).run().await
}

#[embassy_executor::task]
async fn toggler_task(notification: &'static BoardNotification, led: BoardLed, timeout: Timeout) {
    Toggler::new(notification, led, Delay, timeout).run().await
}
