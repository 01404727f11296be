//! Board wiring and application settings.
//!
//! Blue Pill (STM32F103C8) wiring:
//!   - Indicator LED: PC13 onboard LED, lit when driven low
//!   - Button: PB12 to 3V3, internal pull-down, pressed = high
//!
//! PB12 sits on EXTI line 12, served by the shared `EXTI15_10` vector.

use embassy_time::Duration;

use crate::Error;
use crate::consumer::PollPacing;
use crate::consumer::sampler::DebounceWindow;
use crate::hardware::{Edge, Polarity};
use crate::signal::notify::NotifyAction;
use crate::signal::{SignalingMode, Timeout};

// ===================================================================
// Pin assignments
// ===================================================================

pub const BUTTON_PORT: char = 'B';
pub const BUTTON_PIN: u8 = 12;
pub const LED_PORT: char = 'C';
pub const LED_PIN: u8 = 13;

// ===================================================================
// Timing and priorities
// ===================================================================

/// Debounce window after a detected press.
pub const DEBOUNCE_MS: u64 = 100;
/// Button interrupt priority (0 is most urgent, 15 least).
pub const BUTTON_IRQ_PRIORITY: u8 = 5;
/// One consumer quantum: 1 ms, the period of a 1 kHz RTOS tick.
pub const QUANTUM: Duration = Duration::from_millis(1);
/// How often `main` reports that the system is alive.
pub const HEARTBEAT_SECS: u64 = 10;

/// Number of implemented NVIC priority bits on the STM32F1.
const NVIC_PRIO_LEVELS: u8 = 16;

/// Everything the firmware needs to know to wire one signaling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct AppConfig {
    pub mode: SignalingMode,
    pub button_port: char,
    /// Pin number on `button_port`, which is also its EXTI line.
    pub button_line: u8,
    pub button_polarity: Polarity,
    pub led_polarity: Polarity,
    /// EXTI trigger for the shared-flag edge source.
    pub edge: Edge,
    pub irq_priority: u8,
    /// Pacing of the level follower (shared flag) and of the sampler (notify).
    pub pacing: PollPacing,
    pub debounce: DebounceWindow,
    pub notify_timeout: Timeout,
    pub notify_action: NotifyAction,
}

impl AppConfig {
    /// EXTI-driven flag, level-following LED.
    pub const fn shared_flag() -> Self {
        Self {
            mode: SignalingMode::SharedFlag,
            button_port: BUTTON_PORT,
            button_line: BUTTON_PIN,
            button_polarity: Polarity::ActiveHigh,
            led_polarity: Polarity::ActiveLow,
            edge: Edge::Rising,
            irq_priority: BUTTON_IRQ_PRIORITY,
            pacing: PollPacing::Every(QUANTUM),
            debounce: DebounceWindow::from_millis(DEBOUNCE_MS),
            notify_timeout: Timeout::Forever,
            notify_action: NotifyAction::NoAction,
        }
    }

    /// Sampled and debounced button, toggling LED on notification.
    pub const fn notify() -> Self {
        Self {
            mode: SignalingMode::Notify,
            ..Self::shared_flag()
        }
    }

    /// Reject settings the hardware cannot honor.
    pub fn validate(&self) -> Result<(), Error> {
        if self.button_line > 15 {
            return Err(Error::InvalidLine(self.button_line));
        }
        if !matches!(self.button_port, 'A'..='G') {
            return Err(Error::InvalidPort(self.button_port));
        }
        if self.irq_priority >= NVIC_PRIO_LEVELS {
            return Err(Error::InvalidPriority(self.irq_priority));
        }
        if self.mode == SignalingMode::Notify && self.debounce.as_ticks() == 0 {
            return Err(Error::ZeroDebounceWindow);
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::notify()
    }
}
