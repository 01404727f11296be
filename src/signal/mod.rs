//! Interrupt-to-task signal channels.
//!
//! Both channels implement [`SignalChannel`], so the edge source and the
//! sampling task do not care which one they feed.

pub mod flag;
pub mod notify;

use embassy_time::Duration;

/// Which channel carries the button edge to the consumer task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum SignalingMode {
    /// EXTI handler flips a [`flag::ButtonFlag`]; a poller follows the level.
    SharedFlag,
    /// A sampling task notifies a toggler through [`notify::Notification`].
    Notify,
}

/// Deliver one unit of information to the consumer on the other side.
///
/// Must not block: implementations are called from interrupt handlers.
pub trait SignalChannel {
    fn emit(&self);
}

impl<T: SignalChannel + ?Sized> SignalChannel for &T {
    fn emit(&self) {
        (**self).emit()
    }
}

/// How long a notification wait may block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Timeout {
    /// Block until signaled.
    Forever,
    /// Give up after this long.
    After(Duration),
}

impl Timeout {
    pub const fn from_millis(ms: u64) -> Self {
        Timeout::After(Duration::from_millis(ms))
    }
}

/// Result of a notification wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum WaitOutcome {
    Signaled,
    TimedOut,
}
