//! Task-side state machines that turn signals into indicator commands.
//!
//! Each consumer exposes a single-quantum `step` (what the tests drive) and a
//! never-returning `run` (what the embassy tasks await).

pub mod poller;
pub mod sampler;
pub mod toggler;

use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;

use crate::delay::delay_for;

/// What a task awaits between two quanta.
///
/// The executor is cooperative, so a loop body that never awaits would starve
/// every other task; some pacing is always applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum PollPacing {
    /// Re-queue behind every other ready task and come straight back.
    Yield,
    /// Sleep one period; lets the core idle between quanta.
    Every(Duration),
}

impl PollPacing {
    pub(crate) async fn pause<D: DelayNs>(self, delay: &mut D) {
        match self {
            PollPacing::Yield => embassy_futures::yield_now().await,
            PollPacing::Every(period) => delay_for(delay, period).await,
        }
    }
}
