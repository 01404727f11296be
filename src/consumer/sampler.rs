//! Notify-mode edge source: a task that samples the button and debounces it.

use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;

use super::PollPacing;
use crate::delay::delay_for;
use crate::hardware::traits::Button;
use crate::signal::SignalChannel;

/// Quiet period after a detected press, in scheduler ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct DebounceWindow(Duration);

impl DebounceWindow {
    pub const fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    pub const fn from_ticks(ticks: u64) -> Self {
        Self(Duration::from_ticks(ticks))
    }

    pub const fn as_ticks(&self) -> u64 {
        self.0.as_ticks()
    }

    pub const fn as_millis(&self) -> u64 {
        self.0.as_millis()
    }

    pub const fn duration(&self) -> Duration {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum SamplerState {
    Idle,
    Debouncing,
}

/// What one sampling quantum did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Sample {
    /// Line not asserted; the sampler is armed for the next press.
    Released,
    /// Line still asserted from a press that was already signaled.
    Held,
    /// New press: debounce window elapsed and the consumer was signaled.
    Signaled,
}

/// Samples the button each quantum and signals the consumer once per press.
///
/// On a new press the task sleeps through the whole debounce window and then
/// signals without looking at the line again, so a bounce that has already
/// gone away still produces a signal, and a second press inside the window is
/// lost. Re-arming requires one released sample, which keeps a long hold down
/// to a single signal.
pub struct PressSampler<'a, B, S: ?Sized, D> {
    button: B,
    channel: &'a S,
    delay: D,
    debounce: DebounceWindow,
    pacing: PollPacing,
    state: SamplerState,
    armed: bool,
}

impl<'a, B, S, D> PressSampler<'a, B, S, D>
where
    B: Button,
    S: SignalChannel + ?Sized,
    D: DelayNs,
{
    pub fn new(button: B, channel: &'a S, delay: D, debounce: DebounceWindow, pacing: PollPacing) -> Self {
        Self {
            button,
            channel,
            delay,
            debounce,
            pacing,
            state: SamplerState::Idle,
            armed: true,
        }
    }

    pub fn state(&self) -> SamplerState {
        self.state
    }

    /// One quantum: sample, debounce and signal on a new press, then pace.
    pub async fn step(&mut self) -> Result<Sample, crate::Error> {
        let sample = self.sample().await;
        self.pacing.pause(&mut self.delay).await;
        sample
    }

    async fn sample(&mut self) -> Result<Sample, crate::Error> {
        if !self.button.is_pressed()? {
            self.armed = true;
            return Ok(Sample::Released);
        }
        if !self.armed {
            return Ok(Sample::Held);
        }

        self.armed = false;
        self.state = SamplerState::Debouncing;
        debug!("press detected, debouncing for {} ms", self.debounce.as_millis());
        delay_for(&mut self.delay, self.debounce.duration()).await;

        self.channel.emit();
        self.state = SamplerState::Idle;
        Ok(Sample::Signaled)
    }

    pub async fn run(mut self) -> ! {
        info!(
            "press sampler started, debounce {} ms, pacing {:?}",
            self.debounce.as_millis(),
            self.pacing
        );
        loop {
            if let Err(e) = self.step().await {
                error!("button read failed: {:?}", e);
            }
        }
    }
}
