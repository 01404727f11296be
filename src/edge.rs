//! Interrupt-side half of the control loop.

use crate::hardware::traits::PendingLine;
use crate::signal::SignalChannel;

/// Body of the button interrupt handler.
///
/// Runs in interrupt context: it never blocks, never logs, and touches only
/// the latch register and the channel. In notify mode no edge source exists;
/// the button is sampled by [`PressSampler`](crate::consumer::sampler::PressSampler)
/// instead.
pub struct EdgeSource<'a, L, S: ?Sized> {
    line: L,
    channel: &'a S,
    edges: u32,
}

impl<'a, L, S> EdgeSource<'a, L, S>
where
    L: PendingLine,
    S: SignalChannel + ?Sized,
{
    pub fn new(line: L, channel: &'a S) -> Self {
        Self {
            line,
            channel,
            edges: 0,
        }
    }

    /// Handle one interrupt.
    ///
    /// The latch must be cleared before anything else, otherwise the NVIC
    /// re-enters the handler as soon as it returns and starves every task.
    pub fn on_interrupt(&mut self) {
        self.line.clear_pending();
        self.channel.emit();
        self.edges = self.edges.wrapping_add(1);
    }

    /// Interrupts handled so far (wraps).
    pub fn edges(&self) -> u32 {
        self.edges
    }

    pub fn line(&self) -> &L {
        &self.line
    }
}
