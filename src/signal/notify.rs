//! Blocking notification channel addressed to a single consumer task.

use core::cell::Cell;

use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use embedded_hal_async::delay::DelayNs;

use super::{SignalChannel, Timeout, WaitOutcome};
use crate::delay::delay_for;

/// What a notify does to the pending count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum NotifyAction {
    /// Single slot: any number of notifies before a wait collapse into one wake.
    #[default]
    NoAction,
    /// Counting: every notify is one wake, consumed one per wait.
    Increment,
}

/// Data-free wake-up delivered to exactly one waiting task.
///
/// `notify` may be called from any context, interrupts included. `wait` is for
/// the single owning consumer; concurrent waiters are not supported.
pub struct Notification<M: RawMutex> {
    pending: Mutex<M, Cell<u32>>,
    wake: Signal<M, ()>,
    action: NotifyAction,
}

impl<M: RawMutex> Notification<M> {
    pub const fn new(action: NotifyAction) -> Self {
        Self {
            pending: Mutex::new(Cell::new(0)),
            wake: Signal::new(),
            action,
        }
    }

    pub fn action(&self) -> NotifyAction {
        self.action
    }

    /// Mark the notification pending and wake the waiter, if any.
    pub fn notify(&self) {
        self.pending.lock(|pending| {
            let next = match self.action {
                NotifyAction::NoAction => 1,
                NotifyAction::Increment => pending.get().saturating_add(1),
            };
            pending.set(next);
        });
        self.wake.signal(());
    }

    /// Wakes still owed to the consumer.
    pub fn pending(&self) -> u32 {
        self.pending.lock(|pending| pending.get())
    }

    /// Consume one pending wake without blocking.
    pub fn try_take(&self) -> bool {
        self.pending.lock(|pending| match pending.get() {
            0 => false,
            n => {
                pending.set(match self.action {
                    NotifyAction::NoAction => 0,
                    NotifyAction::Increment => n - 1,
                });
                true
            }
        })
    }

    /// Block until a wake can be consumed.
    pub async fn wait_forever(&self) {
        loop {
            if self.try_take() {
                return;
            }
            // A stale wake only costs one extra pass through the loop.
            self.wake.wait().await;
        }
    }

    /// Block until notified or until `timeout` elapses on `delay`.
    ///
    /// A notification pending when the call starts is consumed immediately,
    /// even with a zero timeout.
    pub async fn wait<D: DelayNs>(&self, timeout: Timeout, delay: &mut D) -> WaitOutcome {
        match timeout {
            Timeout::Forever => {
                self.wait_forever().await;
                WaitOutcome::Signaled
            }
            Timeout::After(limit) => {
                match select(self.wait_forever(), delay_for(delay, limit)).await {
                    Either::First(()) => WaitOutcome::Signaled,
                    Either::Second(()) => WaitOutcome::TimedOut,
                }
            }
        }
    }
}

impl<M: RawMutex> SignalChannel for Notification<M> {
    fn emit(&self) {
        self.notify();
    }
}
