//! Host stand-ins for the board: a latched output pin, a virtual clock and a
//! button that is pressed during scripted time spans.

#![allow(dead_code)]

use core::convert::Infallible;
use std::cell::Cell;
use std::rc::Rc;

use edge_signal::hardware::traits::{Button, PendingLine};
use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};
use embedded_hal_async::delay::DelayNs;

/// Output latch shared with the test so the pin can be inspected after it is
/// moved into an LED.
#[derive(Clone)]
pub struct LatchPin(Rc<Cell<bool>>);

impl LatchPin {
    pub fn new(high: bool) -> Self {
        Self(Rc::new(Cell::new(high)))
    }

    pub fn is_high(&self) -> bool {
        self.0.get()
    }
}

impl ErrorType for LatchPin {
    type Error = Infallible;
}

impl OutputPin for LatchPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.set(true);
        Ok(())
    }
}

impl StatefulOutputPin for LatchPin {
    fn is_set_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.get())
    }

    fn is_set_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.0.get())
    }
}

/// EXTI stand-in that counts acknowledged interrupts.
pub struct CountingLine(pub Rc<Cell<u32>>);

impl PendingLine for CountingLine {
    fn clear_pending(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Microsecond clock that only moves when a delay is awaited.
#[derive(Clone, Default)]
pub struct VirtualClock(Rc<Cell<u64>>);

impl VirtualClock {
    pub fn now_ms(&self) -> u64 {
        self.0.get() / 1_000
    }

    pub fn delay(&self) -> ClockDelay {
        ClockDelay(self.clone())
    }

    fn advance_us(&self, us: u64) {
        self.0.set(self.0.get() + us);
    }
}

pub struct ClockDelay(VirtualClock);

impl DelayNs for ClockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.0.advance_us(u64::from(ns).div_ceil(1_000));
    }

    async fn delay_us(&mut self, us: u32) {
        self.0.advance_us(u64::from(us));
    }
}

/// Reads pressed while the clock is inside one of the `[from, to)` spans (ms).
pub struct TimedButton {
    clock: VirtualClock,
    presses: Vec<(u64, u64)>,
}

impl TimedButton {
    pub fn new(clock: &VirtualClock, presses: &[(u64, u64)]) -> Self {
        Self {
            clock: clock.clone(),
            presses: presses.to_vec(),
        }
    }
}

impl Button for TimedButton {
    fn is_pressed(&mut self) -> Result<bool, edge_signal::Error> {
        let now = self.clock.now_ms();
        Ok(self.presses.iter().any(|&(from, to)| (from..to).contains(&now)))
    }
}
