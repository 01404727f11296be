//! Raw EXTI line setup for the button interrupt.
//!
//! The HAL's async EXTI driver owns the EXTI vectors when enabled, so this
//! crate leaves that feature off and programs the line directly: AFIO routes
//! the port to the line, EXTI picks the edge and unmasks it, the NVIC gets the
//! priority. The application's `#[interrupt]` handler then acknowledges the
//! latch through [`PendingLine`].

use embassy_stm32::interrupt::{Interrupt, InterruptExt, Priority};
use embassy_stm32::pac;

use super::Edge;
use super::traits::PendingLine;
use crate::Error;

/// One configured EXTI line (0..=15).
pub struct ExtiLine {
    line: u8,
}

impl ExtiLine {
    /// Route `port` (`'A'`..=`'G'`) to `line` and select the trigger edge.
    ///
    /// The line stays masked until [`ExtiLine::listen`].
    pub fn configure(port: char, line: u8, edge: Edge) -> Result<Self, Error> {
        if line > 15 {
            return Err(Error::InvalidLine(line));
        }
        let port_index = match port {
            'A'..='G' => port as u8 - b'A',
            _ => return Err(Error::InvalidPort(port)),
        };
        let n = line as usize;

        // AFIO must be clocked before EXTICR accepts writes.
        pac::RCC.apb2enr().modify(|w| w.set_afioen(true));
        pac::AFIO.exticr(n / 4).modify(|w| w.set_exti(n % 4, port_index));

        let (rising, falling) = match edge {
            Edge::Rising => (true, false),
            Edge::Falling => (false, true),
            Edge::Both => (true, true),
        };
        pac::EXTI.rtsr(0).modify(|w| w.set_line(n, rising));
        pac::EXTI.ftsr(0).modify(|w| w.set_line(n, falling));

        Ok(Self { line })
    }

    pub fn line(&self) -> u8 {
        self.line
    }

    /// NVIC vector that serves this line.
    pub fn irq(&self) -> Interrupt {
        match self.line {
            0 => Interrupt::EXTI0,
            1 => Interrupt::EXTI1,
            2 => Interrupt::EXTI2,
            3 => Interrupt::EXTI3,
            4 => Interrupt::EXTI4,
            5..=9 => Interrupt::EXTI9_5,
            _ => Interrupt::EXTI15_10,
        }
    }

    /// Drop any stale latch, unmask the line and enable its vector.
    ///
    /// Call only after the handler's state is registered: the vector can fire
    /// before this returns.
    pub fn listen(&self, priority: u8) -> Result<(), Error> {
        let priority = nvic_priority(priority)?;
        let n = self.line as usize;

        pac::EXTI.pr(0).write(|w| w.set_line(n, true));
        pac::EXTI.imr(0).modify(|w| w.set_line(n, true));

        let irq = self.irq();
        irq.set_priority(priority);
        // SAFETY: the handler for this vector is defined by the binary and only
        // touches state registered before this call.
        unsafe { irq.enable() };
        Ok(())
    }
}

impl PendingLine for ExtiLine {
    fn clear_pending(&mut self) {
        // PR is write-one-to-clear
        pac::EXTI.pr(0).write(|w| w.set_line(self.line as usize, true));
    }
}

fn nvic_priority(level: u8) -> Result<Priority, Error> {
    let priority = match level {
        0 => Priority::P0,
        1 => Priority::P1,
        2 => Priority::P2,
        3 => Priority::P3,
        4 => Priority::P4,
        5 => Priority::P5,
        6 => Priority::P6,
        7 => Priority::P7,
        8 => Priority::P8,
        9 => Priority::P9,
        10 => Priority::P10,
        11 => Priority::P11,
        12 => Priority::P12,
        13 => Priority::P13,
        14 => Priority::P14,
        15 => Priority::P15,
        _ => return Err(Error::InvalidPriority(level)),
    };
    Ok(priority)
}
