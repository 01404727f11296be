//! Shared-flag channel: one atomic cell written by the EXTI handler.

use portable_atomic::{AtomicBool, Ordering};

use super::SignalChannel;

/// Logical state of the button as seen by the poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum ButtonState {
    #[default]
    NotPressed,
    Pressed,
}

impl ButtonState {
    pub const fn flipped(self) -> Self {
        match self {
            ButtonState::NotPressed => ButtonState::Pressed,
            ButtonState::Pressed => ButtonState::NotPressed,
        }
    }

    const fn from_bool(pressed: bool) -> Self {
        if pressed {
            ButtonState::Pressed
        } else {
            ButtonState::NotPressed
        }
    }
}

/// Single-writer / single-reader button state.
///
/// The edge source is the only writer (via [`ButtonFlag::toggle`]); the poller
/// only loads. Relaxed ordering is enough because no other memory is published
/// through the flag.
pub struct ButtonFlag {
    pressed: AtomicBool,
}

impl ButtonFlag {
    /// New flag in the `NotPressed` state.
    pub const fn new() -> Self {
        Self {
            pressed: AtomicBool::new(false),
        }
    }

    pub fn load(&self) -> ButtonState {
        ButtonState::from_bool(self.pressed.load(Ordering::Relaxed))
    }

    /// Flip the state and return the new value.
    pub fn toggle(&self) -> ButtonState {
        // fetch_xor returns the previous value
        ButtonState::from_bool(self.pressed.fetch_xor(true, Ordering::Relaxed)).flipped()
    }
}

impl Default for ButtonFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalChannel for ButtonFlag {
    fn emit(&self) {
        self.toggle();
    }
}
