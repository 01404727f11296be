pub mod gpio_button;
pub mod gpio_led;
pub mod traits;

#[cfg(target_os = "none")]
pub mod exti;

/// Electrical level that means "active" for a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    /// Pin level (high = `true`) that corresponds to the logical `active` value.
    pub const fn level(self, active: bool) -> bool {
        match self {
            Polarity::ActiveHigh => active,
            Polarity::ActiveLow => !active,
        }
    }
}

/// Which input transition latches an interrupt line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Edge {
    Rising,
    Falling,
    Both,
}
