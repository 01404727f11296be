use core::fmt;

/// Errors surfaced by board bring-up and the indicator/button drivers.
///
/// Configuration variants are fatal at init; `main` panics on them so the
/// failure halts visibly under the probe instead of running half-configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Error {
    /// EXTI line outside `0..=15`.
    InvalidLine(u8),
    /// GPIO port letter the EXTI multiplexer cannot route.
    InvalidPort(char),
    /// NVIC priority outside the 4 implemented bits.
    InvalidPriority(u8),
    /// A debounce window of zero ticks.
    ZeroDebounceWindow,
    /// The underlying HAL pin reported an error.
    Pin,
    /// The executor had no room left for a task.
    Spawn,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLine(line) => write!(f, "EXTI line {line} does not exist"),
            Error::InvalidPort(port) => write!(f, "GPIO port {port} cannot drive EXTI"),
            Error::InvalidPriority(prio) => write!(f, "NVIC priority {prio} out of range"),
            Error::ZeroDebounceWindow => f.write_str("debounce window must be at least one tick"),
            Error::Pin => f.write_str("GPIO pin access failed"),
            Error::Spawn => f.write_str("task spawn failed"),
        }
    }
}

#[cfg(target_os = "none")]
impl From<embassy_executor::SpawnError> for Error {
    fn from(_: embassy_executor::SpawnError) -> Self {
        Error::Spawn
    }
}
