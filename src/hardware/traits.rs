/// One command for the indicator output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum ActuatorCommand {
    Set,
    Clear,
    Toggle,
}

/// Digital output driven by the consumer tasks.
///
/// Callable from any task. Implementations are not required to be
/// interrupt-safe, so do not call them from an interrupt handler.
pub trait Indicator {
    fn on(&mut self) -> Result<(), crate::Error>;
    fn off(&mut self) -> Result<(), crate::Error>;
    fn toggle(&mut self) -> Result<(), crate::Error>;

    fn apply(&mut self, command: ActuatorCommand) -> Result<(), crate::Error> {
        match command {
            ActuatorCommand::Set => self.on(),
            ActuatorCommand::Clear => self.off(),
            ActuatorCommand::Toggle => self.toggle(),
        }
    }
}

pub trait Button {
    fn is_pressed(&mut self) -> Result<bool, crate::Error>;
}

/// Interrupt line whose latched pending bit must be acknowledged by its handler.
pub trait PendingLine {
    fn clear_pending(&mut self);
}
