//! Shared-flag consumer: follows the button level every quantum.

use embedded_hal_async::delay::DelayNs;

use super::PollPacing;
use crate::hardware::traits::{ActuatorCommand, Indicator};
use crate::signal::flag::{ButtonFlag, ButtonState};

/// Combinational poller: `Pressed` lights the indicator, `NotPressed` clears it.
///
/// This is a busy-poll: it issues one command per quantum whether or not the
/// flag changed, and never blocks on the flag itself.
pub struct LevelFollower<'a, I> {
    flag: &'a ButtonFlag,
    indicator: I,
    last: Option<ButtonState>,
}

impl<'a, I: Indicator> LevelFollower<'a, I> {
    pub fn new(flag: &'a ButtonFlag, indicator: I) -> Self {
        Self {
            flag,
            indicator,
            last: None,
        }
    }

    /// One quantum: read the flag and drive the indicator to match.
    pub fn step(&mut self) -> Result<ActuatorCommand, crate::Error> {
        let state = self.flag.load();
        let command = match state {
            ButtonState::Pressed => ActuatorCommand::Set,
            ButtonState::NotPressed => ActuatorCommand::Clear,
        };

        if self.last != Some(state) {
            debug!("button state {:?} -> {:?}", self.last, state);
            self.last = Some(state);
        }
        trace!("quantum: {:?}", command);

        self.indicator.apply(command)?;
        Ok(command)
    }

    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    pub async fn run<D: DelayNs>(mut self, pacing: PollPacing, mut delay: D) -> ! {
        info!("level follower started, pacing {:?}", pacing);
        loop {
            if let Err(e) = self.step() {
                error!("indicator update failed: {:?}", e);
            }
            pacing.pause(&mut delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CommandLog(Vec<ActuatorCommand>);

    impl Indicator for CommandLog {
        fn on(&mut self) -> Result<(), crate::Error> {
            self.0.push(ActuatorCommand::Set);
            Ok(())
        }

        fn off(&mut self) -> Result<(), crate::Error> {
            self.0.push(ActuatorCommand::Clear);
            Ok(())
        }

        fn toggle(&mut self) -> Result<(), crate::Error> {
            self.0.push(ActuatorCommand::Toggle);
            Ok(())
        }
    }

    #[test]
    fn one_command_per_quantum_even_without_change() {
        let flag = ButtonFlag::new();
        let mut follower = LevelFollower::new(&flag, CommandLog::default());

        for _ in 0..4 {
            follower.step().unwrap();
        }
        flag.toggle();
        for _ in 0..3 {
            follower.step().unwrap();
        }

        use ActuatorCommand::*;
        assert_eq!(
            follower.indicator().0,
            vec![Clear, Clear, Clear, Clear, Set, Set, Set]
        );
    }

    #[test]
    fn press_then_release_sets_then_clears() {
        let flag = ButtonFlag::new();
        let mut follower = LevelFollower::new(&flag, CommandLog::default());

        flag.toggle();
        assert_eq!(follower.step(), Ok(ActuatorCommand::Set));
        flag.toggle();
        assert_eq!(follower.step(), Ok(ActuatorCommand::Clear));
    }

    #[test]
    fn indicator_error_is_reported() {
        struct Broken;
        impl Indicator for Broken {
            fn on(&mut self) -> Result<(), crate::Error> {
                Err(crate::Error::Pin)
            }
            fn off(&mut self) -> Result<(), crate::Error> {
                Err(crate::Error::Pin)
            }
            fn toggle(&mut self) -> Result<(), crate::Error> {
                Err(crate::Error::Pin)
            }
        }

        let flag = ButtonFlag::new();
        let mut follower = LevelFollower::new(&flag, Broken);
        assert_eq!(follower.step(), Err(crate::Error::Pin));
    }
}
