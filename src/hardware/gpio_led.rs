use embedded_hal::digital::StatefulOutputPin;

use super::Polarity;
use super::traits::Indicator;

/// LED on any `embedded-hal` push-pull output.
///
/// The Blue Pill's onboard LED (PC13) sinks current, so it is `ActiveLow`.
pub struct GpioLed<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: StatefulOutputPin> GpioLed<P> {
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    fn drive(&mut self, lit: bool) -> Result<(), crate::Error> {
        let result = if self.polarity.level(lit) {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| crate::Error::Pin)
    }

    pub fn is_lit(&mut self) -> Result<bool, crate::Error> {
        let high = self.pin.is_set_high().map_err(|_| crate::Error::Pin)?;
        Ok(high == self.polarity.level(true))
    }
}

impl<P: StatefulOutputPin> Indicator for GpioLed<P> {
    fn on(&mut self) -> Result<(), crate::Error> {
        self.drive(true)
    }

    fn off(&mut self) -> Result<(), crate::Error> {
        self.drive(false)
    }

    fn toggle(&mut self) -> Result<(), crate::Error> {
        self.pin.toggle().map_err(|_| crate::Error::Pin)
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use embedded_hal::digital::{ErrorType, OutputPin};

    use super::*;
    use crate::hardware::traits::ActuatorCommand;

    #[derive(Default)]
    struct LatchPin {
        high: bool,
    }

    impl ErrorType for LatchPin {
        type Error = Infallible;
    }

    impl OutputPin for LatchPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }
    }

    impl StatefulOutputPin for LatchPin {
        fn is_set_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.high)
        }

        fn is_set_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.high)
        }
    }

    #[test]
    fn active_low_led_drives_inverted_level() {
        let mut led = GpioLed::new(LatchPin { high: true }, Polarity::ActiveLow);

        led.apply(ActuatorCommand::Set).unwrap();
        assert!(!led.pin.high);
        assert!(led.is_lit().unwrap());

        led.apply(ActuatorCommand::Clear).unwrap();
        assert!(led.pin.high);
        assert!(!led.is_lit().unwrap());
    }

    #[test]
    fn toggle_inverts_current_output() {
        let mut led = GpioLed::new(LatchPin::default(), Polarity::ActiveHigh);

        led.apply(ActuatorCommand::Toggle).unwrap();
        assert!(led.is_lit().unwrap());
        led.apply(ActuatorCommand::Toggle).unwrap();
        assert!(!led.is_lit().unwrap());
    }
}
