use embedded_hal::digital::InputPin;

use super::Polarity;
use super::traits::Button;

/// Push button read through any `embedded-hal` input pin.
pub struct GpioButton<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: InputPin> GpioButton<P> {
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }
}

impl<P: InputPin> Button for GpioButton<P> {
    fn is_pressed(&mut self) -> Result<bool, crate::Error> {
        let high = self.pin.is_high().map_err(|_| crate::Error::Pin)?;
        Ok(high == self.polarity.level(true))
    }
}
