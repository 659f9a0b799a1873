//! # Embedded HAL view of a single pin
//!
//! [`GpioPin`] borrows the [`Gpio`] for one [`ValidPin`] and implements the
//! embedded HAL digital traits on top of it, namely [`InputPin`],
//! [`OutputPin`], [`StatefulOutputPin`] and [`ToggleableOutputPin`]. This is
//! the way to hand a board pin to a driver crate.
//!
//! The pin was validated when it was configured, so none of the trait
//! functions can fail and `Error = Infallible`.
//!
//! ```ignore
//! let cs = gpio.init_out(SysId::D10, PinState::High)?;
//! let mut cs = gpio.pin(cs);
//! cs.set_low().ok();
//! ```

use super::{pins::ValidPin, reg::PortDriver, Gpio, PinState};
use core::convert::Infallible;
use embedded_hal::digital::v2::{InputPin, OutputPin, StatefulOutputPin, ToggleableOutputPin};

/// A configured pin, borrowed from its [`Gpio`]
pub struct GpioPin<'a, D> {
    gpio: &'a mut Gpio<D>,
    pin: ValidPin,
}

impl<'a, D: PortDriver> GpioPin<'a, D> {
    #[inline]
    pub(super) fn new(gpio: &'a mut Gpio<D>, pin: ValidPin) -> Self {
        GpioPin { gpio, pin }
    }

    /// Return a copy of the pin
    #[inline]
    pub fn id(&self) -> ValidPin {
        self.pin
    }

    #[inline]
    fn level(&self) -> PinState {
        self.gpio.read(self.pin)
    }
}

//==================================================================================================
// Embedded HAL traits
//==================================================================================================

impl<D: PortDriver> OutputPin for GpioPin<'_, D> {
    type Error = Infallible;
    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.gpio.set(self.pin);
        Ok(())
    }
    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.gpio.clear(self.pin);
        Ok(())
    }
}

impl<D: PortDriver> InputPin for GpioPin<'_, D> {
    type Error = Infallible;
    #[inline]
    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.level() == PinState::High)
    }
    #[inline]
    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(self.level() == PinState::Low)
    }
}

// Outputs are configured with readback, so the set level is the sampled level
impl<D: PortDriver> StatefulOutputPin for GpioPin<'_, D> {
    #[inline]
    fn is_set_high(&self) -> Result<bool, Infallible> {
        Ok(self.level() == PinState::High)
    }
    #[inline]
    fn is_set_low(&self) -> Result<bool, Infallible> {
        Ok(self.level() == PinState::Low)
    }
}

impl<D: PortDriver> ToggleableOutputPin for GpioPin<'_, D> {
    type Error = Infallible;
    #[inline]
    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.gpio.toggle(self.pin);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SysId;
    use crate::gpio::Pull;
    use crate::testutil::FakePort;

    #[test]
    fn output_traits() {
        let mut gpio = Gpio::new(FakePort::default());
        let pin = gpio.init_out(SysId::D10, PinState::High).unwrap();
        let mut pin = gpio.pin(pin);
        assert_eq!(pin.id().raw(), 18);
        assert!(pin.is_set_high().unwrap());
        pin.set_low().unwrap();
        assert!(pin.is_set_low().unwrap());
        assert!(pin.is_low().unwrap());
        pin.toggle().unwrap();
        assert!(pin.is_high().unwrap());
        pin.set_high().unwrap();
        assert!(pin.is_set_high().unwrap());
    }

    #[test]
    fn input_traits() {
        let mut port = FakePort::default();
        let mut gpio = Gpio::new(&mut port);
        let pin = gpio.init_in(SysId::D4, Pull::None).unwrap();
        assert!(gpio.pin(pin).is_low().unwrap());
        drop(gpio);
        port.drive_external(SysId::D4.raw(), true);
        let mut gpio = Gpio::new(&mut port);
        assert!(gpio.pin(pin).is_high().unwrap());
    }
}
