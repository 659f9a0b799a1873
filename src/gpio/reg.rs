use super::pins::{PhysicalPin, Pull};
use crate::pac::{port::RegisterBlock, PORT};

//==================================================================================================
//  PinConfig
//==================================================================================================

/// Pin direction
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Input,
    /// Output with the input buffer left on so the driven level can be read
    /// back
    OutputWithReadback,
}

/// Collect all fields needed to configure a pin
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PinConfig {
    pub direction: Direction,
    pub pull: Pull,
    /// Disconnect the pin to save power. Overrides the other fields.
    pub powersave: bool,
}

impl PinConfig {
    #[inline]
    pub const fn output() -> Self {
        PinConfig {
            direction: Direction::OutputWithReadback,
            pull: Pull::None,
            powersave: false,
        }
    }

    #[inline]
    pub const fn input(pull: Pull) -> Self {
        PinConfig {
            direction: Direction::Input,
            pull,
            powersave: false,
        }
    }
}

//==================================================================================================
//  PortDriver
//==================================================================================================

/// Pin configuration primitives the GPIO layer is built on
///
/// Implementations must only touch the pin they are given. The GPIO layer
/// validates every pin before it reaches the driver.
pub trait PortDriver {
    /// Apply direction, pull and power mode to a pin
    fn apply_config(&mut self, pin: PhysicalPin, config: PinConfig);

    /// Drive the output level of a pin
    fn set_output_level(&mut self, pin: PhysicalPin, high: bool);

    /// Sample the input level of a pin
    fn get_input_level(&self, pin: PhysicalPin) -> bool;
}

impl<D: PortDriver + ?Sized> PortDriver for &mut D {
    #[inline]
    fn apply_config(&mut self, pin: PhysicalPin, config: PinConfig) {
        (**self).apply_config(pin, config)
    }

    #[inline]
    fn set_output_level(&mut self, pin: PhysicalPin, high: bool) {
        (**self).set_output_level(pin, high)
    }

    #[inline]
    fn get_input_level(&self, pin: PhysicalPin) -> bool {
        (**self).get_input_level(pin)
    }
}

//==================================================================================================
//  Register Interface
//==================================================================================================

/// Write `$mask` to the bank 0 or bank 1 variant of a "mask" register
macro_rules! write_mask {
    ($regs:expr, $bank:expr, $reg0:ident, $reg1:ident, $mask:expr) => {
        // Safety: only the bit for this pin is set, every other pin is left
        // untouched by a SET/CLR register
        match $bank {
            0 => $regs.$reg0.write(|w| unsafe { w.bits($mask) }),
            _ => $regs.$reg1.write(|w| unsafe { w.bits($mask) }),
        }
    };
}

/// Modify the PINCFG register of a pin
macro_rules! modify_pincfg {
    ($regs:expr, $pin:expr, |$w:ident| $body:expr) => {
        match $pin.bank() {
            0 => $regs.pincfg0_[$pin.offset() as usize].modify(|_, $w| $body),
            _ => $regs.pincfg1_0[$pin.offset() as usize].modify(|_, $w| $body),
        }
    };
}

/// [`PortDriver`] over the SAM D21 PORT peripheral
///
/// Takes ownership of [`PORT`], so there is at most one of these and it has
/// exclusive access to the pin registers. Only the set/clear registers and
/// the PINCFG register of a pin are written, so driving one pin never
/// disturbs another.
pub struct Port {
    port: PORT,
}

impl Port {
    /// Take control of the PORT peripheral
    #[inline]
    pub fn new(port: PORT) -> Self {
        Port { port }
    }

    /// Consumes the driver and returns the PORT peripheral
    #[inline]
    pub fn release(self) -> PORT {
        self.port
    }

    #[inline]
    fn regs(&self) -> &RegisterBlock {
        &self.port
    }
}

impl PortDriver for Port {
    fn apply_config(&mut self, pin: PhysicalPin, config: PinConfig) {
        let regs = self.regs();
        let (bank, mask) = (pin.bank(), pin.mask());

        if config.powersave {
            // Input buffer and pull off, not driven
            write_mask!(regs, bank, dirclr0, dirclr1, mask);
            modify_pincfg!(regs, pin, |w| w.inen().clear_bit().pullen().clear_bit());
            return;
        }

        match config.direction {
            Direction::OutputWithReadback => {
                modify_pincfg!(regs, pin, |w| w.inen().set_bit().pullen().clear_bit());
                write_mask!(regs, bank, dirset0, dirset1, mask);
            }
            Direction::Input => {
                write_mask!(regs, bank, dirclr0, dirclr1, mask);
                // With the pull enabled, OUT selects between pull-up and
                // pull-down
                match config.pull {
                    Pull::None => (),
                    Pull::Up => write_mask!(regs, bank, outset0, outset1, mask),
                    Pull::Down => write_mask!(regs, bank, outclr0, outclr1, mask),
                }
                let pull_en = config.pull != Pull::None;
                modify_pincfg!(regs, pin, |w| w.inen().set_bit().pullen().bit(pull_en));
            }
        }
    }

    #[inline]
    fn set_output_level(&mut self, pin: PhysicalPin, high: bool) {
        let regs = self.regs();
        if high {
            write_mask!(regs, pin.bank(), outset0, outset1, pin.mask());
        } else {
            write_mask!(regs, pin.bank(), outclr0, outclr1, pin.mask());
        }
    }

    #[inline]
    fn get_input_level(&self, pin: PhysicalPin) -> bool {
        let regs = self.regs();
        let bits = match pin.bank() {
            0 => regs.in0.read().bits(),
            _ => regs.in1.read().bits(),
        };
        (bits >> pin.offset()) & 0x01 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send<T: Send>() {}

    #[test]
    fn port_can_move_into_a_shared_resource() {
        assert_send::<Port>();
        assert_send::<super::super::Gpio<Port>>();
    }

    #[test]
    fn output_config() {
        let config = PinConfig::output();
        assert_eq!(config.direction, Direction::OutputWithReadback);
        assert_eq!(config.pull, Pull::None);
        assert!(!config.powersave);
    }

    #[test]
    fn input_config_keeps_pull() {
        for pull in [Pull::None, Pull::Up, Pull::Down] {
            let config = PinConfig::input(pull);
            assert_eq!(config.direction, Direction::Input);
            assert_eq!(config.pull, pull);
            assert!(!config.powersave);
        }
    }
}
