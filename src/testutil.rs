//! Fake [`PortDriver`] for host tests
use crate::gpio::{Direction, PhysicalPin, PinConfig, PortDriver, Pull};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Call {
    Config(PhysicalPin, PinConfig),
    Level(PhysicalPin, bool),
}

/// Records every driver call and models the level of each pin
///
/// Outputs read back their driven level. Inputs read the level applied with
/// [`FakePort::drive_external`], or their pull if nothing drives them.
#[derive(Default)]
pub struct FakePort {
    pub calls: Vec<Call>,
    config: [[Option<PinConfig>; 32]; 2],
    out: [u32; 2],
    driven: [u32; 2],
    external: [u32; 2],
}

impl FakePort {
    /// Drive an input from outside the chip
    pub fn drive_external(&mut self, raw: u8, high: bool) {
        let pin = PhysicalPin::from_raw(raw);
        let bank = pin.bank() as usize;
        self.driven[bank] |= pin.mask();
        if high {
            self.external[bank] |= pin.mask();
        } else {
            self.external[bank] &= !pin.mask();
        }
    }
}

impl PortDriver for FakePort {
    fn apply_config(&mut self, pin: PhysicalPin, config: PinConfig) {
        self.calls.push(Call::Config(pin, config));
        self.config[pin.bank() as usize][pin.offset() as usize] = Some(config);
    }

    fn set_output_level(&mut self, pin: PhysicalPin, high: bool) {
        self.calls.push(Call::Level(pin, high));
        let out = &mut self.out[pin.bank() as usize];
        if high {
            *out |= pin.mask();
        } else {
            *out &= !pin.mask();
        }
    }

    fn get_input_level(&self, pin: PhysicalPin) -> bool {
        let bank = pin.bank() as usize;
        let config = self.config[bank][pin.offset() as usize];
        match config.map(|c| c.direction) {
            Some(Direction::OutputWithReadback) | None => self.out[bank] & pin.mask() != 0,
            Some(Direction::Input) if self.driven[bank] & pin.mask() != 0 => {
                self.external[bank] & pin.mask() != 0
            }
            Some(Direction::Input) => config.map(|c| c.pull) == Some(Pull::Up),
        }
    }
}
