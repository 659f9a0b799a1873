//! # GPIO module
//!
//! [`Gpio`] is the single owner of a [`PortDriver`] and the only way to touch
//! the pins. Every operation takes `&mut self`, so pin accesses are
//! serialized by whoever owns the `Gpio`. Sharing pins with an interrupt
//! handler requires putting the `Gpio` behind a critical section.
//!
//! Pins enter through the configure operations, [`Gpio::init_out`] and
//! [`Gpio::init_in`]. These accept untrusted pin numbers and return
//! [`PinError`] without touching the hardware when the pin is not usable.
//! On success they return a [`ValidPin`], which the level operations
//! ([`Gpio::set`], [`Gpio::clear`], [`Gpio::read`], ...) take without checking
//! again.
//!
//! The `*_raw` variants work on plain pin numbers for callers that use the
//! numbers from [`SysId`](crate::board::SysId) directly. They panic on an
//! invalid pin: at that point the pin is expected to be configured already,
//! so an invalid number is a bug in the caller.
//!
//! ```ignore
//! let dp = pac::Peripherals::take().unwrap();
//! let mut gpio = Gpio::new(Port::new(dp.PORT));
//! let led = gpio.init_out(LED_BLINK_PIN, PinState::Low)?;
//! loop {
//!     gpio.toggle(led);
//!     cortex_m::asm::delay(8_000_000);
//! }
//! ```
pub mod dynpins;
pub use dynpins::*;

pub mod pins;
pub use pins::*;

mod reg;
pub use reg::{Direction, PinConfig, Port, PortDriver};

pub use embedded_hal::digital::v2::PinState;

/// The pin access layer
pub struct Gpio<D> {
    drv: D,
}

impl<D: PortDriver> Gpio<D> {
    #[inline]
    pub fn new(drv: D) -> Self {
        Gpio { drv }
    }

    /// Consumes the access layer and returns the driver
    #[inline]
    pub fn free(self) -> D {
        self.drv
    }

    /// Configure a pin as an output and drive it to `level`
    ///
    /// The driven level can be read back with [`Gpio::read`].
    pub fn init_out(
        &mut self,
        pin: impl Into<PinId>,
        level: PinState,
    ) -> Result<ValidPin, PinError> {
        let id = pin.into();
        let pin = ValidPin::try_from(id).map_err(|e| {
            crate::warning!("rejected output pin {}", id);
            e
        })?;
        crate::trace!("pin {} output, high: {}", pin.raw(), level == PinState::High);
        self.drv.apply_config(pin.pin(), PinConfig::output());
        self.write(pin, level);
        Ok(pin)
    }

    /// Configure a pin as an input with the given bias
    pub fn init_in(&mut self, pin: impl Into<PinId>, pull: Pull) -> Result<ValidPin, PinError> {
        let id = pin.into();
        let pin = ValidPin::try_from(id).map_err(|e| {
            crate::warning!("rejected input pin {}", id);
            e
        })?;
        crate::trace!("pin {} input, pull: {}", pin.raw(), pull);
        self.drv.apply_config(pin.pin(), PinConfig::input(pull));
        Ok(pin)
    }

    /// [`Gpio::init_in`] with a raw pull code, 0 for none, 1 for up and 2 for
    /// down
    ///
    /// An unknown pull code returns [`PinError::InvalidPull`] for an otherwise
    /// valid pin.
    pub fn init_in_raw(&mut self, pin: u8, pull: u8) -> Result<ValidPin, PinError> {
        ValidPin::new(pin)?;
        let pull = Pull::try_from(pull).map_err(|e| {
            crate::warning!("rejected pull code {} for pin {}", pull, pin);
            e
        })?;
        self.init_in(pin, pull)
    }

    /// Drive a pin high
    #[inline]
    pub fn set(&mut self, pin: ValidPin) {
        self.drv.set_output_level(pin.pin(), true);
    }

    /// Drive a pin low
    #[inline]
    pub fn clear(&mut self, pin: ValidPin) {
        self.drv.set_output_level(pin.pin(), false);
    }

    #[inline]
    pub fn write(&mut self, pin: ValidPin, level: PinState) {
        match level {
            PinState::High => self.set(pin),
            PinState::Low => self.clear(pin),
        }
    }

    /// Sample the level of a pin
    #[inline]
    pub fn read(&self, pin: ValidPin) -> PinState {
        PinState::from(self.drv.get_input_level(pin.pin()))
    }

    /// Invert the level of an output pin and return the level read back
    ///
    /// This is a read followed by a write. A write to the same pin from an
    /// interrupt in between is lost. Use [`Gpio::toggle_free`] if that can
    /// happen.
    pub fn toggle(&mut self, pin: ValidPin) -> PinState {
        let level = self.read(pin);
        self.write(pin, !level);
        self.read(pin)
    }

    /// [`Gpio::toggle`] inside a critical section
    ///
    /// On a single core SAM D21 the `critical-section-single-core` feature
    /// provides the implementation by masking interrupts.
    pub fn toggle_free(&mut self, pin: ValidPin) -> PinState {
        critical_section::with(|_| self.toggle(pin))
    }

    /// Borrow a pin as an embedded-hal digital pin
    #[inline]
    pub fn pin(&mut self, pin: ValidPin) -> GpioPin<'_, D> {
        GpioPin::new(self, pin)
    }

    /// # Panics
    ///
    /// Panics if `pin` is not a valid pin.
    #[inline]
    pub fn set_raw(&mut self, pin: u8) {
        self.set(ValidPin::assume(pin));
    }

    /// # Panics
    ///
    /// Panics if `pin` is not a valid pin.
    #[inline]
    pub fn clear_raw(&mut self, pin: u8) {
        self.clear(ValidPin::assume(pin));
    }

    /// Drive a pin high for any non-zero `val`, low otherwise
    ///
    /// # Panics
    ///
    /// Panics if `pin` is not a valid pin.
    #[inline]
    pub fn write_raw(&mut self, pin: u8, val: u8) {
        self.write(ValidPin::assume(pin), PinState::from(val != 0));
    }

    /// Returns 1 for high and 0 for low
    ///
    /// # Panics
    ///
    /// Panics if `pin` is not a valid pin.
    #[inline]
    pub fn read_raw(&self, pin: u8) -> u8 {
        self.read(ValidPin::assume(pin)) as u8
    }

    /// Returns the new level, 1 for high and 0 for low
    ///
    /// # Panics
    ///
    /// Panics if `pin` is not a valid pin.
    #[inline]
    pub fn toggle_raw(&mut self, pin: u8) -> u8 {
        self.toggle(ValidPin::assume(pin)) as u8
    }
}
