//! # Pin identifiers and validity
//!
//! A raw pin number is either a physical pin, encoded as `bank * 32 + offset`,
//! or one of the virtual bus identifiers starting at [`VIRTUAL_BASE`].
//! [`PinId`] keeps the two apart, so a bus identifier can never be decomposed
//! into a bank and offset by accident.
//!
//! A [`PhysicalPin`] is not necessarily usable. Only the pins marked in
//! [`VALID_PINS`] are bonded out on the ATSAMD21J18 and routed on the board.
//! [`ValidPin`] is the proof that a pin passed that check.

//==================================================================================================
//  Errors and Definitions
//==================================================================================================

/// Highest bank index with usable pins
pub const MAX_BANK: u8 = 1;

/// Usable pins per bank, one bit per offset
///
/// Port A has everything except PA26 and PA29. Port B only has PB02, PB03,
/// PB08 to PB11, PB30 and PB31.
pub const VALID_PINS: [u32; MAX_BANK as usize + 1] = [0xdbff_ffff, 0xc000_0f0c];

/// First raw value of the virtual bus identifiers
pub const VIRTUAL_BASE: u8 = 200;

/// GPIO error type
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PinError {
    /// The pin is out of range, not bonded out on this board or a bus
    /// identifier
    InvalidPin,
    /// The raw pull value does not name a [`Pull`] mode
    InvalidPull,
}

/// Input bias
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Pull {
    None = 0,
    Up = 1,
    Down = 2,
}

impl TryFrom<u8> for Pull {
    type Error = PinError;

    #[inline]
    fn try_from(raw: u8) -> Result<Self, PinError> {
        match raw {
            0 => Ok(Pull::None),
            1 => Ok(Pull::Up),
            2 => Ok(Pull::Down),
            _ => Err(PinError::InvalidPull),
        }
    }
}

//==================================================================================================
//  Pin IDs
//==================================================================================================

/// Bus roles that are addressed by a virtual identifier
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BusKind {
    SpiIcsp,
    SpiAlt,
    I2c,
}

/// A pin position, split into bank and offset
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PhysicalPin {
    bank: u8,
    offset: u8,
}

impl PhysicalPin {
    /// Decompose a raw pin number
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        PhysicalPin {
            bank: raw / 32,
            offset: raw % 32,
        }
    }

    #[inline]
    pub const fn bank(&self) -> u8 {
        self.bank
    }

    #[inline]
    pub const fn offset(&self) -> u8 {
        self.offset
    }

    #[inline]
    pub const fn raw(&self) -> u8 {
        self.bank * 32 + self.offset
    }

    /// Single bit mask of this pin within its bank
    #[inline]
    pub const fn mask(&self) -> u32 {
        1 << self.offset
    }

    /// Whether the pin exists and is usable on this board
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.bank <= MAX_BANK && (self.mask() & VALID_PINS[self.bank as usize]) != 0
    }
}

/// Value-level pin identifier
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PinId {
    Physical(PhysicalPin),
    VirtualBus(BusKind),
}

impl PinId {
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            200 => PinId::VirtualBus(BusKind::SpiIcsp),
            201 => PinId::VirtualBus(BusKind::SpiAlt),
            202 => PinId::VirtualBus(BusKind::I2c),
            _ => PinId::Physical(PhysicalPin::from_raw(raw)),
        }
    }
}

impl From<u8> for PinId {
    #[inline]
    fn from(raw: u8) -> Self {
        PinId::from_raw(raw)
    }
}

//==================================================================================================
//  ValidPin
//==================================================================================================

/// A physical pin that passed the validity check
///
/// The configure operations of [`Gpio`](super::Gpio) hand these out. The
/// level operations take them without checking again.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ValidPin(PhysicalPin);

impl ValidPin {
    /// Check a raw pin number
    #[inline]
    pub fn new(raw: u8) -> Result<Self, PinError> {
        Self::try_from(PinId::from_raw(raw))
    }

    /// Use a raw pin number that the caller already knows to be valid
    ///
    /// # Panics
    ///
    /// Panics if the pin is not valid. Passing an unchecked pin to the level
    /// operations is a bug in the caller, not a runtime condition.
    #[inline]
    pub fn assume(raw: u8) -> Self {
        let pin = PhysicalPin::from_raw(raw);
        assert!(pin.bank() <= MAX_BANK, "pin {} is out of range", raw);
        assert!(pin.is_valid(), "pin {} is not usable on this board", raw);
        ValidPin(pin)
    }

    #[inline]
    pub const fn pin(&self) -> PhysicalPin {
        self.0
    }

    #[inline]
    pub const fn raw(&self) -> u8 {
        self.0.raw()
    }
}

impl TryFrom<PinId> for ValidPin {
    type Error = PinError;

    #[inline]
    fn try_from(id: PinId) -> Result<Self, PinError> {
        match id {
            PinId::Physical(pin) if pin.is_valid() => Ok(ValidPin(pin)),
            _ => Err(PinError::InvalidPin),
        }
    }
}

impl TryFrom<crate::board::SysId> for ValidPin {
    type Error = PinError;

    #[inline]
    fn try_from(id: crate::board::SysId) -> Result<Self, PinError> {
        Self::try_from(id.pin_id())
    }
}

impl From<ValidPin> for PhysicalPin {
    #[inline]
    fn from(pin: ValidPin) -> Self {
        pin.0
    }
}
