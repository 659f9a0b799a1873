//! # SODAQ Autonomo pin and device identifiers
//!
//! The Autonomo exposes an Arduino style header. Each header position is
//! listed in [`SysId`] together with the raw pin number used by the
//! [GPIO layer](crate::gpio). Raw pin numbers use the `bank * 32 + offset`
//! encoding, so [`SysId::D13`] with value 17 is `PA17`, and [`SysId::A1`] with
//! value 40 is `PB08`.
//!
//! Three identifiers do not name a single pin. They stand for a bus routed
//! over a group of pins and use the values 200 and above. They map to
//! [`PinId::VirtualBus`] and can never be configured as a GPIO.
//!
//! The numeric values are shared with existing firmware images and must not
//! change.
use crate::gpio::{BusKind, PhysicalPin, PinId};

/// Logical pin and device identifiers of the board
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum SysId {
    D0 = 11,
    D1 = 10,
    D2 = 8,
    D3 = 9,
    D4 = 14,
    D5 = 15,
    D6 = 20,
    D7 = 21,
    D8 = 6,
    D9 = 7,
    D10 = 18,
    D11 = 16,
    D12 = 19,
    D13 = 17,

    A0 = 2,
    A1 = 40,
    A2 = 41,
    A3 = 4,
    A4 = 5,
    A5 = 34,

    /// SPI on the ICSP header
    SpiIcsp = 200,
    /// Alternate SPI on SERCOM0, routed over A3, A4, D8 and D9
    SpiAlt = 201,
    /// I2C on the SCL and SDA header pins
    I2c = 202,
}

/// UART receive line of the header
pub const UART_RX: SysId = SysId::D0;
/// UART transmit line of the header
pub const UART_TX: SysId = SysId::D1;
/// The on-board LED
pub const LED_BLINK_PIN: SysId = SysId::D13;
/// SERCOM instance used for the console UART
pub const CONSOLE_UART: u8 = 2;
/// Maximum number of NFFS areas in the filesystem region of the flash
pub const NFFS_AREA_MAX: usize = 8;

impl SysId {
    /// Every identifier, in header order
    pub const ALL: [SysId; 23] = [
        SysId::D0,
        SysId::D1,
        SysId::D2,
        SysId::D3,
        SysId::D4,
        SysId::D5,
        SysId::D6,
        SysId::D7,
        SysId::D8,
        SysId::D9,
        SysId::D10,
        SysId::D11,
        SysId::D12,
        SysId::D13,
        SysId::A0,
        SysId::A1,
        SysId::A2,
        SysId::A3,
        SysId::A4,
        SysId::A5,
        SysId::SpiIcsp,
        SysId::SpiAlt,
        SysId::I2c,
    ];

    /// Raw identifier value
    #[inline]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Look up the identifier carrying a raw value
    pub fn from_raw(raw: u8) -> Option<SysId> {
        Self::ALL.iter().copied().find(|id| id.raw() == raw)
    }

    /// Decompose into a physical pin or a virtual bus
    #[inline]
    pub const fn pin_id(self) -> PinId {
        PinId::from_raw(self.raw())
    }

    /// Physical pin behind this identifier, `None` for the bus identifiers
    pub const fn physical(self) -> Option<PhysicalPin> {
        match self.pin_id() {
            PinId::Physical(pin) => Some(pin),
            PinId::VirtualBus(_) => None,
        }
    }
}

impl From<SysId> for PinId {
    #[inline]
    fn from(id: SysId) -> Self {
        id.pin_id()
    }
}

impl BusKind {
    /// Header pins the bus is routed over, as far as the board documents them
    pub fn pins(self) -> &'static [SysId] {
        match self {
            BusKind::SpiAlt => &[SysId::A3, SysId::A4, SysId::D8, SysId::D9],
            BusKind::SpiIcsp | BusKind::I2c => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpio::ValidPin;

    #[test]
    fn digital_pins_keep_their_numbers() {
        let expected = [11, 10, 8, 9, 14, 15, 20, 21, 6, 7, 18, 16, 19, 17];
        for (id, raw) in SysId::ALL[..14].iter().zip(expected) {
            assert_eq!(id.raw(), raw, "{:?}", id);
        }
    }

    #[test]
    fn analog_pins_keep_their_numbers() {
        let expected = [2, 40, 41, 4, 5, 34];
        for (id, raw) in SysId::ALL[14..20].iter().zip(expected) {
            assert_eq!(id.raw(), raw, "{:?}", id);
        }
    }

    #[test]
    fn every_physical_id_is_a_valid_pin() {
        for id in SysId::ALL.iter().filter(|id| id.physical().is_some()) {
            assert!(ValidPin::new(id.raw()).is_ok(), "{:?}", id);
        }
    }

    #[test]
    fn bus_ids_are_virtual() {
        assert_eq!(SysId::SpiIcsp.pin_id(), PinId::VirtualBus(BusKind::SpiIcsp));
        assert_eq!(SysId::SpiAlt.pin_id(), PinId::VirtualBus(BusKind::SpiAlt));
        assert_eq!(SysId::I2c.pin_id(), PinId::VirtualBus(BusKind::I2c));
        assert!(SysId::I2c.physical().is_none());
    }

    #[test]
    fn led_is_pa17() {
        let pin = LED_BLINK_PIN.physical().unwrap();
        assert_eq!((pin.bank(), pin.offset()), (0, 17));
        let a1 = SysId::A1.physical().unwrap();
        assert_eq!((a1.bank(), a1.offset()), (1, 8));
    }

    #[test]
    fn raw_lookup() {
        assert_eq!(SysId::from_raw(17), Some(SysId::D13));
        assert_eq!(SysId::from_raw(201), Some(SysId::SpiAlt));
        assert_eq!(SysId::from_raw(0), None);
        for id in SysId::ALL {
            assert_eq!(SysId::from_raw(id.raw()), Some(id));
        }
    }

    #[test]
    fn alternate_spi_group() {
        assert_eq!(
            BusKind::SpiAlt.pins(),
            &[SysId::A3, SysId::A4, SysId::D8, SysId::D9]
        );
        assert!(BusKind::I2c.pins().is_empty());
    }
}
