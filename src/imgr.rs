//! Firmware image slot query
//!
//! The image manager needs to know which slot the running image was booted
//! from. The answer comes from the bootloader, so this crate only declares
//! the interface.

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SlotId {
    A,
    B,
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SlotError {
    /// The raw slot index is neither 0 nor 1
    InvalidSlot,
}

impl SlotId {
    /// Slot index as used by the image manager
    #[inline]
    pub const fn index(self) -> u8 {
        match self {
            SlotId::A => 0,
            SlotId::B => 1,
        }
    }

    /// The slot that is not `self`
    #[inline]
    pub const fn other(self) -> SlotId {
        match self {
            SlotId::A => SlotId::B,
            SlotId::B => SlotId::A,
        }
    }
}

impl TryFrom<u8> for SlotId {
    type Error = SlotError;

    fn try_from(index: u8) -> Result<Self, SlotError> {
        match index {
            0 => Ok(SlotId::A),
            1 => Ok(SlotId::B),
            _ => Err(SlotError::InvalidSlot),
        }
    }
}

/// Requirements placed upon whatever knows the active image slot
pub trait CurrentSlot {
    /// Slot of the running image
    fn current_slot(&self) -> SlotId;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Booted(u8);

    impl CurrentSlot for Booted {
        fn current_slot(&self) -> SlotId {
            SlotId::try_from(self.0).unwrap_or(SlotId::A)
        }
    }

    #[test]
    fn index_round_trip() {
        assert_eq!(SlotId::try_from(SlotId::A.index()), Ok(SlotId::A));
        assert_eq!(SlotId::try_from(SlotId::B.index()), Ok(SlotId::B));
        assert_eq!(SlotId::try_from(2), Err(SlotError::InvalidSlot));
    }

    #[test]
    fn query_through_trait() {
        let booted: &dyn CurrentSlot = &Booted(1);
        assert_eq!(booted.current_slot(), SlotId::B);
        assert_eq!(booted.current_slot().other(), SlotId::A);
        assert_eq!(Booted(9).current_slot(), SlotId::A);
    }
}
