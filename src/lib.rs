#![cfg_attr(not(test), no_std)]

pub use atsamd21g;
pub use atsamd21g as pac;

pub mod board;
pub mod gpio;
pub mod imgr;
pub mod prelude;

#[cfg(test)]
mod testutil;

/// Trace-level log through `defmt` when the feature is enabled, nothing otherwise
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        {
            defmt::trace!($($arg)*);
        }
    };
}

/// Warn-level log through `defmt` when the feature is enabled, nothing otherwise
macro_rules! warning {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        {
            defmt::warn!($($arg)*);
        }
    };
}

pub(crate) use trace;
pub(crate) use warning;
