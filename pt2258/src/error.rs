//! Driver error type.

use crate::constants::{CHANNELS, MAX_ATTENUATION_DB, MAX_LEVEL};

/// Errors returned by the PT2258 driver.
///
/// `E` is the error type of the underlying I2C bus. Range errors are detected
/// before any byte is put on the bus; a [`Error::Bus`] may surface after part
/// of a multi-byte sequence has already been accepted by the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error<E> {
    /// The address is not one of the strap-pin selectable addresses.
    #[error("invalid device address {0:#04x}")]
    Address(u8),
    /// Volume level above [`MAX_LEVEL`].
    #[error("volume level {0} out of range 0..={max}", max = MAX_LEVEL)]
    Level(u8),
    /// Channel index outside `0..CHANNELS`.
    #[error("channel {0} out of range 0..{max}", max = CHANNELS)]
    Channel(u8),
    /// Attenuation above [`MAX_ATTENUATION_DB`].
    #[error("attenuation {0} dB out of range 0..={max}", max = MAX_ATTENUATION_DB)]
    Attenuation(u8),
    /// The bus rejected a write, usually a missing acknowledge.
    #[error("I2C bus error")]
    Bus(E),
}

impl<E> Error<E> {
    /// `true` for errors raised by input validation rather than the bus.
    pub fn is_range(&self) -> bool {
        matches!(
            self,
            Self::Level(_) | Self::Channel(_) | Self::Attenuation(_)
        )
    }
}
