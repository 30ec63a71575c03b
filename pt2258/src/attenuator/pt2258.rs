//! PT2258 six-channel electronic volume controller driver.
//!
//! The driver is generic over any [`embedded_hal::i2c::I2c`] implementation
//! and only ever writes; the chip has no readable state. Volume levels are
//! given on a 0–100 scale (100 = loudest) and translated into the chip's
//! 10 dB / 1 dB register pairs.
//!
//! # Example
//!
//! ```ignore
//! let mut pt = Pt2258::new(i2c, 0x88)?;
//! pt.init(&mut delay)?;          // 200 ms settle, then clear register
//! pt.set_master_volume(75)?;
//! pt.set_channel_volume(0, 100)?;
//! pt.set_mute(false)?;
//! ```
//!
//! Several chips on one bus each get their own driver over a shared bus
//! handle such as `embedded_hal_bus::i2c::RefCellDevice`.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use super::registers as reg;
use crate::constants::{MAX_ATTENUATION_DB, MAX_LEVEL, POWER_UP_DELAY_MS};
use crate::control::VolumeControl;
use crate::error::Error;

// ── Address selection ──────────────────────────────────────────────────────

/// Device address as selected by the CODE2/CODE1 strap pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Address {
    /// CODE2 = 0, CODE1 = 0 (0x80).
    Code00,
    /// CODE2 = 0, CODE1 = 1 (0x84).
    Code01,
    /// CODE2 = 1, CODE1 = 0 (0x88).
    Code10,
    /// CODE2 = 1, CODE1 = 1 (0x8C).
    Code11,
}

impl Address {
    /// 8-bit write address as printed in the datasheet.
    pub const fn raw(self) -> u8 {
        match self {
            Self::Code00 => reg::I2C_ADDR_CODE_00,
            Self::Code01 => reg::I2C_ADDR_CODE_01,
            Self::Code10 => reg::I2C_ADDR_CODE_10,
            Self::Code11 => reg::I2C_ADDR_CODE_11,
        }
    }

    /// 7-bit address used on the bus.
    pub const fn bus_address(self) -> u8 {
        self.raw() >> 1
    }
}

impl TryFrom<u8> for Address {
    /// The rejected byte.
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            reg::I2C_ADDR_CODE_00 => Ok(Self::Code00),
            reg::I2C_ADDR_CODE_01 => Ok(Self::Code01),
            reg::I2C_ADDR_CODE_10 => Ok(Self::Code10),
            reg::I2C_ADDR_CODE_11 => Ok(Self::Code11),
            other => Err(other),
        }
    }
}

impl From<Address> for u8 {
    fn from(address: Address) -> Self {
        address.raw()
    }
}

// ── Scale mapping ──────────────────────────────────────────────────────────

/// Map a volume level (0–100) onto attenuation in dB (79–0).
///
/// The scale is inverted and linear, rounding down: level 50 gives 39 dB.
/// Returns `None` for levels above [`MAX_LEVEL`].
pub fn level_to_attenuation(level: u8) -> Option<u8> {
    if level > MAX_LEVEL {
        return None;
    }
    let steps = (MAX_LEVEL - level) as u16 * MAX_ATTENUATION_DB as u16;
    Some((steps / MAX_LEVEL as u16) as u8)
}

/// Split an attenuation in dB into `(10 dB steps, 1 dB steps)`.
pub const fn split_attenuation(db: u8) -> (u8, u8) {
    (db / 10, db % 10)
}

/// Convert a linear amplitude gain (1.0 = unity) into attenuation in dB.
///
/// Rounds to the nearest dB and saturates: gains at or above 1.0 give 0 dB,
/// zero, negative and NaN gains give [`MAX_ATTENUATION_DB`].
#[cfg(feature = "gain")]
pub fn gain_to_attenuation(gain: f32) -> u8 {
    if gain.is_nan() || gain <= 0.0 {
        return MAX_ATTENUATION_DB;
    }
    let db = libm::roundf(-20.0 * libm::log10f(gain));
    db.clamp(0.0, MAX_ATTENUATION_DB as f32) as u8
}

// ── Driver struct ──────────────────────────────────────────────────────────

/// PT2258 driver.
///
/// Holds no shadow of the chip state: every setter derives its command bytes
/// from its arguments alone.
pub struct Pt2258<I2C> {
    i2c: I2C,
    address: Address,
}

impl<I2C: I2c> Pt2258<I2C> {
    /// Create a driver for the chip at the given 8-bit write address.
    ///
    /// `address` must be one of [`reg::VALID_ADDRESSES`]. Nothing is sent on
    /// the bus.
    pub fn new(i2c: I2C, address: u8) -> Result<Self, Error<I2C::Error>> {
        let address = Address::try_from(address).map_err(Error::Address)?;
        Ok(Self::with_address(i2c, address))
    }

    /// Create a driver from an already typed address.
    pub fn with_address(i2c: I2C, address: Address) -> Self {
        Self { i2c, address }
    }

    /// Strap-pin address this driver talks to.
    pub fn address(&self) -> Address {
        self.address
    }

    // ── Low-level I2C helpers ──────────────────────────────────────────

    /// Send one command byte.
    fn write_command(&mut self, command: u8) -> Result<(), Error<I2C::Error>> {
        log::trace!(
            "PT2258 {:#04x} <- {:#04x}",
            self.address.raw(),
            command
        );
        self.i2c
            .write(self.address.bus_address(), &[command])
            .map_err(Error::Bus)
    }

    /// Write an attenuation to a `(10 dB, 1 dB)` register pair.
    ///
    /// The 10 dB byte goes first. The two writes are separate transactions,
    /// so an intermediate level may be audible briefly.
    fn write_attenuation(
        &mut self,
        (coarse, fine): (u8, u8),
        db: u8,
    ) -> Result<(), Error<I2C::Error>> {
        let (tens, ones) = split_attenuation(db);
        self.write_command(coarse | tens)?;
        self.write_command(fine | ones)
    }

    fn channel_registers(channel: u8) -> Result<(u8, u8), Error<I2C::Error>> {
        reg::CHANNEL_REGISTERS
            .get(channel as usize)
            .copied()
            .ok_or(Error::Channel(channel))
    }

    // ── Power-on ───────────────────────────────────────────────────────

    /// Wait for the chip to settle after power-on and clear its registers.
    ///
    /// Call once after the supply comes up, before any other command.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I2C::Error>> {
        delay.delay_ms(POWER_UP_DELAY_MS);
        self.write_command(reg::CLEAR)?;
        log::debug!("PT2258 {:#04x} cleared", self.address.raw());
        Ok(())
    }

    // ── Volume ─────────────────────────────────────────────────────────

    /// Set the master volume (0 = fully attenuated, 100 = 0 dB).
    pub fn set_master_volume(&mut self, level: u8) -> Result<(), Error<I2C::Error>> {
        let db = level_to_attenuation(level).ok_or(Error::Level(level))?;
        self.write_attenuation((reg::MASTER_10DB, reg::MASTER_1DB), db)
    }

    /// Set the volume of one channel (0–5) on the 0–100 scale.
    pub fn set_channel_volume(
        &mut self,
        channel: u8,
        level: u8,
    ) -> Result<(), Error<I2C::Error>> {
        let registers = Self::channel_registers(channel)?;
        let db = level_to_attenuation(level).ok_or(Error::Level(level))?;
        self.write_attenuation(registers, db)
    }

    /// Set the master attenuation directly in dB (0–79).
    pub fn set_master_attenuation(&mut self, db: u8) -> Result<(), Error<I2C::Error>> {
        if db > MAX_ATTENUATION_DB {
            return Err(Error::Attenuation(db));
        }
        self.write_attenuation((reg::MASTER_10DB, reg::MASTER_1DB), db)
    }

    /// Set the attenuation of one channel (0–5) directly in dB (0–79).
    pub fn set_channel_attenuation(
        &mut self,
        channel: u8,
        db: u8,
    ) -> Result<(), Error<I2C::Error>> {
        let registers = Self::channel_registers(channel)?;
        if db > MAX_ATTENUATION_DB {
            return Err(Error::Attenuation(db));
        }
        self.write_attenuation(registers, db)
    }

    /// Set the master volume from a linear gain (1.0 = 0 dB).
    #[cfg(feature = "gain")]
    pub fn set_master_gain(&mut self, gain: f32) -> Result<(), Error<I2C::Error>> {
        self.set_master_attenuation(gain_to_attenuation(gain))
    }

    /// Set one channel's volume from a linear gain (1.0 = 0 dB).
    #[cfg(feature = "gain")]
    pub fn set_channel_gain(
        &mut self,
        channel: u8,
        gain: f32,
    ) -> Result<(), Error<I2C::Error>> {
        self.set_channel_attenuation(channel, gain_to_attenuation(gain))
    }

    // ── Mute ───────────────────────────────────────────────────────────

    /// Mute or unmute all outputs. Stored attenuation is left untouched.
    pub fn set_mute(&mut self, enabled: bool) -> Result<(), Error<I2C::Error>> {
        self.write_command(if enabled { reg::MUTE_ON } else { reg::MUTE_OFF })
    }

    // ── Release ────────────────────────────────────────────────────────

    /// Consume the driver and return the I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

// ── VolumeControl trait implementation ─────────────────────────────────────

impl<I2C: I2c> VolumeControl for Pt2258<I2C> {
    type Error = Error<I2C::Error>;

    fn set_volume(&mut self, level: u8) -> Result<(), Self::Error> {
        self.set_master_volume(level)
    }

    fn set_muted(&mut self, muted: bool) -> Result<(), Self::Error> {
        self.set_mute(muted)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
