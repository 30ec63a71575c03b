//! PT2258 command bytes and I2C addresses.
//!
//! Every command is a single byte. The upper nibble selects the register and
//! the lower nibble carries the step count (0–9) or a fixed control code.
//! The chip has no readable registers.

// ── I2C addresses ──────────────────────────────────────────────────────────

/// 8-bit write address with CODE2 = 0, CODE1 = 0.
pub const I2C_ADDR_CODE_00: u8 = 0x80;

/// 8-bit write address with CODE2 = 0, CODE1 = 1.
pub const I2C_ADDR_CODE_01: u8 = 0x84;

/// 8-bit write address with CODE2 = 1, CODE1 = 0.
pub const I2C_ADDR_CODE_10: u8 = 0x88;

/// 8-bit write address with CODE2 = 1, CODE1 = 1.
pub const I2C_ADDR_CODE_11: u8 = 0x8C;

/// Every address selectable with the CODE1/CODE2 strap pins.
pub const VALID_ADDRESSES: [u8; 4] = [
    I2C_ADDR_CODE_00,
    I2C_ADDR_CODE_01,
    I2C_ADDR_CODE_10,
    I2C_ADDR_CODE_11,
];

// ── Control ────────────────────────────────────────────────────────────────

/// Clear register. Must be sent once after power-up.
pub const CLEAR: u8 = 0xC0;

/// Mute all six outputs.
pub const MUTE_ON: u8 = 0xF9;

/// Release mute; the last written attenuation applies again.
pub const MUTE_OFF: u8 = 0xF8;

// ── Master volume ──────────────────────────────────────────────────────────

/// Master attenuation, 10 dB steps (0–7).
pub const MASTER_10DB: u8 = 0xD0;

/// Master attenuation, 1 dB steps (0–9).
pub const MASTER_1DB: u8 = 0xE0;

// ── Channel volume ─────────────────────────────────────────────────────────

/// `(10 dB, 1 dB)` register pair per channel, indexed 0–5 for outputs 1–6.
///
/// The order is the chip's, not sequential in register value.
pub const CHANNEL_REGISTERS: [(u8, u8); 6] = [
    (0x80, 0x90),
    (0x40, 0x50),
    (0x00, 0x10),
    (0x20, 0x30),
    (0x60, 0x70),
    (0xA0, 0xB0),
];

/// Mask selecting the register nibble of a command byte.
pub const REGISTER_MASK: u8 = 0xF0;

/// Mask selecting the value nibble of a command byte.
pub const VALUE_MASK: u8 = 0x0F;
