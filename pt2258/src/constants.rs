/// Highest accepted volume level; maps to no attenuation.
pub const MAX_LEVEL: u8 = 100;

/// Deepest attenuation the chip can apply, in dB.
pub const MAX_ATTENUATION_DB: u8 = 79;

/// Number of independently controlled output channels.
pub const CHANNELS: usize = 6;

/// Time the chip needs after power-on before it accepts commands.
pub const POWER_UP_DELAY_MS: u32 = 200;
