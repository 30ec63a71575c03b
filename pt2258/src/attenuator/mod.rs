//! PT2258 attenuator driver module.
//!
//! Provides a driver for the Princeton PT2258 six-channel electronic volume
//! controller: 0 to −79 dB in 1 dB steps per channel plus a master stage and
//! a global mute.
//!
//! # Addressing
//!
//! Up to four chips share one bus, selected by the CODE1/CODE2 pins:
//!
//! | CODE2 | CODE1 | Write address | 7-bit |
//! |-------|-------|---------------|-------|
//! | 0 | 0 | `0x80` | `0x40` |
//! | 0 | 1 | `0x84` | `0x42` |
//! | 1 | 0 | `0x88` | `0x44` |
//! | 1 | 1 | `0x8C` | `0x46` |

pub mod registers;
mod pt2258;

pub use self::pt2258::{level_to_attenuation, split_attenuation, Address, Pt2258};

#[cfg(feature = "gain")]
pub use self::pt2258::gain_to_attenuation;

#[cfg(test)]
mod mock;
