//! # pt2258
//!
//! A `no_std` driver for the Princeton Technology PT2258 six-channel
//! electronic volume controller, written against the
//! [`embedded-hal`](https://docs.rs/embedded-hal) 1.0 I2C traits.
//!
//! The chip attenuates each of six channels and a master stage from 0 dB down
//! to −79 dB in 1 dB steps, split over a 10 dB and a 1 dB register per
//! control point. It is write-only; the driver keeps no shadow state.
//!
//! ## Architecture
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`attenuator`] | [`Pt2258`] driver, command bytes, address table |
//! | [`control`] | [`VolumeControl`](control::VolumeControl) trait |
//! | [`error`] | [`Error`] returned by every fallible call |
//! | [`constants`] | Volume scale and timing constants |
//!
//! ## Quick start
//!
//! ```ignore
//! use pt2258::Pt2258;
//!
//! let mut pt = Pt2258::new(i2c, 0x80)?;
//! pt.init(&mut delay)?;
//! pt.set_master_volume(80)?;      // −15 dB
//! for ch in 0..6 {
//!     pt.set_channel_volume(ch, 100)?;
//! }
//! pt.set_mute(false)?;
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `gain` | yes | Linear-gain setters and [`gain_to_attenuation`] (requires `libm`) |
//!
//! ## Volume scale
//!
//! - **Level:** `0..=100`, 100 = 0 dB ([`constants::MAX_LEVEL`])
//! - **Attenuation:** `0..=79` dB ([`constants::MAX_ATTENUATION_DB`])
//! - **Mapping:** `floor((100 − level) × 79 / 100)`

#![no_std]

pub mod constants;
pub mod control;
pub mod error;
pub mod attenuator;

pub use attenuator::{level_to_attenuation, split_attenuation, Address, Pt2258};
pub use error::Error;

#[cfg(feature = "gain")]
pub use attenuator::gain_to_attenuation;
