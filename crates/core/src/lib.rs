//! Pixel buffer for addressable RGB LED strips
//!
//! This crate keeps the color and brightness of every strip LED in memory, provides
//! pixel, section and whole strip fills, including the randomized ones, and hands
//! the brightness corrected frame over to a hardware driver on request.
//!
//! ```
//! use pixelstrip_core::{test_utils::RecordingDriver, Color, Config, Section, Strip};
//!
//! let mut strip = Strip::new(Config::new(8).with_brightness(0.5), RecordingDriver::default())?;
//! strip.set_all(Color::new(200, 100, 50));
//! strip.set_section_off(Section::new(2).at(6))?;
//! strip.update()?;
//!
//! let frame = strip.driver().last_frame().unwrap();
//! assert_eq!(frame[0], Color::new(100, 50, 25));
//! assert_eq!(frame[7], Color::new(0, 0, 0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
// Linter configuration
#![warn(unsafe_code, clippy::pedantic, clippy::use_self)]
// Too many false positives.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]

extern crate alloc;

pub use crate::{
    color::{Brightness, Color, IntoColor, Pixel, DEFAULT_BRIGHTNESS},
    driver::{SmartLeds, StripDriver},
    errors::{DriverWriteFailure, Error, Result},
    random::{RandomSource, UniformRandom},
    region::{Region, Section},
    strip::{Config, Sampling, Strip},
};

pub mod color;
pub mod driver;
pub mod errors;
pub mod random;
pub mod region;
pub mod strip;

#[cfg(feature = "std")]
pub mod test_utils;
