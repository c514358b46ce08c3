use core::fmt::{self, Display};

use displaydoc::Display;

/// A specialized result type for the pixel strip operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when addressing strip pixels.
///
/// Every operation checks its target before touching any pixel, so a returned error
/// always means that the strip state has not been changed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Debug)]
pub enum Error {
    /// Pixel index {index} is out of range for the strip of {len} LEDs.
    IndexOutOfRange { index: usize, len: usize },
    /// Section of {len} pixels at index {index} exceeds the strip of {strip_len} LEDs.
    RangeOutOfBounds {
        index: usize,
        len: usize,
        strip_len: usize,
    },
    /// Expected {expected} section colors, got {actual}.
    LengthMismatch { expected: usize, actual: usize },
    /// The strip must contain at least one LED.
    EmptyStrip,
    /// The initial brightness must be a finite number.
    InvalidBrightness,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// The strip driver failed to write the rendered frame.
///
/// Wraps the driver error as is, the pixel state stays the same as it was before
/// the failed flush.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DriverWriteFailure<E>(pub E);

impl<E> DriverWriteFailure<E> {
    /// Returns the underlying driver error.
    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<E: Display> Display for DriverWriteFailure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to write pixels to the strip: {}", self.0)
    }
}

#[cfg(feature = "std")]
impl<E> std::error::Error for DriverWriteFailure<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}
