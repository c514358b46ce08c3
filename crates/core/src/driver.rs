//! LED strip driver abstraction.
//!
//! The pixel store never talks to the hardware directly, it hands the rendered frame
//! over to a [`StripDriver`] implementation.

use smart_leds::SmartLedsWrite;

use crate::color::Color;

/// Hardware backend that physically renders the strip colors.
pub trait StripDriver {
    /// Driver specific write error.
    type Error;

    /// Writes the colors to the strip, the first color goes to the first LED.
    ///
    /// The call blocks until the whole frame has been transmitted.
    fn write(&mut self, colors: &[Color]) -> Result<(), Self::Error>;
}

impl<D: StripDriver + ?Sized> StripDriver for &mut D {
    type Error = D::Error;

    fn write(&mut self, colors: &[Color]) -> Result<(), Self::Error> {
        (**self).write(colors)
    }
}

/// Adapter for the [`smart_leds`] ecosystem drivers such as `ws2812-spi` or
/// `ws2812-timer-delay`.
#[derive(Debug)]
pub struct SmartLeds<W>(pub W);

impl<W> SmartLeds<W> {
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W> StripDriver for SmartLeds<W>
where
    W: SmartLedsWrite,
    W::Color: From<Color>,
{
    type Error = W::Error;

    fn write(&mut self, colors: &[Color]) -> Result<(), Self::Error> {
        self.0.write(colors.iter().copied())
    }
}
