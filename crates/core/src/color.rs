//! Pixel colors and brightness correction.

pub use smart_leds::RGB8;

/// Strip color, 8 bits per channel.
pub type Color = RGB8;

/// Brightness applied to a pixel on the rendering, `0.0` means turned off.
pub type Brightness = f32;

/// Brightness that the strip pixels have by default.
pub const DEFAULT_BRIGHTNESS: Brightness = 0.1;

/// Conversion into a strip color.
///
/// Channel values that do not fit into a byte wrap around modulo 256, so `300`
/// becomes `44`. They are never clamped.
pub trait IntoColor {
    fn into_color(self) -> Color;
}

impl IntoColor for Color {
    fn into_color(self) -> Color {
        self
    }
}

impl IntoColor for (u8, u8, u8) {
    fn into_color(self) -> Color {
        Color::new(self.0, self.1, self.2)
    }
}

impl IntoColor for (u32, u32, u32) {
    fn into_color(self) -> Color {
        Color::new(wrap_channel(self.0), wrap_channel(self.1), wrap_channel(self.2))
    }
}

impl IntoColor for [u32; 3] {
    fn into_color(self) -> Color {
        let [r, g, b] = self;
        (r, g, b).into_color()
    }
}

/// Packed `0xRRGGBB` value, the highest byte is ignored.
impl IntoColor for u32 {
    fn into_color(self) -> Color {
        (self >> 16, self >> 8, self).into_color()
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn wrap_channel(value: u32) -> u8 {
    (value % 256) as u8
}

/// A single strip LED state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    /// Base color of the pixel.
    pub color: Color,
    /// Multiplicative dim factor applied to each color channel on rendering.
    pub brightness: Brightness,
}

impl Pixel {
    pub const fn new(color: Color, brightness: Brightness) -> Self {
        Self { color, brightness }
    }

    /// Returns `true` if the pixel emits any light.
    pub fn is_on(&self) -> bool {
        self.brightness > 0.0
    }

    /// Returns the color that should be sent to the strip driver.
    ///
    /// Each channel is multiplied by the brightness, rounded to the nearest integer
    /// and then wrapped into a byte.
    pub fn corrected(&self) -> Color {
        Color::new(
            scale_channel(self.color.r, self.brightness),
            scale_channel(self.color.g, self.brightness),
            scale_channel(self.color.b, self.brightness),
        )
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Self::new(Color::default(), DEFAULT_BRIGHTNESS)
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_channel(value: u8, brightness: Brightness) -> u8 {
    // A byte times an `f32` is exact in `f64`. `f64::round` lives in std only.
    let scaled = f64::from(value) * f64::from(brightness);
    let rounded = if scaled < 0.0 {
        (scaled - 0.5) as i64
    } else {
        (scaled + 0.5) as i64
    };
    rounded.rem_euclid(256) as u8
}
