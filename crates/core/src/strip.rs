//! Strip pixel store.

use alloc::{boxed::Box, vec, vec::Vec};
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    color::{Brightness, Color, IntoColor, Pixel, DEFAULT_BRIGHTNESS},
    driver::StripDriver,
    random::{random_color, BrightnessRange, RandomSource, UniformRandom},
    region::{Region, Section},
    DriverWriteFailure, Error, Result,
};

/// Strip construction parameters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// The number of LEDs in the strip.
    pub num_leds: usize,
    /// Data pin the strip is connected to.
    ///
    /// The pixel store does not use it, the value is kept for the board code that
    /// sets up the driver.
    pub pin: u8,
    /// Initial brightness of every pixel.
    pub brightness: Brightness,
}

impl Config {
    /// Creates a configuration for the strip with the given length on the pin `0`
    /// and with the default brightness.
    pub const fn new(num_leds: usize) -> Self {
        Self {
            num_leds,
            pin: 0,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }

    #[must_use]
    pub const fn with_pin(self, pin: u8) -> Self {
        Self { pin, ..self }
    }

    #[must_use]
    pub const fn with_brightness(self, brightness: Brightness) -> Self {
        Self { brightness, ..self }
    }

    fn validate(&self) -> Result<()> {
        if self.num_leds == 0 {
            return Err(Error::EmptyStrip);
        }
        if !self.brightness.is_finite() {
            return Err(Error::InvalidBrightness);
        }
        Ok(())
    }
}

/// How the random values are spread over the pixels of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sampling {
    /// Every pixel gets its own random value.
    Independent,
    /// A single random value is drawn and applied to every pixel.
    Solid,
}

/// LED strip state with the per-pixel color and brightness.
///
/// All the setters only change the in-memory state, nothing is sent to the strip
/// until [`Strip::update`] is called.
pub struct Strip<D> {
    pixels: Vec<Pixel>,
    frame: Vec<Color>,
    pin: u8,
    rng: Box<dyn RandomSource>,
    driver: D,
}

impl<D> Strip<D> {
    /// Creates a new strip with the default uniform random source.
    pub fn new(config: Config, driver: D) -> Result<Self> {
        Self::with_random_source(config, driver, UniformRandom::default())
    }

    /// Creates a new strip which uses the given random source for the randomized
    /// operations.
    pub fn with_random_source<R>(config: Config, driver: D, rng: R) -> Result<Self>
    where
        R: RandomSource + 'static,
    {
        config.validate()?;

        log::debug!(
            "Created a strip of {} LEDs on pin {} with brightness {}",
            config.num_leds,
            config.pin,
            config.brightness
        );
        Ok(Self {
            pixels: vec![Pixel::new(Color::default(), config.brightness); config.num_leds],
            frame: Vec::with_capacity(config.num_leds),
            pin: config.pin,
            rng: Box::new(rng),
            driver,
        })
    }

    /// Returns the number of LEDs in the strip.
    pub fn num_leds(&self) -> usize {
        self.pixels.len()
    }

    pub fn pin(&self) -> u8 {
        self.pin
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Replaces the random source used by all subsequent randomized operations.
    ///
    /// The current pixel state is left intact.
    pub fn change_number_generator<R>(&mut self, rng: R)
    where
        R: RandomSource + 'static,
    {
        log::debug!("Changed strip random number generator");
        self.rng = Box::new(rng);
    }

    // Region operations.

    /// Sets the color of every pixel in the region, brightness is left untouched.
    pub fn fill_color(&mut self, region: impl Into<Region>, color: impl IntoColor) -> Result<()> {
        paint_color(self.region_mut(region.into())?, color.into_color());
        Ok(())
    }

    /// Turns off every pixel in the region, the color is kept.
    pub fn fill_off(&mut self, region: impl Into<Region>) -> Result<()> {
        self.fill_brightness(region, 0.0)
    }

    /// Sets the brightness of every pixel in the region as is.
    pub fn fill_brightness(
        &mut self,
        region: impl Into<Region>,
        brightness: Brightness,
    ) -> Result<()> {
        paint_brightness(self.region_mut(region.into())?, brightness);
        Ok(())
    }

    /// Sets random colors in the region.
    pub fn fill_random(&mut self, region: impl Into<Region>, sampling: Sampling) -> Result<()> {
        let range = region.into().resolve(self.pixels.len())?;
        paint_random(&mut self.pixels[range], &mut *self.rng, sampling);
        Ok(())
    }

    /// Sets random brightness in the region.
    ///
    /// The bounds are clamped into `[0.0, 1.0]` and swapped if `min > max`.
    pub fn fill_brightness_random(
        &mut self,
        region: impl Into<Region>,
        min: Brightness,
        max: Brightness,
        sampling: Sampling,
    ) -> Result<()> {
        let range = region.into().resolve(self.pixels.len())?;
        paint_brightness_random(
            &mut self.pixels[range],
            &mut *self.rng,
            BrightnessRange::new(min, max),
            sampling,
        );
        Ok(())
    }

    // Single pixel operations.

    pub fn set_pixel_color(&mut self, i: usize, color: impl IntoColor) -> Result<()> {
        self.fill_color(Region::Pixel(i), color)
    }

    pub fn set_pixel_off(&mut self, i: usize) -> Result<()> {
        self.fill_off(Region::Pixel(i))
    }

    pub fn set_pixel_brightness(&mut self, i: usize, brightness: Brightness) -> Result<()> {
        self.fill_brightness(Region::Pixel(i), brightness)
    }

    pub fn set_pixel_brightness_random(
        &mut self,
        i: usize,
        min: Brightness,
        max: Brightness,
    ) -> Result<()> {
        self.fill_brightness_random(Region::Pixel(i), min, max, Sampling::Independent)
    }

    pub fn set_pixel_random(&mut self, i: usize) -> Result<()> {
        self.fill_random(Region::Pixel(i), Sampling::Independent)
    }

    pub fn pixel(&self, i: usize) -> Result<Pixel> {
        self.pixels.get(i).copied().ok_or(Error::IndexOutOfRange {
            index: i,
            len: self.pixels.len(),
        })
    }

    pub fn pixel_color(&self, i: usize) -> Result<Color> {
        self.pixel(i).map(|pixel| pixel.color)
    }

    pub fn pixel_brightness(&self, i: usize) -> Result<Brightness> {
        self.pixel(i).map(|pixel| pixel.brightness)
    }

    /// Returns `true` if the pixel brightness is above zero.
    pub fn pixel_on(&self, i: usize) -> Result<bool> {
        self.pixel(i).map(|pixel| pixel.is_on())
    }

    // Whole strip operations.

    pub fn set_all(&mut self, color: impl IntoColor) {
        paint_color(&mut self.pixels, color.into_color());
    }

    pub fn set_all_off(&mut self) {
        paint_brightness(&mut self.pixels, 0.0);
    }

    pub fn set_all_brightness(&mut self, brightness: Brightness) {
        paint_brightness(&mut self.pixels, brightness);
    }

    /// Sets the brightness of the whole strip, same as [`Strip::set_all_brightness`].
    pub fn set_brightness(&mut self, brightness: Brightness) {
        self.set_all_brightness(brightness);
    }

    /// Sets an independent random color for every pixel.
    pub fn set_all_random(&mut self) {
        paint_random(&mut self.pixels, &mut *self.rng, Sampling::Independent);
    }

    /// Sets the same random color for every pixel.
    pub fn set_all_random_solid(&mut self) {
        paint_random(&mut self.pixels, &mut *self.rng, Sampling::Solid);
    }

    /// Sets an independent random brightness for every pixel.
    pub fn set_all_brightness_random(&mut self, min: Brightness, max: Brightness) {
        paint_brightness_random(
            &mut self.pixels,
            &mut *self.rng,
            BrightnessRange::new(min, max),
            Sampling::Independent,
        );
    }

    /// Sets the same random brightness for every pixel.
    pub fn set_all_brightness_random_solid(&mut self, min: Brightness, max: Brightness) {
        paint_brightness_random(
            &mut self.pixels,
            &mut *self.rng,
            BrightnessRange::new(min, max),
            Sampling::Solid,
        );
    }

    // Section operations.

    /// Fills the section starting from `index` with the given colors, `None` stands for
    /// a random color.
    ///
    /// The section is as long as the colors slice.
    pub fn set_section<C>(&mut self, colors: &[Option<C>], index: usize) -> Result<()>
    where
        C: IntoColor + Copy,
    {
        self.set_section_exact(Section::at_index(index, colors.len()), colors)
    }

    /// Same as [`Strip::set_section`], but the colors must match the given section
    /// length.
    pub fn set_section_exact<C>(&mut self, section: Section, colors: &[Option<C>]) -> Result<()>
    where
        C: IntoColor + Copy,
    {
        let range = Region::Section(section).resolve(self.pixels.len())?;
        if colors.len() != section.len {
            return Err(Error::LengthMismatch {
                expected: section.len,
                actual: colors.len(),
            });
        }

        let rng = &mut *self.rng;
        for (pixel, color) in self.pixels[range].iter_mut().zip(colors.iter().copied()) {
            pixel.color = match color {
                Some(color) => color.into_color(),
                None => random_color(rng),
            };
        }
        Ok(())
    }

    pub fn set_section_off(&mut self, section: Section) -> Result<()> {
        self.fill_off(section)
    }

    pub fn set_section_solid(&mut self, section: Section, color: impl IntoColor) -> Result<()> {
        self.fill_color(section, color)
    }

    pub fn set_section_brightness(
        &mut self,
        section: Section,
        brightness: Brightness,
    ) -> Result<()> {
        self.fill_brightness(section, brightness)
    }

    pub fn set_section_brightness_random(
        &mut self,
        section: Section,
        min: Brightness,
        max: Brightness,
    ) -> Result<()> {
        self.fill_brightness_random(section, min, max, Sampling::Independent)
    }

    pub fn set_section_brightness_random_solid(
        &mut self,
        section: Section,
        min: Brightness,
        max: Brightness,
    ) -> Result<()> {
        self.fill_brightness_random(section, min, max, Sampling::Solid)
    }

    pub fn set_section_random(&mut self, section: Section) -> Result<()> {
        self.fill_random(section, Sampling::Independent)
    }

    pub fn set_section_random_solid(&mut self, section: Section) -> Result<()> {
        self.fill_random(section, Sampling::Solid)
    }

    /// Returns the brightness corrected colors in the strip order.
    pub fn frame(&self) -> impl Iterator<Item = Color> + '_ {
        self.pixels.iter().map(Pixel::corrected)
    }

    fn region_mut(&mut self, region: Region) -> Result<&mut [Pixel]> {
        let range = region.resolve(self.pixels.len())?;
        Ok(&mut self.pixels[range])
    }
}

impl<D: StripDriver> Strip<D> {
    /// Sends the brightness corrected colors of all pixels to the strip driver.
    ///
    /// The whole strip is rendered on every call. If the driver fails, the error is
    /// returned as is and the pixel state is kept unchanged.
    pub fn update(&mut self) -> core::result::Result<(), DriverWriteFailure<D::Error>> {
        self.frame.clear();
        self.frame.extend(self.pixels.iter().map(Pixel::corrected));

        log::trace!("Writing {} pixels to the strip", self.frame.len());
        self.driver.write(&self.frame).map_err(DriverWriteFailure)
    }
}

impl<D: fmt::Debug> fmt::Debug for Strip<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strip")
            .field("pixels", &self.pixels)
            .field("pin", &self.pin)
            .field("driver", &self.driver)
            .finish_non_exhaustive()
    }
}

fn paint_color(pixels: &mut [Pixel], color: Color) {
    for pixel in pixels {
        pixel.color = color;
    }
}

fn paint_brightness(pixels: &mut [Pixel], brightness: Brightness) {
    for pixel in pixels {
        pixel.brightness = brightness;
    }
}

fn paint_random(pixels: &mut [Pixel], rng: &mut dyn RandomSource, sampling: Sampling) {
    sample_into(
        pixels,
        sampling,
        || random_color(rng),
        |pixel, color| pixel.color = color,
    );
}

fn paint_brightness_random(
    pixels: &mut [Pixel],
    rng: &mut dyn RandomSource,
    bounds: BrightnessRange,
    sampling: Sampling,
) {
    sample_into(
        pixels,
        sampling,
        || bounds.sample(rng),
        |pixel, brightness| pixel.brightness = brightness,
    );
}

/// Solid sampling draws a single value for the whole slice, an empty slice draws
/// nothing.
fn sample_into<T: Copy>(
    pixels: &mut [Pixel],
    sampling: Sampling,
    mut sample: impl FnMut() -> T,
    mut assign: impl FnMut(&mut Pixel, T),
) {
    if pixels.is_empty() {
        return;
    }

    match sampling {
        Sampling::Independent => {
            for pixel in pixels {
                assign(pixel, sample());
            }
        }
        Sampling::Solid => {
            let value = sample();
            for pixel in pixels {
                assign(pixel, value);
            }
        }
    }
}
