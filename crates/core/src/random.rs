//! Random numbers used by the randomized fills.

use rand::{rngs::SmallRng, Rng, RngCore, SeedableRng};

use crate::color::{Brightness, Color};

/// The number of discrete brightness levels random brightness is sampled from.
pub const BRIGHTNESS_STEPS: u32 = 1000;

/// Seed of the default generator when the operating system cannot provide one.
#[cfg(not(feature = "std"))]
const DEFAULT_SEED: u64 = 0x5EED_F00D_5721_B0B5;

/// Source of random integers.
///
/// The strip calls it exactly once per sampled value: a random color takes three
/// calls, a random brightness takes one, and a value shared between several pixels
/// is sampled only once.
pub trait RandomSource {
    /// Returns a value in the inclusive range `[lo, hi]`.
    fn random_range(&mut self, lo: u32, hi: u32) -> u32;
}

impl<F> RandomSource for F
where
    F: FnMut(u32, u32) -> u32,
{
    fn random_range(&mut self, lo: u32, hi: u32) -> u32 {
        self(lo, hi)
    }
}

/// Uniformly distributed random source backed by a [`rand`] generator.
#[derive(Debug, Clone)]
pub struct UniformRandom<R = SmallRng>(R);

impl<R: RngCore> UniformRandom<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl UniformRandom<SmallRng> {
    /// Creates a generator which produces the same sequence for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for UniformRandom<SmallRng> {
    #[cfg(feature = "std")]
    fn default() -> Self {
        Self(SmallRng::from_os_rng())
    }

    #[cfg(not(feature = "std"))]
    fn default() -> Self {
        Self::seeded(DEFAULT_SEED)
    }
}

impl<R: RngCore> RandomSource for UniformRandom<R> {
    fn random_range(&mut self, lo: u32, hi: u32) -> u32 {
        if lo >= hi {
            return lo;
        }
        Rng::random_range(&mut self.0, lo..=hi)
    }
}

/// Brightness bounds used by the random brightness fills.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessRange {
    min: Brightness,
    max: Brightness,
}

impl BrightnessRange {
    /// Creates a range clamped into `[0.0, 1.0]`, the bounds are swapped if
    /// `min > max`.
    pub fn new(min: Brightness, max: Brightness) -> Self {
        let (min, max) = (clamp_unit(min), clamp_unit(max));
        if min > max {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    pub fn min(&self) -> Brightness {
        self.min
    }

    pub fn max(&self) -> Brightness {
        self.max
    }

    /// Draws a single brightness value from the range.
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&self, rng: &mut (impl RandomSource + ?Sized)) -> Brightness {
        let lo = to_step(self.min);
        let hi = to_step(self.max);
        let step = rng.random_range(lo, hi);
        (step as f32 / BRIGHTNESS_STEPS as f32).clamp(self.min, self.max)
    }
}

/// Draws a random color, one call per channel in the red, green, blue order.
#[allow(clippy::cast_possible_truncation)]
pub fn random_color(rng: &mut (impl RandomSource + ?Sized)) -> Color {
    let mut channel = || (rng.random_range(0, 255) % 256) as u8;
    let r = channel();
    let g = channel();
    let b = channel();
    Color::new(r, g, b)
}

fn clamp_unit(value: Brightness) -> Brightness {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn to_step(value: Brightness) -> u32 {
    // The value is already clamped into the unit range.
    (value * BRIGHTNESS_STEPS as f32 + 0.5) as u32
}
