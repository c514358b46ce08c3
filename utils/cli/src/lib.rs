//! Host side pixel strip emulator.
//!
//! Applies strip operations to an in-memory strip and renders the result into a
//! terminal with true color escape sequences.

use std::{io::Write, str::FromStr};

use anyhow::{anyhow, bail, Context as _};
use clap::{Args, Subcommand};
use pixelstrip_core::{
    Brightness, Color, Config, IntoColor, Region, Sampling, Section, Strip, StripDriver,
    UniformRandom,
};

/// Strip driver that prints every frame as a row of colored blocks.
pub struct TerminalDriver<W> {
    out: W,
    pin: u8,
}

impl<W: Write> TerminalDriver<W> {
    pub fn new(out: W, pin: u8) -> Self {
        Self { out, pin }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StripDriver for TerminalDriver<W> {
    type Error = std::io::Error;

    fn write(&mut self, colors: &[Color]) -> Result<(), Self::Error> {
        write!(self.out, "pin {:>2} |", self.pin)?;
        for color in colors {
            write!(
                self.out,
                "\x1b[48;2;{};{};{}m  \x1b[0m",
                color.r, color.g, color.b
            )?;
        }
        writeln!(self.out, "|")?;
        self.out.flush()?;

        log::debug!(
            "Rendered {} pixels: {:?}",
            colors.len(),
            colors
                .iter()
                .map(|color| (color.r, color.g, color.b))
                .collect::<Vec<_>>()
        );
        Ok(())
    }
}

/// Creates an emulated strip that renders into the given output.
///
/// The terminal driver is attached to the configured pin, a seed makes the random
/// operations reproducible.
pub fn terminal_strip<W: Write>(
    config: Config,
    out: W,
    seed: Option<u64>,
) -> pixelstrip_core::Result<Strip<TerminalDriver<W>>> {
    let driver = TerminalDriver::new(out, config.pin);
    match seed {
        Some(seed) => {
            log::info!("Using random seed {seed}");
            Strip::with_random_source(config, driver, UniformRandom::seeded(seed))
        }
        None => Strip::new(config, driver),
    }
}

/// A color given on the command line.
///
/// Accepts `#rrggbb`, `rrggbb` or decimal `r,g,b` notations, decimal channels wider
/// than a byte wrap around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorArg(pub Color);

impl FromStr for ColorArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.contains(',') {
            let channels = s
                .split(',')
                .map(|channel| {
                    channel
                        .trim()
                        .parse::<u32>()
                        .with_context(|| format!("Invalid color channel \"{channel}\""))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            let [r, g, b] = channels[..] else {
                bail!("Expected three color channels, got {}", channels.len());
            };
            return Ok(Self([r, g, b].into_color()));
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 {
            bail!("Expected a color in the \"#rrggbb\" or \"r,g,b\" format, got \"{s}\"");
        }
        let packed = u32::from_str_radix(hex, 16)
            .map_err(|err| anyhow!("Invalid hex color \"{s}\": {err}"))?;
        Ok(Self(packed.into_color()))
    }
}

/// A section color, the `random` keyword asks for a random one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionColor {
    Fixed(Color),
    Random,
}

impl SectionColor {
    pub fn into_option(self) -> Option<Color> {
        match self {
            Self::Fixed(color) => Some(color),
            Self::Random => None,
        }
    }
}

impl FromStr for SectionColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("random") {
            Ok(Self::Random)
        } else {
            s.parse::<ColorArg>().map(|color| Self::Fixed(color.0))
        }
    }
}

/// Part of the strip an action applies to.
///
/// Without arguments the whole strip is used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Args)]
pub struct RegionArgs {
    /// Index of the first pixel
    #[arg(long)]
    pub index: Option<usize>,
    /// The number of pixels, by default up to the end of the strip
    #[arg(long)]
    pub len: Option<usize>,
}

impl RegionArgs {
    pub fn region(&self, num_leds: usize) -> Region {
        if self.index.is_none() && self.len.is_none() {
            return Region::All;
        }

        let index = self.index.unwrap_or_default();
        let len = self.len.unwrap_or_else(|| num_leds.saturating_sub(index));
        Section::at_index(index, len).into()
    }
}

/// Strip operation.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Action {
    /// Fill pixels with the given color
    Fill {
        /// Color in the "#rrggbb" or "r,g,b" format
        color: ColorArg,
        #[command(flatten)]
        region: RegionArgs,
    },
    /// Turn pixels off keeping their colors
    Off {
        #[command(flatten)]
        region: RegionArgs,
    },
    /// Fill pixels with random colors
    Random {
        /// Use the same random color for every pixel
        #[arg(long)]
        solid: bool,
        #[command(flatten)]
        region: RegionArgs,
    },
    /// Set pixels brightness
    Brightness {
        /// Brightness value, 0.0 turns pixels off
        value: Brightness,
        #[command(flatten)]
        region: RegionArgs,
    },
    /// Set random pixels brightness
    BrightnessRandom {
        /// Lower brightness bound
        #[arg(long, default_value = "0.0")]
        min: Brightness,
        /// Upper brightness bound
        #[arg(long, default_value = "1.0")]
        max: Brightness,
        /// Use the same random brightness for every pixel
        #[arg(long)]
        solid: bool,
        #[command(flatten)]
        region: RegionArgs,
    },
    /// Fill a section with the listed colors
    Section {
        /// Index of the first section pixel
        #[arg(short, long, default_value = "0")]
        index: usize,
        /// Section colors, "random" stands for a random color
        #[arg(required = true)]
        colors: Vec<SectionColor>,
    },
}

impl Action {
    /// Applies the action to the strip state.
    pub fn apply<D>(&self, strip: &mut Strip<D>) -> pixelstrip_core::Result<()> {
        let num_leds = strip.num_leds();
        match self {
            Self::Fill { color, region } => strip.fill_color(region.region(num_leds), color.0),
            Self::Off { region } => strip.fill_off(region.region(num_leds)),
            Self::Random { solid, region } => {
                strip.fill_random(region.region(num_leds), sampling(*solid))
            }
            Self::Brightness { value, region } => {
                strip.fill_brightness(region.region(num_leds), *value)
            }
            Self::BrightnessRandom {
                min,
                max,
                solid,
                region,
            } => strip.fill_brightness_random(region.region(num_leds), *min, *max, sampling(*solid)),
            Self::Section { index, colors } => {
                let colors: Vec<_> = colors.iter().map(|color| color.into_option()).collect();
                strip.set_section(&colors, *index)
            }
        }
    }
}

fn sampling(solid: bool) -> Sampling {
    if solid {
        Sampling::Solid
    } else {
        Sampling::Independent
    }
}
