//! Strip addressing.
//!
//! Every strip operation targets a [`Region`]: a single pixel, a contiguous
//! [`Section`] or the whole strip. A region is resolved into an index range once,
//! before any pixel is touched, which keeps all operations all-or-nothing.

use core::ops::Range;

use crate::{Error, Result};

/// A contiguous range of pixels `[index, index + len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Section {
    /// Index of the first pixel in the section.
    pub index: usize,
    /// The number of pixels in the section.
    pub len: usize,
}

impl Section {
    /// Creates a section of the given length starting from the first pixel.
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Creates a section of the given length starting from the given index.
    pub const fn at_index(index: usize, len: usize) -> Self {
        Self { index, len }
    }

    /// Moves the section start to the given index.
    #[must_use]
    pub const fn at(self, index: usize) -> Self {
        Self { index, ..self }
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl From<Range<usize>> for Section {
    fn from(range: Range<usize>) -> Self {
        Self::at_index(range.start, range.end.saturating_sub(range.start))
    }
}

/// A part of the strip an operation is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// A single pixel with the given index.
    Pixel(usize),
    /// A contiguous section of pixels.
    Section(Section),
    /// Every pixel of the strip.
    All,
}

impl Region {
    /// Resolves the region into a range of pixel indices of the strip with the given
    /// length.
    pub fn resolve(self, strip_len: usize) -> Result<Range<usize>> {
        match self {
            Self::Pixel(index) => {
                if index < strip_len {
                    Ok(index..index + 1)
                } else {
                    Err(Error::IndexOutOfRange {
                        index,
                        len: strip_len,
                    })
                }
            }
            Self::Section(Section { index, len }) => index
                .checked_add(len)
                .filter(|&end| end <= strip_len)
                .map(|end| index..end)
                .ok_or(Error::RangeOutOfBounds {
                    index,
                    len,
                    strip_len,
                }),
            Self::All => Ok(0..strip_len),
        }
    }
}

impl From<Section> for Region {
    fn from(section: Section) -> Self {
        Self::Section(section)
    }
}
