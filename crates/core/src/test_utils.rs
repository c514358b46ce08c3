//! Test helpers

use std::{cell::Cell, io, rc::Rc};

use crate::{color::Color, driver::StripDriver, random::RandomSource};

/// Strip driver which remembers every written frame.
#[derive(Debug, Default, Clone)]
pub struct RecordingDriver {
    pub frames: Vec<Vec<Color>>,
}

impl RecordingDriver {
    #[must_use]
    pub fn last_frame(&self) -> Option<&[Color]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl StripDriver for RecordingDriver {
    type Error = io::Error;

    fn write(&mut self, colors: &[Color]) -> Result<(), Self::Error> {
        self.frames.push(colors.to_vec());
        Ok(())
    }
}

/// Strip driver that behaves like a disconnected strip.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingDriver;

impl StripDriver for FailingDriver {
    type Error = io::Error;

    fn write(&mut self, _colors: &[Color]) -> Result<(), Self::Error> {
        Err(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "strip is disconnected",
        ))
    }
}

/// Shared handle to the number of random source calls.
///
/// The strip owns its random source, so the counter is shared with the test code.
#[derive(Debug, Default, Clone)]
pub struct CallCounter(Rc<Cell<usize>>);

impl CallCounter {
    #[must_use]
    pub fn get(&self) -> usize {
        self.0.get()
    }

    pub fn reset(&self) {
        self.0.set(0);
    }

    fn increment(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Random source wrapper that counts calls to the inner source.
pub struct CountingRandom<R> {
    inner: R,
    calls: CallCounter,
}

impl<R: RandomSource> CountingRandom<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: CallCounter::default(),
        }
    }

    #[must_use]
    pub fn counter(&self) -> CallCounter {
        self.calls.clone()
    }
}

impl<R: RandomSource> RandomSource for CountingRandom<R> {
    fn random_range(&mut self, lo: u32, hi: u32) -> u32 {
        self.calls.increment();
        self.inner.random_range(lo, hi)
    }
}

/// Returns a random source that yields the given values in a loop.
///
/// Each value is wrapped into the requested range.
pub fn sequence(values: Vec<u32>) -> impl FnMut(u32, u32) -> u32 {
    assert!(!values.is_empty(), "sequence must contain at least one value");

    let mut values = values.into_iter().cycle();
    move |lo, hi| {
        let value = values.next().unwrap_or(lo);
        match hi.saturating_sub(lo).checked_add(1) {
            Some(span) => lo + value % span,
            None => value,
        }
    }
}

#[test]
fn test_sequence_wraps_into_range() {
    let mut rng = sequence(vec![1, 5, 300]);
    assert_eq!(rng.random_range(0, 255), 1);
    assert_eq!(rng.random_range(0, 3), 1);
    assert_eq!(rng.random_range(10, 10), 10);
    assert_eq!(rng.random_range(0, 255), 1);
}

#[test]
fn test_counting_random_counts_calls() {
    let mut rng = CountingRandom::new(|lo: u32, _hi: u32| lo);
    let counter = rng.counter();
    for _ in 0..3 {
        rng.random_range(0, 255);
    }
    assert_eq!(counter.get(), 3);
    counter.reset();
    assert_eq!(counter.get(), 0);
}
