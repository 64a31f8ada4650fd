//! Theater chase animations
//!
//! Every `spacing`-th pixel is lit, flushed, then turned off again before
//! the pattern moves one pixel along. Pixels whose offset would land past
//! the end of the strip are skipped.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use super::{Animation, PixelSink, present};
use crate::bounds::{chase_positions, check_spacing};
use crate::color::{Color, wheel};
use crate::error::Result;

const DEFAULT_CHASE_WAIT_MS: u64 = 100;
const DEFAULT_RAINBOW_WAIT_MS: u64 = 75;
const DEFAULT_ITERATIONS: usize = 10;
const DEFAULT_SPACING: usize = 3;
const HUE_STEPS: usize = 256;

/// Movie theater light style chaser in a single color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TheaterChase {
    color: Color,
    wait: Duration,
    iterations: usize,
    spacing: usize,
}

impl TheaterChase {
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            wait: Duration::from_millis(DEFAULT_CHASE_WAIT_MS),
            iterations: DEFAULT_ITERATIONS,
            spacing: DEFAULT_SPACING,
        }
    }

    #[must_use]
    pub const fn with_wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    #[must_use]
    pub const fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Distance between lit pixels
    #[must_use]
    pub const fn with_spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }
}

impl Animation for TheaterChase {
    fn run<S, D>(&self, sink: &mut S, delay: &mut D) -> Result<()>
    where
        S: PixelSink + ?Sized,
        D: DelayNs + ?Sized,
    {
        let spacing = check_spacing(self.spacing)?;
        let length = sink.length()?;
        for _ in 0..self.iterations {
            for phase in 0..spacing {
                for (_, index) in chase_positions(length, spacing, phase) {
                    sink.set(index, self.color)?;
                }
                present(sink, delay, self.wait)?;
                for (_, index) in chase_positions(length, spacing, phase) {
                    sink.set(index, Color::OFF)?;
                }
            }
        }
        Ok(())
    }
}

/// Theater chase where the lit pixels walk the hue wheel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TheaterChaseRainbow {
    wait: Duration,
    spacing: usize,
}

impl Default for TheaterChaseRainbow {
    fn default() -> Self {
        Self {
            wait: Duration::from_millis(DEFAULT_RAINBOW_WAIT_MS),
            spacing: DEFAULT_SPACING,
        }
    }
}

impl TheaterChaseRainbow {
    #[must_use]
    pub const fn with_wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    /// Distance between lit pixels
    #[must_use]
    pub const fn with_spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }
}

impl Animation for TheaterChaseRainbow {
    #[allow(clippy::cast_possible_truncation)]
    fn run<S, D>(&self, sink: &mut S, delay: &mut D) -> Result<()>
    where
        S: PixelSink + ?Sized,
        D: DelayNs + ?Sized,
    {
        let spacing = check_spacing(self.spacing)?;
        let length = sink.length()?;
        for step in 0..HUE_STEPS {
            for phase in 0..spacing {
                // Hue follows the stride base, not the shifted pixel
                for (base, index) in chase_positions(length, spacing, phase) {
                    sink.set(index, wheel(((base + step) % 255) as u8))?;
                }
                present(sink, delay, self.wait)?;
                for (_, index) in chase_positions(length, spacing, phase) {
                    sink.set(index, Color::OFF)?;
                }
            }
        }
        Ok(())
    }
}
