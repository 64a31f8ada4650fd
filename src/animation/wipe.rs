use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use super::{Animation, PixelSink, present};
use crate::color::Color;
use crate::error::Result;

const DEFAULT_WAIT_MS: u64 = 75;

/// Wipe a color across the strip one pixel at a time
///
/// Ends with every pixel set to the color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorWipe {
    color: Color,
    wait: Duration,
}

impl ColorWipe {
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            wait: Duration::from_millis(DEFAULT_WAIT_MS),
        }
    }

    /// Set the pause after each pixel
    #[must_use]
    pub const fn with_wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }
}

impl Animation for ColorWipe {
    fn run<S, D>(&self, sink: &mut S, delay: &mut D) -> Result<()>
    where
        S: PixelSink + ?Sized,
        D: DelayNs + ?Sized,
    {
        for index in 0..sink.length()? {
            sink.set(index, self.color)?;
            present(sink, delay, self.wait)?;
        }
        Ok(())
    }
}
