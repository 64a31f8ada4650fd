//! Rainbow animations
//!
//! Both walk the hue wheel 256 steps per iteration:
//! - `Rainbow`: every pixel is one hue step ahead of its neighbour, the
//!   whole strip shifts together
//! - `RainbowCycle`: one full wheel is spread over the length of the strip

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use super::{Animation, PixelSink, present};
use crate::color::wheel;
use crate::error::Result;

const DEFAULT_WAIT_MS: u64 = 20;
const HUE_STEPS: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rainbow {
    wait: Duration,
    iterations: usize,
}

impl Default for Rainbow {
    fn default() -> Self {
        Self {
            wait: Duration::from_millis(DEFAULT_WAIT_MS),
            iterations: 1,
        }
    }
}

impl Rainbow {
    #[must_use]
    pub const fn with_wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    /// Number of full trips around the wheel
    #[must_use]
    pub const fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}

impl Animation for Rainbow {
    #[allow(clippy::cast_possible_truncation)]
    fn run<S, D>(&self, sink: &mut S, delay: &mut D) -> Result<()>
    where
        S: PixelSink + ?Sized,
        D: DelayNs + ?Sized,
    {
        let length = sink.length()?;
        for _ in 0..self.iterations {
            for step in 0..HUE_STEPS {
                for index in 0..length {
                    sink.set(index, wheel(((index + step) & 0xFF) as u8))?;
                }
                present(sink, delay, self.wait)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RainbowCycle {
    wait: Duration,
    iterations: usize,
}

impl Default for RainbowCycle {
    fn default() -> Self {
        Self {
            wait: Duration::from_millis(DEFAULT_WAIT_MS),
            iterations: 5,
        }
    }
}

impl RainbowCycle {
    #[must_use]
    pub const fn with_wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    /// Number of full trips around the wheel
    #[must_use]
    pub const fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}

impl Animation for RainbowCycle {
    #[allow(clippy::cast_possible_truncation)]
    fn run<S, D>(&self, sink: &mut S, delay: &mut D) -> Result<()>
    where
        S: PixelSink + ?Sized,
        D: DelayNs + ?Sized,
    {
        let length = sink.length()?;
        for _ in 0..self.iterations {
            for step in 0..HUE_STEPS {
                for index in 0..length {
                    let hue = (index * HUE_STEPS / length + step) & 0xFF;
                    sink.set(index, wheel(hue as u8))?;
                }
                present(sink, delay, self.wait)?;
            }
        }
        Ok(())
    }
}
