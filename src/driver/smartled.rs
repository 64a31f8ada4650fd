use log::warn;
use smart_leds::{RGB8, SmartLedsWrite};

use crate::OutputDriver;
use crate::brightness::scale_frame;
use crate::color::Color;
use crate::error::DriverError;
use crate::strip::{DEFAULT_FREQUENCY_HZ, StripConfig};

/// Output driver backed by a [`SmartLedsWrite`] implementation
///
/// The writer owns the timing-sensitive part (SPI, RMT, PIO, ...). Frames
/// are brightness-scaled before they are written. Signal inversion and
/// frequencies other than 800 kHz cannot be expressed through the writer and
/// are rejected at configuration time.
pub struct SmartLedsDriver<W> {
    writer: W,
    length: usize,
    released: bool,
}

impl<W> SmartLedsDriver<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            length: 0,
            released: false,
        }
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Take the writer back
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsDriver<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    fn configure(&mut self, config: &StripConfig) -> Result<(), DriverError> {
        if config.invert {
            return Err(DriverError::Unsupported("inverted signal"));
        }
        if config.frequency_hz != DEFAULT_FREQUENCY_HZ {
            return Err(DriverError::Unsupported("signal frequency"));
        }
        self.length = config.length;
        self.released = false;
        Ok(())
    }

    fn render(&mut self, pixels: &[Color], brightness: u8) -> Result<(), DriverError> {
        if self.released {
            return Err(DriverError::Write);
        }
        self.writer
            .write(scale_frame(pixels, brightness))
            .map_err(|_| DriverError::Write)
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        // Leave the LEDs dark; the strip is going away either way.
        let off = core::iter::repeat_n(RGB8::default(), self.length);
        if self.writer.write(off).is_err() {
            warn!("[SmartLedsDriver.release] failed to turn {} LEDs off", self.length);
        }
    }
}
