use core::ops::RangeBounds;

use heapless::Vec;
use log::{debug, trace, warn};

use crate::OutputDriver;
use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::error::{ConfigError, Error, Result};

/// Default DMA channel
pub const DEFAULT_DMA_CHANNEL: u8 = 5;
/// Default signal frequency for WS281x pixels
pub const DEFAULT_FREQUENCY_HZ: u32 = 800_000;
/// Default brightness (full)
pub const DEFAULT_BRIGHTNESS: u8 = 255;

const BRIGHTNESS_MASK: u32 = 0xFF;

/// Device configuration for a strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripConfig {
    /// Number of LEDs in the strip
    pub length: usize,
    /// GPIO pin driving the data line
    pub gpio_pin: u8,
    /// DMA channel used to generate the signal
    pub dma_channel: u8,
    /// Output frequency in hertz
    pub frequency_hz: u32,
    /// Invert the signal (e.g. behind an NPN level shifter)
    pub invert: bool,
    /// Initial brightness (0-255)
    pub brightness: u8,
}

impl StripConfig {
    /// Configuration with default DMA channel, frequency, invert flag and
    /// brightness
    pub const fn new(length: usize, gpio_pin: u8) -> Self {
        Self {
            length,
            gpio_pin,
            dma_channel: DEFAULT_DMA_CHANNEL,
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            invert: false,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }

    #[must_use]
    pub const fn with_dma_channel(mut self, dma_channel: u8) -> Self {
        self.dma_channel = dma_channel;
        self
    }

    #[must_use]
    pub const fn with_frequency(mut self, frequency_hz: u32) -> Self {
        self.frequency_hz = frequency_hz;
        self
    }

    #[must_use]
    pub const fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Set the initial brightness, keeping only the low 8 bits
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn with_brightness(mut self, brightness: u32) -> Self {
        self.brightness = (brightness & BRIGHTNESS_MASK) as u8;
        self
    }
}

/// LED strip handle
///
/// Owns the pixel buffer, the configuration and the output driver. Buffer
/// changes become visible only on [`Strip::show`]. Once closed, every
/// operation fails with [`Error::Closed`].
pub struct Strip<D: OutputDriver, const MAX_LEDS: usize> {
    driver: D,
    config: StripConfig,
    // `None` once the strip has been closed
    buffer: Option<PixelBuffer<MAX_LEDS>>,
}

impl<D: OutputDriver, const MAX_LEDS: usize> Strip<D, MAX_LEDS> {
    /// Allocate the buffer and configure the driver
    ///
    /// A driver rejection is returned as-is, the driver is not retried.
    pub fn new(config: StripConfig, mut driver: D) -> Result<Self> {
        let buffer = PixelBuffer::new(config.length)?;
        driver.configure(&config).map_err(ConfigError::Driver)?;
        debug!(
            "[Strip.new] {} LEDs on GPIO {} (dma {}, {} Hz, invert {}, brightness {})",
            config.length,
            config.gpio_pin,
            config.dma_channel,
            config.frequency_hz,
            config.invert,
            config.brightness
        );

        Ok(Self {
            driver,
            config,
            buffer: Some(buffer),
        })
    }

    pub const fn config(&self) -> &StripConfig {
        &self.config
    }

    pub const fn gpio_pin(&self) -> u8 {
        self.config.gpio_pin
    }

    pub const fn dma_channel(&self) -> u8 {
        self.config.dma_channel
    }

    pub const fn frequency_hz(&self) -> u32 {
        self.config.frequency_hz
    }

    pub const fn invert(&self) -> bool {
        self.config.invert
    }

    pub const fn brightness(&self) -> u8 {
        self.config.brightness
    }

    /// Get a reference to the output driver.
    pub const fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a mutable reference to the output driver.
    pub const fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub const fn is_closed(&self) -> bool {
        self.buffer.is_none()
    }

    /// Number of LEDs in the strip
    pub fn length(&self) -> Result<usize> {
        Ok(self.buffer()?.len())
    }

    /// Set the brightness used by future [`Strip::show`] calls
    ///
    /// Only the low 8 bits are kept. Stored colors are not changed.
    #[allow(clippy::cast_possible_truncation)]
    pub fn set_brightness(&mut self, brightness: u32) -> Result<&mut Self> {
        self.buffer()?;
        self.config.brightness = (brightness & BRIGHTNESS_MASK) as u8;
        debug!("[Strip.set_brightness] {}", self.config.brightness);
        Ok(self)
    }

    /// Color stored at `index`
    pub fn get(&self, index: usize) -> Result<Color> {
        self.buffer()?.get(index)
    }

    /// Set the pixel at `index`
    ///
    /// Accepts a packed color (`0xRRGGBB`), a `(red, green, blue)` triplet or
    /// anything else convertible into a [`Color`].
    pub fn set_pixel(&mut self, index: usize, color: impl Into<Color>) -> Result<&mut Self> {
        self.buffer_mut()?.set(index, color)?;
        Ok(self)
    }

    /// Set the pixel at `index` from loose color components
    ///
    /// One component is taken as a packed color, three as separate channels.
    /// Any other count fails with [`Error::InvalidArgument`].
    pub fn set_pixel_components(&mut self, index: usize, components: &[u32]) -> Result<&mut Self> {
        let color = Color::try_from(components)?;
        self.set_pixel(index, color)
    }

    pub fn fill(&mut self, color: impl Into<Color>) -> Result<&mut Self> {
        self.buffer_mut()?.fill(color);
        Ok(self)
    }

    pub fn fill_range(
        &mut self,
        color: impl Into<Color>,
        range: impl RangeBounds<usize>,
    ) -> Result<&mut Self> {
        self.buffer_mut()?.fill_range(color, range);
        Ok(self)
    }

    pub fn fill_with<C: Into<Color>>(
        &mut self,
        color_at: impl FnMut(usize) -> C,
    ) -> Result<&mut Self> {
        self.buffer_mut()?.fill_with(color_at);
        Ok(self)
    }

    pub fn fill_range_with<C: Into<Color>>(
        &mut self,
        range: impl RangeBounds<usize>,
        color_at: impl FnMut(usize) -> C,
    ) -> Result<&mut Self> {
        self.buffer_mut()?.fill_range_with(range, color_at);
        Ok(self)
    }

    pub fn replace<I>(&mut self, colors: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Color>,
    {
        self.buffer_mut()?.replace(colors);
        Ok(self)
    }

    /// Copy of the buffer contents
    ///
    /// These colors are not necessarily on display; that depends on whether
    /// [`Strip::show`] was called since they were set.
    pub fn snapshot(&self) -> Result<Vec<Color, MAX_LEDS>> {
        Ok(self.buffer()?.snapshot())
    }

    pub fn reverse(&mut self) -> Result<&mut Self> {
        self.buffer_mut()?.reverse();
        Ok(self)
    }

    pub fn rotate(&mut self, count: isize) -> Result<&mut Self> {
        self.buffer_mut()?.rotate(count);
        Ok(self)
    }

    /// Turn every pixel off in the buffer
    ///
    /// Call [`Strip::show`] to make the change visible.
    pub fn clear(&mut self) -> Result<&mut Self> {
        self.buffer_mut()?.clear();
        Ok(self)
    }

    /// Hand the buffer to the driver
    ///
    /// Either the whole frame reaches the driver or the call fails.
    pub fn show(&mut self) -> Result<&mut Self> {
        let buffer = self.buffer.as_ref().ok_or(Error::Closed)?;
        trace!("[Strip.show] {} pixels", buffer.len());
        self.driver
            .render(buffer.as_slice(), self.config.brightness)
            .map_err(Error::Render)?;
        Ok(self)
    }

    /// Release the buffer and the driver
    ///
    /// The strip is unusable afterwards.
    pub fn close(&mut self) -> Result<()> {
        self.buffer.take().ok_or(Error::Closed)?;
        self.driver.release();
        debug!("[Strip.close] released GPIO {}", self.config.gpio_pin);
        Ok(())
    }

    /// Turn the strip off and release it
    ///
    /// Clears the buffer, shows the cleared frame and closes the strip. The
    /// strip is closed even when showing fails; the first error is returned.
    pub fn shutdown(&mut self) -> Result<()> {
        let shown = self.clear().and_then(|strip| strip.show().map(|_| ()));
        let closed = self.close();
        shown.and(closed)
    }

    fn buffer(&self) -> Result<&PixelBuffer<MAX_LEDS>> {
        self.buffer.as_ref().ok_or(Error::Closed)
    }

    fn buffer_mut(&mut self) -> Result<&mut PixelBuffer<MAX_LEDS>> {
        self.buffer.as_mut().ok_or(Error::Closed)
    }
}

impl<D: OutputDriver, const MAX_LEDS: usize> Drop for Strip<D, MAX_LEDS> {
    fn drop(&mut self) {
        if self.buffer.take().is_some() {
            warn!(
                "[Strip.drop] strip on GPIO {} dropped without close, releasing",
                self.config.gpio_pin
            );
            self.driver.release();
        }
    }
}
