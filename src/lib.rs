#![no_std]

pub mod animation;
pub mod bounds;
pub mod brightness;
pub mod buffer;
pub mod color;
pub mod driver;
pub mod error;
pub mod math8;
pub mod strip;

pub use animation::{
    Animation, AnimationId, AnimationSlot, ColorWipe, Interruptible, PixelSink, Rainbow,
    RainbowCycle, TheaterChase, TheaterChaseRainbow,
};
pub use buffer::PixelBuffer;
pub use color::{Color, Rgb, pack, unpack, wheel};
pub use driver::{SmartLedsDriver, TextRenderer};
pub use error::{ArgumentError, ConfigError, DriverError, Error, Result};
pub use strip::{Strip, StripConfig};

pub use embassy_time::Duration;

/// Abstract LED output driver trait
///
/// Implement this trait to support different hardware platforms or
/// simulated outputs. The driver value itself is the device handle: it is
/// configured once when a [`Strip`] is created, receives every shown frame
/// and is released when the strip is closed or dropped.
pub trait OutputDriver {
    /// Claim the output for the given configuration
    fn configure(&mut self, config: &StripConfig) -> core::result::Result<(), DriverError>;

    /// Transmit one frame
    ///
    /// `pixels` holds full, unscaled colors; the driver applies `brightness`
    /// on the way out. May block until the frame is physically sent.
    fn render(&mut self, pixels: &[Color], brightness: u8) -> core::result::Result<(), DriverError>;

    /// Free the output. Calling it more than once must be harmless.
    fn release(&mut self);
}
