//! Error types shared by the buffer, strip and drivers.

use thiserror::Error;

/// Result alias that carries the crate [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors surfaced by strip, buffer and animation operations.
///
/// None of them are retried internally: a bad index or a rejected
/// configuration is a programming error, not a transient fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Index outside of `0..length`
    #[error("index {index} is outside of LED range: 0..{length}")]
    OutOfRange { index: usize, length: usize },
    /// Malformed argument to a color-setting or animation call
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),
    /// The strip could not be configured
    #[error("strip could not be configured: {0}")]
    Configuration(#[from] ConfigError),
    /// The driver failed to transmit a frame
    #[error("strip failed to render: {0}")]
    Render(DriverError),
    /// Operation attempted after `close`
    #[error("strip is closed")]
    Closed,
    /// The animation was stopped before it finished
    #[error("animation interrupted")]
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// A color was given with a component count other than 1 or 3
    #[error("expecting either 1 or 3 color components: {0}")]
    ColorArity(usize),
    /// Chase spacing must be at least one pixel
    #[error("chase spacing cannot be zero")]
    ZeroSpacing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Requested length exceeds the buffer capacity
    #[error("{length} LEDs requested, capacity is {capacity}")]
    TooManyLeds { length: usize, capacity: usize },
    /// The output driver rejected the configuration
    #[error("driver rejected configuration: {0}")]
    Driver(DriverError),
}

/// Errors reported by an [`OutputDriver`](crate::OutputDriver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DriverError {
    /// The driver cannot honour a configuration option
    #[error("unsupported option: {0}")]
    Unsupported(&'static str),
    /// Raw status code reported by a native driver
    #[error("driver status {0}")]
    Status(i32),
    /// Writing to the underlying device failed
    #[error("write failed")]
    Write,
}
