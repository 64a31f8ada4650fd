//! Output drivers
//!
//! - [`SmartLedsDriver`] forwards frames to any `smart-leds` writer, which
//!   is how real WS281x hardware is reached.
//! - [`TextRenderer`] draws frames as colored glyphs on a text stream, for
//!   running without hardware.
//!
//! The driver is chosen by the caller when the strip is built.

mod smartled;
mod text;

pub use smartled::SmartLedsDriver;
pub use text::{DEFAULT_GLYPH, TextRenderer};
