//! Debug text renderer
//!
//! Draws each frame as a single line of glyphs colored with 24-bit ANSI
//! escape sequences. Every frame starts with a carriage return so the line
//! is redrawn in place.

use core::fmt::Write;

use log::warn;

use crate::OutputDriver;
use crate::brightness::scale_frame;
use crate::color::Color;
use crate::error::DriverError;
use crate::strip::StripConfig;

/// Glyph drawn for each pixel when none is given
pub const DEFAULT_GLYPH: &str = "◉ ";

const RESET: &str = "\x1b[0m";

/// Renders frames as colored text on any [`core::fmt::Write`] sink
///
/// The glyph can be borrowed or owned, anything that is `AsRef<str>`.
#[derive(Debug)]
pub struct TextRenderer<W, G = &'static str> {
    out: W,
    // `None` draws `DEFAULT_GLYPH`
    glyph: Option<G>,
    released: bool,
}

impl<W: Write> TextRenderer<W> {
    pub const fn new(out: W) -> Self {
        Self {
            out,
            glyph: None,
            released: false,
        }
    }
}

impl<W: Write, G: AsRef<str>> TextRenderer<W, G> {
    /// Use a different glyph per pixel
    ///
    /// An empty glyph keeps the default.
    #[must_use]
    pub fn with_glyph<H: AsRef<str>>(self, glyph: H) -> TextRenderer<W, H> {
        TextRenderer {
            out: self.out,
            glyph: Some(glyph).filter(|glyph| !glyph.as_ref().is_empty()),
            released: self.released,
        }
    }

    /// Glyph drawn for each pixel
    pub fn glyph(&self) -> &str {
        self.glyph.as_ref().map_or(DEFAULT_GLYPH, AsRef::as_ref)
    }

    pub const fn output(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, pixels: &[Color], brightness: u8) -> core::fmt::Result {
        let glyph = self.glyph.as_ref().map_or(DEFAULT_GLYPH, AsRef::as_ref);
        self.out.write_char('\r')?;
        for rgb in scale_frame(pixels, brightness) {
            write!(
                self.out,
                "\x1b[38;2;{};{};{}m{glyph}{RESET}",
                rgb.r, rgb.g, rgb.b
            )?;
        }
        Ok(())
    }
}

impl<W: Write, G: AsRef<str>> OutputDriver for TextRenderer<W, G> {
    fn configure(&mut self, _config: &StripConfig) -> Result<(), DriverError> {
        self.released = false;
        Ok(())
    }

    fn render(&mut self, pixels: &[Color], brightness: u8) -> Result<(), DriverError> {
        self.write_frame(pixels, brightness)
            .map_err(|_| DriverError::Write)
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if self.out.write_char('\n').is_err() {
            warn!("[TextRenderer.release] failed to end the frame line");
        }
    }
}
