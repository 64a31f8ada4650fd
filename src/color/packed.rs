//! 24-bit packed RGB colors
//!
//! Channels are stored as red `[23:16]`, green `[15:8]` and blue `[7:0]`.
//! Anything above bit 23 is dropped on construction.

use crate::color::Rgb;
use crate::error::{ArgumentError, Error};

const COLOR_MASK: u32 = 0x00FF_FFFF;
const CHANNEL_MASK: u32 = 0xFF;

/// Packed 24-bit RGB color value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(u32);

impl Color {
    /// All channels off
    pub const OFF: Self = Self(0);

    /// Create a color from a raw value, truncated to 24 bits
    pub const fn new(raw: u32) -> Self {
        Self(raw & COLOR_MASK)
    }

    /// Raw `0xRRGGBB` value
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Convert to the `smart-leds` color type
    pub const fn to_rgb(self) -> Rgb {
        Rgb {
            r: self.red(),
            g: self.green(),
            b: self.blue(),
        }
    }
}

/// Pack three channel values into a [`Color`]
///
/// Every channel is truncated to its low 8 bits, so `pack(256, 0, 0)` is
/// the same color as `pack(0, 0, 0)`.
pub const fn pack(red: u32, green: u32, blue: u32) -> Color {
    Color(((red & CHANNEL_MASK) << 16) | ((green & CHANNEL_MASK) << 8) | (blue & CHANNEL_MASK))
}

/// Split a [`Color`] into its `(red, green, blue)` channels
pub const fn unpack(color: Color) -> (u8, u8, u8) {
    (color.red(), color.green(), color.blue())
}

impl From<u32> for Color {
    fn from(raw: u32) -> Self {
        Self::new(raw)
    }
}

impl From<(u32, u32, u32)> for Color {
    fn from((red, green, blue): (u32, u32, u32)) -> Self {
        pack(red, green, blue)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        pack(u32::from(rgb.r), u32::from(rgb.g), u32::from(rgb.b))
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        color.to_rgb()
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// Accepts either a single packed value or three separate channels.
impl TryFrom<&[u32]> for Color {
    type Error = Error;

    fn try_from(components: &[u32]) -> Result<Self, Self::Error> {
        match *components {
            [raw] => Ok(Self::new(raw)),
            [red, green, blue] => Ok(pack(red, green, blue)),
            _ => Err(ArgumentError::ColorArity(components.len()).into()),
        }
    }
}
