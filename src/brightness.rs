//! Display-time brightness scaling
//!
//! Scaling happens on the way out to a driver. Colors stored in the pixel
//! buffer always keep their full, unscaled values.

use crate::color::{Color, Rgb};
use crate::math8::scale8;

/// Scale every channel of `color` by `brightness`
///
/// Each channel becomes `(channel * (brightness + 1)) >> 8`.
pub const fn scale(color: Color, brightness: u8) -> Rgb {
    Rgb {
        r: scale8(color.red(), brightness),
        g: scale8(color.green(), brightness),
        b: scale8(color.blue(), brightness),
    }
}

/// Lazily scale a whole frame for a driver
pub fn scale_frame(
    pixels: &[Color],
    brightness: u8,
) -> impl ExactSizeIterator<Item = Rgb> + '_ {
    pixels.iter().map(move |color| scale(*color, brightness))
}
