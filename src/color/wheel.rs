use super::{Color, pack};

/// Map a position on the 0-255 hue wheel to a color
///
/// The wheel is split into three 85-wide segments, each one a linear blend
/// between two primaries. Position 0 is pure green and 85 pure red.
#[allow(clippy::cast_lossless)]
pub const fn wheel(pos: u8) -> Color {
    let pos = pos as u32;
    if pos < 85 {
        pack(pos * 3, 255 - pos * 3, 0)
    } else if pos < 170 {
        let pos = pos - 85;
        pack(255 - pos * 3, 0, pos * 3)
    } else {
        let pos = pos - 170;
        pack(0, pos * 3, 255 - pos * 3)
    }
}
