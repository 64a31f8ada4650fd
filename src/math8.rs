/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// The factor is biased by one so that 255 maps a channel onto itself
/// and 0 still lets `value >> 8` through, which is always 0 for a `u8`.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}
