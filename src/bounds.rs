use crate::error::{ArgumentError, Error, Result};

/// Pixels lit by one phase of a chase pattern
///
/// Walks the strip in steps of `spacing` and yields `(base, index)` pairs
/// where `index = base + phase`. Indices that land past the last pixel are
/// skipped rather than wrapped, so strips whose length is not a multiple of
/// `spacing` never write outside `0..length`.
pub fn chase_positions(
    length: usize,
    spacing: usize,
    phase: usize,
) -> impl Iterator<Item = (usize, usize)> {
    (0..length)
        .step_by(spacing.max(1))
        .map(move |base| (base, base + phase))
        .filter(move |&(_, index)| index < length)
}

/// Reject a chase spacing of zero
pub const fn check_spacing(spacing: usize) -> Result<usize> {
    if spacing == 0 {
        return Err(Error::InvalidArgument(ArgumentError::ZeroSpacing));
    }
    Ok(spacing)
}
