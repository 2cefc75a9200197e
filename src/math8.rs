use crate::color::Rgb;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Dim a color to `level` (255 keeps it, 0 turns it black)
#[inline]
pub const fn dim(color: Rgb, level: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, level),
        g: scale8(color.g, level),
        b: scale8(color.b, level),
    }
}
