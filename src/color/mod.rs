mod scale;

use smart_leds::RGB8;

pub use scale::{Breakpoint, CO2_BREAKPOINTS, CO2_SCALE, ColorScale, ScaleError, color_for};

pub type Rgb = RGB8;

pub const BLACK: Rgb = rgb_from_u32(0x00_00_00);
pub const GREEN: Rgb = rgb_from_u32(0x00_80_00);
pub const YELLOW: Rgb = rgb_from_u32(0xFF_FF_00);
pub const ORANGE: Rgb = rgb_from_u32(0xFF_A5_00);
pub const RED: Rgb = rgb_from_u32(0xFF_00_00);
pub const PURPLE: Rgb = rgb_from_u32(0x80_00_80);

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
