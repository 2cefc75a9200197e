//! Piecewise-linear color scale
//!
//! Maps a scalar reading onto a color by interpolating between the two
//! breakpoints that surround it. Readings outside the table are clamped to the
//! first or last color.

use core::fmt;

use super::{GREEN, ORANGE, PURPLE, RED, Rgb, YELLOW};

/// A single control point of a [`ColorScale`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub threshold: u16,
    pub color: Rgb,
}

impl Breakpoint {
    pub const fn new(threshold: u16, color: Rgb) -> Self {
        Self { threshold, color }
    }
}

/// Reasons a breakpoint slice cannot be used as a scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleError {
    /// Fewer than two breakpoints were given
    TooFewBreakpoints,
    /// The threshold at `index` is not greater than the one before it
    NotIncreasing { index: usize },
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewBreakpoints => f.write_str("color scale needs at least two breakpoints"),
            Self::NotIncreasing { index } => {
                write!(f, "breakpoint {index} does not increase the threshold")
            }
        }
    }
}

impl core::error::Error for ScaleError {}

/// Validated, immutable breakpoint table
///
/// Holds at least two breakpoints with strictly increasing thresholds.
#[derive(Debug, Clone, Copy)]
pub struct ColorScale<'a> {
    points: &'a [Breakpoint],
}

impl<'a> ColorScale<'a> {
    /// Validate `points` and wrap them into a scale
    pub const fn new(points: &'a [Breakpoint]) -> Result<Self, ScaleError> {
        if points.len() < 2 {
            return Err(ScaleError::TooFewBreakpoints);
        }

        let mut index = 1;
        while index < points.len() {
            if points[index].threshold <= points[index - 1].threshold {
                return Err(ScaleError::NotIncreasing { index });
            }
            index += 1;
        }

        Ok(Self { points })
    }

    pub const fn points(&self) -> &'a [Breakpoint] {
        self.points
    }

    /// Lowest breakpoint
    pub const fn first(&self) -> Breakpoint {
        self.points[0]
    }

    /// Highest breakpoint
    pub const fn last(&self) -> Breakpoint {
        self.points[self.points.len() - 1]
    }

    /// Color for `value`, see [`color_for`]
    pub fn color_for(&self, value: u16) -> Rgb {
        color_for(value, self)
    }
}

/// Interpolate the color for `value` on `scale`
///
/// Values at or below the first threshold give the first color, values at or
/// above the last threshold give the last color. In between, each channel is
/// interpolated linearly and truncated toward zero.
pub fn color_for(value: u16, scale: &ColorScale<'_>) -> Rgb {
    let first = scale.first();
    if value <= first.threshold {
        return first.color;
    }
    let last = scale.last();
    if value >= last.threshold {
        return last.color;
    }

    // First breakpoint strictly above the value; clamping above keeps it in 1..len
    let upper = scale.points.partition_point(|point| point.threshold <= value);
    let low = scale.points[upper - 1];
    let high = scale.points[upper];

    let t = f32::from(value - low.threshold) / f32::from(high.threshold - low.threshold);

    Rgb {
        r: lerp_channel(low.color.r, high.color.r, t),
        g: lerp_channel(low.color.g, high.color.g, t),
        b: lerp_channel(low.color.b, high.color.b, t),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    let from = f32::from(from);
    let to = f32::from(to);
    libm::truncf(from + (to - from) * t) as u8
}

/// Indoor CO2 levels in ppm, from fresh air to stuffy
pub const CO2_BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint::new(400, GREEN),
    Breakpoint::new(800, YELLOW),
    Breakpoint::new(1200, ORANGE),
    Breakpoint::new(2000, RED),
    Breakpoint::new(3000, PURPLE),
];

pub const CO2_SCALE: ColorScale<'static> = match ColorScale::new(CO2_BREAKPOINTS) {
    Ok(scale) => scale,
    Err(_) => panic!("CO2 breakpoints must be strictly increasing"),
};
