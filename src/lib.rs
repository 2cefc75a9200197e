#![no_std]

pub mod breathing;
pub mod color;
pub mod indicator;
pub mod intro;
pub mod math8;
pub mod output;
pub mod segment_clock;
pub mod sensor;
pub mod time;

pub use breathing::{Breathing, Direction};
pub use color::{Breakpoint, ColorScale, Rgb, color_for};
pub use indicator::{Indicator, IndicatorConfig, Phase, StepReport};
pub use intro::{IntroAnimation, IntroStage};
pub use output::SmartLedsOutput;
pub use sensor::{Co2Sensor, Mhz14, Ppm, SensorError};
pub use time::{Clock, Deadline, SystemClock};

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The indicator is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip at a global brightness (0-255)
    ///
    /// Renders immediately; the last write wins.
    fn write(&mut self, colors: &[Rgb], brightness: u8);
}
