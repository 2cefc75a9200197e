//! Adapter from [`OutputDriver`] to `smart-leds` strip drivers

#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::{SmartLedsWrite, brightness};

use crate::OutputDriver;
use crate::color::Rgb;

/// Drives any `smart-leds` writer (WS2812 over RMT, SPI, ...)
///
/// Global brightness is applied while streaming the frame out, so the
/// caller's frame buffer is never modified.
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn write(&mut self, colors: &[Rgb], level: u8) {
        let result = self.writer.write(brightness(colors.iter().copied(), level));
        #[cfg(feature = "esp32-log")]
        if result.is_err() {
            println!("[SmartLedsOutput.write] failed to write {} LEDs", colors.len());
        }
        #[cfg(not(feature = "esp32-log"))]
        let _ = result;
    }
}
