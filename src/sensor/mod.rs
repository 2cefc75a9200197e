//! CO2 sensor interface
//!
//! The indicator only needs "give me a reading or tell me why not".
//! [`mhz14`] implements that over a UART.

pub mod mhz14;

use core::fmt;

pub use mhz14::Mhz14;

/// CO2 concentration in parts per million
pub type Ppm = u16;

/// Reasons a measurement request failed
///
/// None of these are fatal; callers keep their last good reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// No complete response arrived in time
    Timeout,
    /// Response checksum does not match its payload
    ChecksumMismatch { expected: u8, received: u8 },
    /// Response does not start with the expected start byte and command
    InvalidHeader { start: u8, command: u8 },
    /// The serial port reported an error
    Serial(embedded_io::ErrorKind),
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => f.write_str("timeout waiting for sensor response"),
            Self::ChecksumMismatch { expected, received } => write!(
                f,
                "checksum error (expected {expected:#04x}, received {received:#04x})"
            ),
            Self::InvalidHeader { start, command } => {
                write!(f, "invalid response header {start:#04x} {command:#04x}")
            }
            Self::Serial(kind) => write!(f, "serial error: {kind:?}"),
        }
    }
}

impl core::error::Error for SensorError {}

/// Anything that can be asked for a CO2 reading
pub trait Co2Sensor {
    /// Request a fresh reading
    ///
    /// Must return within a bounded time, reporting [`SensorError::Timeout`]
    /// rather than waiting forever.
    fn request_measurement(&mut self) -> Result<Ppm, SensorError>;
}
