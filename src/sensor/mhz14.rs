//! MH-Z14 / MH-Z19 NDIR CO2 sensor over UART
//!
//! Every exchange is a 9-byte command followed by a 9-byte response:
//!
//! ```text
//! command:  FF 01 86 00 00 00 00 00 cs
//! response: FF 86 HI LO xx xx xx xx cs
//! ```
//!
//! `cs` is the two's complement of the sum of bytes 1..=7.

use embassy_time::Duration;
use embedded_io::{Read, ReadReady, Write};
use heapless::Vec;

use super::{Co2Sensor, Ppm, SensorError};
use crate::time::{Clock, Deadline};

pub const FRAME_LEN: usize = 9;

/// One command or response frame
pub type Frame = [u8; FRAME_LEN];

pub const START_BYTE: u8 = 0xFF;
pub const SENSOR_NUMBER: u8 = 0x01;
pub const CMD_READ_CO2: u8 = 0x86;

/// Ready-to-send "read CO2 concentration" command
pub const READ_CO2_COMMAND: Frame = command(CMD_READ_CO2);

/// How long to wait for a complete response
pub const RESPONSE_TIMEOUT: Duration = Duration::from_millis(1000);

/// Checksum over bytes 1..=7 of a frame
pub const fn checksum(frame: &Frame) -> u8 {
    let mut sum: u8 = 0;
    let mut index = 1;
    while index < FRAME_LEN - 1 {
        sum = sum.wrapping_add(frame[index]);
        index += 1;
    }
    sum.wrapping_neg()
}

/// Build a command frame without arguments
pub const fn command(cmd: u8) -> Frame {
    let mut frame = [START_BYTE, SENSOR_NUMBER, cmd, 0, 0, 0, 0, 0, 0];
    frame[FRAME_LEN - 1] = checksum(&frame);
    frame
}

/// Decode a "read CO2" response
pub fn parse_response(frame: &Frame) -> Result<Ppm, SensorError> {
    if frame[0] != START_BYTE || frame[1] != CMD_READ_CO2 {
        return Err(SensorError::InvalidHeader {
            start: frame[0],
            command: frame[1],
        });
    }

    let expected = checksum(frame);
    let received = frame[FRAME_LEN - 1];
    if expected != received {
        return Err(SensorError::ChecksumMismatch { expected, received });
    }

    Ok(u16::from_be_bytes([frame[2], frame[3]]))
}

fn serial<E: embedded_io::Error>(error: E) -> SensorError {
    SensorError::Serial(error.kind())
}

/// MH-Z14 driver
///
/// Generic over any byte port that can tell whether input is pending, so a
/// missing sensor ends in [`SensorError::Timeout`] instead of a blocked read.
pub struct Mhz14<P, C> {
    port: P,
    clock: C,
    timeout: Duration,
}

impl<P, C> Mhz14<P, C>
where
    P: Read + Write + ReadReady,
    C: Clock,
{
    /// Create a driver with the default [`RESPONSE_TIMEOUT`]
    pub const fn new(port: P, clock: C) -> Self {
        Self {
            port,
            clock,
            timeout: RESPONSE_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Give back the port and clock
    pub fn release(self) -> (P, C) {
        (self.port, self.clock)
    }

    /// Read the current CO2 concentration
    pub fn read_co2(&mut self) -> Result<Ppm, SensorError> {
        let response = self.exchange(&READ_CO2_COMMAND)?;
        parse_response(&response)
    }

    /// Send a command and collect one full response frame
    fn exchange(&mut self, command: &Frame) -> Result<Frame, SensorError> {
        self.discard_pending()?;

        self.port.write_all(command).map_err(serial)?;
        self.port.flush().map_err(serial)?;

        let port = &mut self.port;
        let mut received: Vec<u8, FRAME_LEN> = Vec::new();
        let deadline = Deadline::new(self.clock.now(), self.timeout);

        let response = deadline.poll(&self.clock, || -> Result<Option<Frame>, SensorError> {
            if !port.read_ready().map_err(serial)? {
                return Ok(None);
            }
            let mut byte = [0u8; 1];
            if port.read(&mut byte).map_err(serial)? == 1 {
                // The frame is taken as soon as it is full, so this never overflows
                let _ = received.push(byte[0]);
            }
            if received.is_full() {
                return Ok(received.as_slice().try_into().ok());
            }
            Ok(None)
        })?;

        response.ok_or(SensorError::Timeout)
    }

    /// Drop stale bytes left in the receive buffer
    fn discard_pending(&mut self) -> Result<(), SensorError> {
        let port = &mut self.port;
        let mut scratch = [0u8; FRAME_LEN];
        let deadline = Deadline::new(self.clock.now(), self.timeout);

        let drained = deadline.poll(&self.clock, || -> Result<Option<()>, SensorError> {
            if !port.read_ready().map_err(serial)? {
                return Ok(Some(()));
            }
            if port.read(&mut scratch).map_err(serial)? == 0 {
                return Ok(Some(()));
            }
            Ok(None)
        })?;

        drained.ok_or(SensorError::Timeout)
    }
}

impl<P, C> Co2Sensor for Mhz14<P, C>
where
    P: Read + Write + ReadReady,
    C: Clock,
{
    fn request_measurement(&mut self) -> Result<Ppm, SensorError> {
        self.read_co2()
    }
}
