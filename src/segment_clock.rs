//! Four-digit seven-segment clock face
//!
//! Decides what a HH:MM shift-register display shows: the time as one
//! four-digit number, a dot blinking once per second and night dimming.
//! Segment encoding and the time source belong to the caller.

/// Display PWM level between 20:00 and 07:59
pub const NIGHT_BRIGHTNESS: u8 = 3;

/// Display PWM level during the day
pub const DAY_BRIGHTNESS: u8 = 200;

/// Wall-clock time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Contents of one display refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockFrame {
    /// Four digits, `hour * 100 + minute`
    pub value: u16,
    /// Separator dot, lit on odd seconds
    pub dot: bool,
    pub brightness: u8,
}

/// Opaque four-digit display
pub trait SegmentDisplay {
    /// Show a four-digit number, optionally with the separator dot
    fn show(&mut self, value: u16, dot: bool);

    /// Set the display PWM level
    fn set_brightness(&mut self, level: u8);
}

/// Brightness for the given hour
pub const fn brightness_for_hour(hour: u8) -> u8 {
    match hour {
        8..=19 => DAY_BRIGHTNESS,
        _ => NIGHT_BRIGHTNESS,
    }
}

impl ClockFrame {
    pub fn from_time(time: TimeOfDay) -> Self {
        Self {
            value: u16::from(time.hour) * 100 + u16::from(time.minute),
            dot: time.second % 2 == 1,
            brightness: brightness_for_hour(time.hour),
        }
    }
}

/// Drives a [`SegmentDisplay`] from the time of day
pub struct ClockFace<D> {
    display: D,
}

impl<D: SegmentDisplay> ClockFace<D> {
    pub const fn new(display: D) -> Self {
        Self { display }
    }

    /// Push the frame for `time` to the display
    pub fn refresh(&mut self, time: TimeOfDay) -> ClockFrame {
        let frame = ClockFrame::from_time(time);
        self.display.set_brightness(frame.brightness);
        self.display.show(frame.value, frame.dot);
        frame
    }

    pub const fn display(&self) -> &D {
        &self.display
    }

    pub fn into_inner(self) -> D {
        self.display
    }
}
