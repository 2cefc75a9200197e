//! Start-up light show
//!
//! Plays once while the sensor heats up:
//! 1. Rise: LEDs fade in one after another, starting at position 0
//! 2. Hold: the whole strip stays lit
//! 3. Fade: the whole strip fades out together
//!
//! The animation keeps no per-frame state; every frame is derived from the
//! time elapsed since it started, so `render` can be called at any rate.

use embassy_time::{Duration, Instant};

use crate::color::{BLACK, Rgb};
use crate::math8::dim;

/// Duration of one animation frame
pub const FRAME_INTERVAL: Duration = Duration::from_millis(15);

/// Frames between the start of one LED's fade-in and the next
pub const RISE_FRAMES_PER_LED: u64 = 85;

/// Level gained per frame while an LED fades in
pub const RISE_LEVEL_STEP: u64 = 3;

/// How long the fully lit strip is held
pub const HOLD_DURATION: Duration = Duration::from_millis(2000);

/// Level lost per frame during the final fade
pub const FADE_LEVEL_STEP: u64 = 2;

/// Frames in the final fade: levels 255, 253, .., 1
const FADE_FRAMES: u64 = 255 / FADE_LEVEL_STEP + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroStage {
    Rise,
    Hold,
    Fade,
    Done,
}

#[derive(Debug, Clone)]
pub struct IntroAnimation {
    color: Rgb,
    started_at: Instant,
}

impl IntroAnimation {
    pub const fn new(color: Rgb, started_at: Instant) -> Self {
        Self { color, started_at }
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Total run time for a strip of `led_count` LEDs
    pub fn duration(led_count: usize) -> Duration {
        let frame_ms = FRAME_INTERVAL.as_millis();
        let rise = rise_frames(led_count) * frame_ms;
        Duration::from_millis(rise + HOLD_DURATION.as_millis() + FADE_FRAMES * frame_ms)
    }

    /// Render the frame for `now` into `leds`
    ///
    /// Returns the stage that was rendered. `leds` is left untouched once the
    /// animation is [`IntroStage::Done`].
    #[allow(clippy::cast_possible_truncation)]
    pub fn render(&self, now: Instant, leds: &mut [Rgb]) -> IntroStage {
        let frame_ms = FRAME_INTERVAL.as_millis();
        let elapsed_ms = now.saturating_duration_since(self.started_at).as_millis();

        let rise_ms = rise_frames(leds.len()) * frame_ms;
        if elapsed_ms < rise_ms {
            let frame = elapsed_ms / frame_ms;
            for (position, led) in leds.iter_mut().enumerate() {
                let start = position as u64 * RISE_FRAMES_PER_LED;
                *led = if frame >= start {
                    let level = ((frame - start) * RISE_LEVEL_STEP).min(255) as u8;
                    dim(self.color, level)
                } else {
                    BLACK
                };
            }
            return IntroStage::Rise;
        }

        let fade_start_ms = rise_ms + HOLD_DURATION.as_millis();
        if elapsed_ms < fade_start_ms {
            leds.fill(self.color);
            return IntroStage::Hold;
        }

        let fade_frame = (elapsed_ms - fade_start_ms) / frame_ms;
        if fade_frame < FADE_FRAMES {
            let level = (255 - fade_frame * FADE_LEVEL_STEP) as u8;
            leds.fill(dim(self.color, level));
            return IntroStage::Fade;
        }

        IntroStage::Done
    }
}

fn rise_frames(led_count: usize) -> u64 {
    led_count as u64 * RISE_FRAMES_PER_LED
}
