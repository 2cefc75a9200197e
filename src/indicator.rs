//! Cooperative CO2 indicator loop
//!
//! Everything happens in [`Indicator::step`], which the caller invokes as
//! often as it likes. Each call checks a few elapsed-time guards:
//! - sampling: poll the sensor every `sample_interval`, in any phase
//! - warm-up: advance the breathing animation every `breath_interval`
//! - steady: once `warm_up` has passed, show the color for the last reading
//!
//! Nothing in a step blocks beyond the sensor's own bounded read.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::breathing::Breathing;
use crate::color::{BLACK, CO2_SCALE, ColorScale, GREEN, ORANGE, Rgb};
use crate::intro::{IntroAnimation, IntroStage};
use crate::sensor::{Co2Sensor, Ppm, SensorError};
use crate::time::{Clock, is_due};

/// Time the sensor needs to stabilize after power-up
pub const WARM_UP: Duration = Duration::from_secs(5 * 60);

/// Time between breathing steps
pub const BREATH_INTERVAL: Duration = Duration::from_millis(10);

/// Time between sensor reads
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(5000);

/// Peak brightness of the breathing animation and the intro
pub const MAX_BRIGHT: u8 = 128;

/// Brightness of the steady color bar
pub const STEADY_BRIGHTNESS: u8 = 64;

/// Indicator configuration
#[derive(Debug, Clone, Copy)]
pub struct IndicatorConfig<'a> {
    /// Mapping from ppm to bar color
    pub scale: ColorScale<'a>,
    pub warm_up: Duration,
    pub breath_interval: Duration,
    pub sample_interval: Duration,
    /// Peak of the breathing animation, also used for the intro
    pub max_brightness: u8,
    pub steady_brightness: u8,
    pub breathing_color: Rgb,
    /// Color of the start-up light show, `None` to skip it
    pub intro_color: Option<Rgb>,
}

impl Default for IndicatorConfig<'static> {
    fn default() -> Self {
        Self {
            scale: CO2_SCALE,
            warm_up: WARM_UP,
            breath_interval: BREATH_INTERVAL,
            sample_interval: SAMPLE_INTERVAL,
            max_brightness: MAX_BRIGHT,
            steady_brightness: STEADY_BRIGHTNESS,
            breathing_color: ORANGE,
            intro_color: Some(GREEN),
        }
    }
}

/// Operating phase the indicator was in during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Start-up light show
    Intro,
    /// Sensor warming up, breathing animation
    WarmUp,
    /// Showing the color for the latest reading
    Steady,
}

/// What a single [`Indicator::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub phase: Phase,
    /// Result of the sensor read, if one was due
    pub sampled: Option<Result<Ppm, SensorError>>,
    /// Whether the breathing animation advanced
    pub breathed: bool,
    /// Whether a frame was written to the output
    pub rendered: bool,
}

/// Scheduler context for the CO2 indicator
///
/// Owns the sensor, the output and all loop state. `LEDS` is the number of
/// positions on the bar.
pub struct Indicator<'a, S, O, const LEDS: usize> {
    // External dependencies and configuration
    sensor: S,
    output: O,
    config: IndicatorConfig<'a>,

    // Internal state
    started_at: Instant,
    intro: Option<IntroAnimation>,
    breathing: Breathing,
    last_sample: Option<Instant>,
    last_breath: Option<Instant>,
    measurement: Option<Ppm>,
    steady: bool,
    frame: [Rgb; LEDS],
}

impl<'a, S, O, const LEDS: usize> Indicator<'a, S, O, LEDS>
where
    S: Co2Sensor,
    O: OutputDriver,
{
    /// Set up the indicator and blank the output
    ///
    /// `now` marks power-up: the warm-up period and the intro start here.
    pub fn new(sensor: S, mut output: O, config: IndicatorConfig<'a>, now: Instant) -> Self {
        let frame = [BLACK; LEDS];
        output.write(&frame, 0);

        Self {
            sensor,
            output,
            config,
            started_at: now,
            intro: config.intro_color.map(|color| IntroAnimation::new(color, now)),
            breathing: Breathing::new(config.max_brightness),
            last_sample: None,
            last_breath: None,
            measurement: None,
            steady: false,
            frame,
        }
    }

    /// Run one loop iteration
    pub fn step(&mut self, now: Instant) -> StepReport {
        let sampled = self.sample_if_due(now);

        if self.play_intro(now) {
            return StepReport {
                phase: Phase::Intro,
                sampled,
                breathed: false,
                rendered: true,
            };
        }

        if self.is_steady(now) {
            self.render_steady();
            return StepReport {
                phase: Phase::Steady,
                sampled,
                breathed: false,
                rendered: true,
            };
        }

        let breathed = self.breathe_if_due(now);
        StepReport {
            phase: Phase::WarmUp,
            sampled,
            breathed,
            rendered: breathed,
        }
    }

    /// Step forever using `clock`
    pub fn run<C: Clock>(&mut self, clock: &C) -> ! {
        loop {
            self.step(clock.now());
        }
    }

    /// Latest successful reading
    pub const fn measurement(&self) -> Option<Ppm> {
        self.measurement
    }

    pub const fn breathing(&self) -> &Breathing {
        &self.breathing
    }

    /// Colors of the most recent frame, before global brightness
    pub const fn frame(&self) -> &[Rgb; LEDS] {
        &self.frame
    }

    pub const fn config(&self) -> &IndicatorConfig<'a> {
        &self.config
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    /// Poll the sensor if the sample interval has passed
    ///
    /// A failed read keeps the previous measurement.
    fn sample_if_due(&mut self, now: Instant) -> Option<Result<Ppm, SensorError>> {
        if !is_due(self.last_sample, self.config.sample_interval, now) {
            return None;
        }
        self.last_sample = Some(now);

        let result = self.sensor.request_measurement();
        match &result {
            Ok(ppm) => {
                self.measurement = Some(*ppm);
                #[cfg(feature = "esp32-log")]
                println!("[Indicator.sample] CO2: {} ppm", ppm);
            }
            #[cfg(feature = "esp32-log")]
            Err(error) => println!("[Indicator.sample] error reading CO2 sensor: {}", error),
            #[cfg(not(feature = "esp32-log"))]
            Err(_) => {}
        }
        Some(result)
    }

    /// Render the intro frame for `now`
    ///
    /// Returns `false` once there is no intro left to play.
    fn play_intro(&mut self, now: Instant) -> bool {
        let Some(intro) = &self.intro else {
            return false;
        };

        match intro.render(now, &mut self.frame) {
            IntroStage::Done => {
                self.intro = None;
                self.frame.fill(self.config.breathing_color);
                self.output.write(&self.frame, 0);
                false
            }
            IntroStage::Rise | IntroStage::Hold | IntroStage::Fade => {
                self.output.write(&self.frame, self.config.max_brightness);
                true
            }
        }
    }

    /// Check for the warm-up deadline; once passed it stays passed
    fn is_steady(&mut self, now: Instant) -> bool {
        if !self.steady && now.saturating_duration_since(self.started_at) >= self.config.warm_up {
            self.steady = true;
            #[cfg(feature = "esp32-log")]
            println!("[Indicator.is_steady] warm-up complete");
        }
        self.steady
    }

    fn breathe_if_due(&mut self, now: Instant) -> bool {
        if !is_due(self.last_breath, self.config.breath_interval, now) {
            return false;
        }
        self.last_breath = Some(now);

        let level = self.breathing.advance();
        self.frame.fill(self.config.breathing_color);
        self.output.write(&self.frame, level);
        true
    }

    fn render_steady(&mut self) {
        // Before the first good reading the bar shows the lowest color
        let color = self.config.scale.color_for(self.measurement.unwrap_or(0));
        self.frame.fill(color);
        self.output.write(&self.frame, self.config.steady_brightness);
    }
}
