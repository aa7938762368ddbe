//! The animation state machine.
//!
//! [`AnimationState`] owns everything the dance needs between two ticks. It
//! is mutated by the driver's tick and by the three user controls, and
//! exposes a [`RenderFrame`] snapshot for whatever draws the figure.

use std::time::Duration;

use serde::{Serialize, Serializer};
use tracing::{debug, info};

use super::easing::{TimingCurve, TIMING_CURVES};
use super::exit::{ExitDetector, Viewport};
use super::moves::{DanceMode, NUM_MOVES};
use super::stage::{BodyPose, StageController};
use crate::{MoonwalkConfig, MoonwalkError, Result};

/// Everything that changes while the figure dances
#[derive(Debug, Clone)]
pub struct AnimationState {
    /// Step of the current dance move shown on the next tick
    index: usize,
    /// Selects the timing curve, advanced together with `index`
    easing_stage: usize,
    /// Curve of the slide started by the last tick
    active_curve: TimingCurve,
    running: bool,
    tick_interval: Duration,
    dance_mode: DanceMode,
    stage: StageController,
    /// Offset on screen when the last step started; exit checks measure this
    shown_offset: i32,
    /// Slide duration of the last position change
    transition_duration: Duration,
    /// Slide duration applied on every tick
    step_transition: Duration,
    exit: ExitDetector,
}

/// Snapshot handed to the presentation layer on every draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub pose: BodyPose,
    pub cumulative_offset: i32,
    #[serde(serialize_with = "serialize_millis")]
    pub transition_duration: Duration,
    pub easing_curve: TimingCurve,
    pub dance_mode: DanceMode,
    pub running: bool,
    #[serde(serialize_with = "serialize_millis")]
    pub tick_interval: Duration,
}

fn serialize_millis<S: Serializer>(d: &Duration, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(&MoonwalkConfig::default())
    }
}

impl AnimationState {
    pub fn new(config: &MoonwalkConfig) -> Self {
        Self {
            index: 1,
            easing_stage: 0,
            active_curve: TIMING_CURVES[0],
            running: false,
            tick_interval: config.delay,
            dance_mode: config.dance,
            stage: StageController::new(),
            shown_offset: 0,
            transition_duration: config.transition,
            step_transition: config.transition,
            exit: ExitDetector::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn easing_stage(&self) -> usize {
        self.easing_stage
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn dance_mode(&self) -> DanceMode {
        self.dance_mode
    }

    pub fn pose(&self) -> &BodyPose {
        self.stage.pose()
    }

    pub fn cumulative_offset(&self) -> i32 {
        self.stage.cumulative_offset()
    }

    pub fn transition_duration(&self) -> Duration {
        self.transition_duration
    }

    pub fn easing_curve(&self) -> TimingCurve {
        self.active_curve
    }

    /// Advance the dance by one step.
    ///
    /// The step shown and its slide curve are taken at the current index and
    /// easing stage; both move on afterwards.
    pub fn tick(&mut self) {
        self.transition_duration = self.step_transition;
        self.active_curve = TIMING_CURVES[self.easing_stage];
        self.shown_offset = self.stage.cumulative_offset();
        self.stage.apply_step(self.dance_mode.dance_move(), self.index);
        self.easing_stage = (self.easing_stage + 1) % NUM_MOVES;
        self.index = (self.index + 1) % NUM_MOVES;
        debug!(
            index = self.index,
            easing_stage = self.easing_stage,
            offset = self.stage.cumulative_offset(),
            "tick"
        );
    }

    /// Measure the figure and loop it back if it left the stage.
    ///
    /// The figure is measured where the last step's slide started, so it
    /// walks fully off before snapping back on the following tick.
    /// Returns `true` when the offset was reset.
    pub fn observe_viewport(&mut self, viewport: &impl Viewport) -> bool {
        let right_edge = viewport.right_edge(self.shown_offset);
        if !self.exit.observe(right_edge) {
            return false;
        }
        info!(right_edge, "Figure left the stage, looping back");
        self.transition_duration = Duration::ZERO;
        self.stage.reset_offset();
        self.shown_offset = 0;
        true
    }

    /// Flip between stopped and running. Returns the new running flag.
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        info!("Dance {}", if self.running { "started" } else { "stopped" });
        self.running
    }

    /// Switch to the other preset. Index and offset carry over.
    pub fn toggle_dance(&mut self) -> DanceMode {
        self.dance_mode = self.dance_mode.toggle();
        info!("Dance style: {}", self.dance_mode.label());
        self.dance_mode
    }

    /// Set the tick delay from raw user text.
    ///
    /// Anything that is not a positive integer number of milliseconds is
    /// rejected and the previous delay stays in effect.
    pub fn set_delay(&mut self, raw: &str) -> Result<Duration> {
        let delay = parse_delay(raw)?;
        self.tick_interval = delay;
        info!("Tick delay set to {}ms", delay.as_millis());
        Ok(delay)
    }

    pub fn render_frame(&self) -> RenderFrame {
        RenderFrame {
            pose: *self.stage.pose(),
            cumulative_offset: self.stage.cumulative_offset(),
            transition_duration: self.transition_duration,
            easing_curve: self.easing_curve(),
            dance_mode: self.dance_mode,
            running: self.running,
            tick_interval: self.tick_interval,
        }
    }
}

/// Parse a delay in milliseconds. Rejects empty, non-numeric and zero input.
pub fn parse_delay(raw: &str) -> Result<Duration> {
    let trimmed = raw.trim();
    match trimmed.parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(MoonwalkError::InvalidDelay(trimmed.to_string())),
    }
}
