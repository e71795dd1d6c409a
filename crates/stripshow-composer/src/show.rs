//! Show sequence
//!
//! A show is an ordered list of effects, each paired with the delay that
//! follows every one of its frames.

use embassy_time::Duration;
use heapless::Vec;
use log::warn;

use crate::{
    color::{BLUE, GREEN, ORANGE},
    effect::EffectSlot,
};

/// Maximum number of steps in a show
pub const SHOW_CAPACITY: usize = 8;

pub const WIPE_FRAME_DELAY: Duration = Duration::from_millis(100);
pub const RAINBOW_FRAME_DELAY: Duration = Duration::from_millis(10);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowStep {
    pub effect: EffectSlot,
    pub frame_delay: Duration,
}

impl ShowStep {
    pub const fn new(effect: EffectSlot, frame_delay: Duration) -> Self {
        Self {
            effect,
            frame_delay,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Show {
    steps: Vec<ShowStep, SHOW_CAPACITY>,
}

impl Show {
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Orange, green and blue wipes followed by a rainbow cycle
    pub fn default_cycle() -> Self {
        Self::new()
            .with_step(ShowStep::new(EffectSlot::color_wipe(ORANGE), WIPE_FRAME_DELAY))
            .with_step(ShowStep::new(EffectSlot::color_wipe(GREEN), WIPE_FRAME_DELAY))
            .with_step(ShowStep::new(EffectSlot::color_wipe(BLUE), WIPE_FRAME_DELAY))
            .with_step(ShowStep::new(EffectSlot::rainbow_cycle(), RAINBOW_FRAME_DELAY))
    }

    /// Append a step, returning it back when the show is full
    pub fn push(&mut self, step: ShowStep) -> Result<(), ShowStep> {
        self.steps.push(step)
    }

    /// Append a step, dropping it with a warning when the show is full
    #[must_use]
    pub fn with_step(mut self, step: ShowStep) -> Self {
        if let Err(step) = self.push(step) {
            warn!("show: capacity reached, dropping {} step", step.effect.name());
        }
        self
    }

    /// Replace every frame delay, keeping the effects
    #[must_use]
    pub fn with_frame_delay(mut self, frame_delay: Duration) -> Self {
        for step in &mut self.steps {
            step.frame_delay = frame_delay;
        }
        self
    }

    pub fn steps(&self) -> &[ShowStep] {
        &self.steps
    }

    /// Total frames in one cycle for a strip of `N` pixels
    pub fn frame_count<const N: usize>(&self) -> usize {
        self.steps.iter().map(|step| step.effect.frame_count::<N>()).sum()
    }

    /// Nominal duration of one cycle, ignoring render and driver time
    pub fn duration<const N: usize>(&self) -> Duration {
        self.steps
            .iter()
            .map(|step| step.frame_delay * step.effect.frame_count::<N>() as u32)
            .fold(Duration::from_ticks(0), |total, step| total + step)
    }
}
