//! Breathing effect
//!
//! Fades the whole strip from black up to the color and back down.

use super::EffectImpl;
use crate::color::{Rgb, scale_color};

const DEFAULT_STEPS: u16 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreathingEffect {
    color: Rgb,
    steps: u16,
}

impl BreathingEffect {
    pub const fn new(color: Rgb) -> Self {
        Self {
            color,
            steps: DEFAULT_STEPS,
        }
    }

    /// Set the number of frames per half breath
    #[must_use]
    pub const fn with_steps(mut self, steps: u16) -> Self {
        self.steps = steps;
        self
    }

    /// Color of frame `step`
    pub fn level(&self, step: usize) -> Rgb {
        let steps = u32::from(self.steps);
        let step = u32::try_from(step).unwrap_or(u32::MAX);
        let numerator = if step < steps {
            step
        } else {
            steps.saturating_sub(step - steps)
        };
        scale_color(self.color, numerator, steps)
    }
}

impl<const N: usize> EffectImpl<N> for BreathingEffect {
    fn frame_count(&self) -> usize {
        usize::from(self.steps) * 2
    }

    fn render(&self, step: usize, leds: &mut [Rgb; N]) {
        leds.fill(self.level(step));
    }
}
