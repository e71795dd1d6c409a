//! Rainbow cycle effect
//!
//! Spreads the full wheel over the strip and rotates it by one wheel position
//! per frame.

use super::EffectImpl;
use crate::color::{Rgb, wheel};

/// Frames in one full rotation of the wheel
pub const RAINBOW_CYCLE_STEPS: usize = 256;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RainbowCycleEffect;

impl RainbowCycleEffect {
    pub const fn new() -> Self {
        Self
    }

    /// Wheel position of pixel `index` on frame `step`
    ///
    /// An empty strip has every position at 0.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn position(index: usize, len: usize, step: usize) -> u8 {
        if len == 0 {
            return 0;
        }
        ((index * RAINBOW_CYCLE_STEPS / len + step) % RAINBOW_CYCLE_STEPS) as u8
    }
}

impl<const N: usize> EffectImpl<N> for RainbowCycleEffect {
    fn frame_count(&self) -> usize {
        RAINBOW_CYCLE_STEPS
    }

    fn render(&self, step: usize, leds: &mut [Rgb; N]) {
        for (index, led) in leds.iter_mut().enumerate() {
            *led = wheel(Self::position(index, N, step));
        }
    }
}
