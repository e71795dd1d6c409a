//! Sparkle effect
//!
//! Fills the strip with the alternate color, then lights one random pixel at
//! a time with the sparkle color and fades it back to the alternate color.

use rand_core::{RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;

use super::EffectImpl;
use crate::color::{Rgb, blend_colors};

const DEFAULT_COUNT: u16 = 20;
const DEFAULT_FADE_STEPS: u16 = 10;
const DEFAULT_SEED: u64 = 0x5EED_1ED5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SparkleEffect {
    color: Rgb,
    alternate: Rgb,
    count: u16,
    fade_steps: u16,
    seed: u64,
}

impl SparkleEffect {
    pub const fn new(color: Rgb, alternate: Rgb) -> Self {
        Self {
            color,
            alternate,
            count: DEFAULT_COUNT,
            fade_steps: DEFAULT_FADE_STEPS,
            seed: DEFAULT_SEED,
        }
    }

    /// Set the number of sparkles in one run
    #[must_use]
    pub const fn with_count(mut self, count: u16) -> Self {
        self.count = count;
        self
    }

    /// Set the number of frames a sparkle takes to fade out
    #[must_use]
    pub const fn with_fade_steps(mut self, fade_steps: u16) -> Self {
        self.fade_steps = fade_steps;
        self
    }

    /// Seed the pixel picker; equal seeds give equal runs
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn frames_per_sparkle(&self) -> usize {
        usize::from(self.fade_steps) + 1
    }

    /// Pixel lit by sparkle number `sparkle` on a strip of `len` pixels
    pub fn pixel(&self, sparkle: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let mut rng = XorShiftRng::seed_from_u64(self.seed.wrapping_add(sparkle as u64));
        rng.next_u32() as usize % len
    }

    /// Color of the sparkling pixel `phase` frames after it was lit
    ///
    /// Phase 0 is the sparkle color, phase `fade_steps` is the alternate color.
    pub fn faded(&self, phase: usize) -> Rgb {
        let phase = u32::try_from(phase).unwrap_or(u32::MAX);
        blend_colors(self.color, self.alternate, phase, u32::from(self.fade_steps))
    }
}

impl<const N: usize> EffectImpl<N> for SparkleEffect {
    fn frame_count(&self) -> usize {
        usize::from(self.count) * self.frames_per_sparkle()
    }

    fn render(&self, step: usize, leds: &mut [Rgb; N]) {
        if N == 0 {
            return;
        }
        if step == 0 {
            leds.fill(self.alternate);
        }
        let sparkle = step / self.frames_per_sparkle();
        let phase = step % self.frames_per_sparkle();
        leds[self.pixel(sparkle, N)] = self.faded(phase);
    }
}
