//! Color wipe effect
//!
//! Fills the strip one pixel per frame. Pixels past the wipe head are left
//! untouched, so they keep whatever the previous effect drew.

use super::EffectImpl;
use crate::color::Rgb;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorWipeEffect {
    color: Rgb,
}

impl ColorWipeEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl<const N: usize> EffectImpl<N> for ColorWipeEffect {
    fn frame_count(&self) -> usize {
        N
    }

    fn render(&self, step: usize, leds: &mut [Rgb; N]) {
        if N == 0 {
            return;
        }
        let head = step.min(N - 1);
        leds[..=head].fill(self.color);
    }
}
