//! Theater chase effect
//!
//! Lights every third pixel and shifts the pattern forward each frame.

use super::EffectImpl;
use crate::color::Rgb;

const CHASE_SPACING: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TheaterChaseEffect {
    color: Rgb,
    alternate: Rgb,
}

impl TheaterChaseEffect {
    pub const fn new(color: Rgb, alternate: Rgb) -> Self {
        Self { color, alternate }
    }
}

impl<const N: usize> EffectImpl<N> for TheaterChaseEffect {
    fn frame_count(&self) -> usize {
        CHASE_SPACING
    }

    fn render(&self, step: usize, leds: &mut [Rgb; N]) {
        let offset = step % CHASE_SPACING;
        for (index, led) in leds.iter_mut().enumerate() {
            *led = if (index + offset) % CHASE_SPACING == 0 {
                self.color
            } else {
                self.alternate
            };
        }
    }
}
