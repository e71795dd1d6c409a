//! Static color fill effect
//!
//! Fills all LEDs with a single solid color.

use super::EffectImpl;
use crate::color::Rgb;

/// Static color effect - fills all LEDs with one color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaticColorEffect {
    color: Rgb,
}

impl Default for StaticColorEffect {
    fn default() -> Self {
        Self {
            color: Rgb { r: 255, g: 255, b: 255 },
        }
    }
}

impl StaticColorEffect {
    /// Create a new static color effect
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }

    /// Create from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(Rgb { r, g, b })
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }
}

impl<const N: usize> EffectImpl<N> for StaticColorEffect {
    fn frame_count(&self) -> usize {
        1
    }

    fn render(&self, _step: usize, leds: &mut [Rgb; N]) {
        leds.fill(self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_the_whole_strip_in_one_frame() {
        let effect = StaticColorEffect::from_rgb(1, 2, 3);
        let mut leds = [Rgb::default(); 5];

        assert_eq!(EffectImpl::<5>::frame_count(&effect), 1);
        effect.render(0, &mut leds);
        assert_eq!(leds, [Rgb { r: 1, g: 2, b: 3 }; 5]);
    }
}
