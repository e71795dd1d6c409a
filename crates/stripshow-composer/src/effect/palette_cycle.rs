//! Palette cycle effect
//!
//! Splits the strip into `N / displayed` blocks and paints block `b` with
//! palette color `b mod len`, rotating the palette by one color per frame.
//! Blocks whose palette slot is at or past `displayed` are turned off.

use heapless::Vec;
use log::warn;

use super::EffectImpl;
use crate::color::{BLACK, Rgb};

/// Maximum number of colors in a palette
pub const PALETTE_CAPACITY: usize = 16;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteCycleEffect {
    colors: Vec<Rgb, PALETTE_CAPACITY>,
    displayed: usize,
}

impl PaletteCycleEffect {
    /// Cycle `colors`, showing `displayed` of them at a time
    ///
    /// Colors past `PALETTE_CAPACITY` are dropped, `displayed` is at least 1.
    pub fn new(colors: &[Rgb], displayed: usize) -> Self {
        if colors.len() > PALETTE_CAPACITY {
            warn!(
                "palette: keeping {} of {} colors",
                PALETTE_CAPACITY,
                colors.len()
            );
        }
        Self {
            colors: colors.iter().take(PALETTE_CAPACITY).copied().collect(),
            displayed: displayed.max(1),
        }
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Color of pixel `index` on frame `step` for a strip of `len` pixels
    pub fn color_at(&self, index: usize, len: usize, step: usize) -> Rgb {
        let count = self.colors.len();
        if count == 0 {
            return BLACK;
        }
        let block_len = (len / self.displayed).max(1);
        let slot = (index / block_len) % count;
        if slot < self.displayed {
            self.colors[(slot + step) % count]
        } else {
            BLACK
        }
    }
}

impl<const N: usize> EffectImpl<N> for PaletteCycleEffect {
    fn frame_count(&self) -> usize {
        self.colors.len()
    }

    fn render(&self, step: usize, leds: &mut [Rgb; N]) {
        for (index, led) in leds.iter_mut().enumerate() {
            *led = self.color_at(index, N, step);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLUE, GREEN, ORANGE};

    const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

    #[test]
    fn one_frame_per_palette_color() {
        let effect = PaletteCycleEffect::new(&[ORANGE, GREEN, BLUE], 2);

        assert_eq!(EffectImpl::<8>::frame_count(&effect), 3);
        assert_eq!(EffectImpl::<8>::frame_count(&PaletteCycleEffect::new(&[], 2)), 0);
    }

    #[test]
    fn blocks_rotate_through_the_palette() {
        let effect = PaletteCycleEffect::new(&[ORANGE, GREEN, BLUE], 2);
        let mut leds = [BLACK; 8];

        effect.render(0, &mut leds);
        assert_eq!(leds, [ORANGE, ORANGE, ORANGE, ORANGE, GREEN, GREEN, GREEN, GREEN]);

        effect.render(1, &mut leds);
        assert_eq!(leds, [GREEN, GREEN, GREEN, GREEN, BLUE, BLUE, BLUE, BLUE]);

        effect.render(2, &mut leds);
        assert_eq!(leds, [BLUE, BLUE, BLUE, BLUE, ORANGE, ORANGE, ORANGE, ORANGE]);
    }

    #[test]
    fn slots_past_the_displayed_count_are_off() {
        // 9 / 2 -> blocks of 4, the leftover pixel falls into slot 2
        let effect = PaletteCycleEffect::new(&[ORANGE, GREEN, BLUE, WHITE], 2);
        let mut leds = [WHITE; 9];

        effect.render(1, &mut leds);

        assert!(leds[..4].iter().all(|c| *c == GREEN));
        assert!(leds[4..8].iter().all(|c| *c == BLUE));
        assert_eq!(leds[8], BLACK);
    }

    #[test]
    fn small_palette_wraps_across_extra_blocks() {
        // 10 / 3 -> blocks of 3, the leftover pixel reuses slot 0
        let effect = PaletteCycleEffect::new(&[ORANGE, GREEN, BLUE], 3);
        let mut leds = [BLACK; 10];

        effect.render(0, &mut leds);

        assert_eq!(leds[9], ORANGE);
        assert!(leds.iter().all(|c| *c != BLACK));
    }

    #[test]
    fn degenerate_inputs_do_not_panic() {
        let mut leds = [WHITE; 4];

        PaletteCycleEffect::new(&[], 3).render(0, &mut leds);
        assert_eq!(leds, [BLACK; 4]);

        // Zero displayed colors is treated as one
        let effect = PaletteCycleEffect::new(&[ORANGE, GREEN], 0);
        effect.render(0, &mut leds);
        assert_eq!(leds, [ORANGE; 4]);

        // More displayed colors than pixels gives one pixel per block
        let wide = PaletteCycleEffect::new(&[ORANGE, GREEN, BLUE, WHITE, ORANGE, GREEN], 6);
        wide.render(0, &mut leds);
        assert_eq!(leds, [ORANGE, GREEN, BLUE, WHITE]);
    }

    #[test]
    fn palette_is_capped() {
        let colors = [ORANGE; PALETTE_CAPACITY + 4];

        assert_eq!(PaletteCycleEffect::new(&colors, 1).colors().len(), PALETTE_CAPACITY);
    }
}
