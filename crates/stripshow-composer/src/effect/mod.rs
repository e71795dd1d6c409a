//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `EffectImpl` trait.

mod breathing;
mod color_wipe;
mod palette_cycle;
mod rainbow;
mod sparkle;
mod static_color;
mod theater_chase;

pub use breathing::BreathingEffect;
pub use color_wipe::ColorWipeEffect;
pub use palette_cycle::{PALETTE_CAPACITY, PaletteCycleEffect};
pub use rainbow::{RAINBOW_CYCLE_STEPS, RainbowCycleEffect};
pub use sparkle::SparkleEffect;
pub use static_color::StaticColorEffect;
pub use theater_chase::TheaterChaseEffect;

use crate::color::{BLACK, Rgb};

/// Trait for effect implementations
///
/// An effect is a finite sequence of frames. Frames are rendered in place
/// into the strip buffer, so an effect may keep pixels from earlier frames.
pub trait EffectImpl<const N: usize> {
    /// Number of frames in one run of the effect
    fn frame_count(&self) -> usize;

    /// Render frame `step` into `leds`
    ///
    /// `step` is in `0..frame_count()`.
    fn render(&self, step: usize, leds: &mut [Rgb; N]);
}

/// Effect slot - enum containing all possible effects
///
/// Using an enum instead of trait objects allows:
/// - Zero heap allocations
/// - Known size at compile time
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EffectSlot {
    /// All LEDs off, single frame
    #[default]
    Off,
    /// Whole strip in one color, single frame
    Static(StaticColorEffect),
    /// Progressive fill, one pixel per frame
    ColorWipe(ColorWipeEffect),
    /// Wheel colors spread over the strip, rotated one position per frame
    RainbowCycle(RainbowCycleEffect),
    /// Every third pixel lit, marching forward
    TheaterChase(TheaterChaseEffect),
    /// Whole strip fading in and out
    Breathing(BreathingEffect),
    /// Random pixels flashing and fading back to a base color
    Sparkle(SparkleEffect),
    /// Palette rotated across equal blocks of the strip
    PaletteCycle(PaletteCycleEffect),
}

impl EffectSlot {
    pub const fn color_wipe(color: Rgb) -> Self {
        Self::ColorWipe(ColorWipeEffect::new(color))
    }

    pub const fn rainbow_cycle() -> Self {
        Self::RainbowCycle(RainbowCycleEffect::new())
    }

    /// Number of frames for a strip of `N` pixels
    pub fn frame_count<const N: usize>(&self) -> usize {
        match self {
            Self::Off => 1,
            Self::Static(effect) => EffectImpl::<N>::frame_count(effect),
            Self::ColorWipe(effect) => EffectImpl::<N>::frame_count(effect),
            Self::RainbowCycle(effect) => EffectImpl::<N>::frame_count(effect),
            Self::TheaterChase(effect) => EffectImpl::<N>::frame_count(effect),
            Self::Breathing(effect) => EffectImpl::<N>::frame_count(effect),
            Self::Sparkle(effect) => EffectImpl::<N>::frame_count(effect),
            Self::PaletteCycle(effect) => EffectImpl::<N>::frame_count(effect),
        }
    }

    /// Render a frame of the current effect
    pub fn render<const N: usize>(&self, step: usize, leds: &mut [Rgb; N]) {
        match self {
            Self::Off => leds.fill(BLACK),
            Self::Static(effect) => effect.render(step, leds),
            Self::ColorWipe(effect) => effect.render(step, leds),
            Self::RainbowCycle(effect) => effect.render(step, leds),
            Self::TheaterChase(effect) => effect.render(step, leds),
            Self::Breathing(effect) => effect.render(step, leds),
            Self::Sparkle(effect) => effect.render(step, leds),
            Self::PaletteCycle(effect) => effect.render(step, leds),
        }
    }

    /// Short name used in logs
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Static(_) => "static",
            Self::ColorWipe(_) => "color_wipe",
            Self::RainbowCycle(_) => "rainbow_cycle",
            Self::TheaterChase(_) => "theater_chase",
            Self::Breathing(_) => "breathing",
            Self::Sparkle(_) => "sparkle",
            Self::PaletteCycle(_) => "palette_cycle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ORANGE;

    #[test]
    fn frame_counts_follow_strip_length() {
        assert_eq!(EffectSlot::Off.frame_count::<10>(), 1);
        assert_eq!(EffectSlot::color_wipe(ORANGE).frame_count::<10>(), 10);
        assert_eq!(EffectSlot::color_wipe(ORANGE).frame_count::<144>(), 144);
        assert_eq!(EffectSlot::rainbow_cycle().frame_count::<10>(), 256);

        let sparkle = SparkleEffect::new(ORANGE, BLACK).with_count(5).with_fade_steps(3);
        assert_eq!(EffectSlot::Sparkle(sparkle).frame_count::<10>(), 5 * 4);
        let palette = PaletteCycleEffect::new(&[ORANGE, BLACK], 1);
        assert_eq!(EffectSlot::PaletteCycle(palette).frame_count::<10>(), 2);
    }

    #[test]
    fn off_clears_the_buffer() {
        let mut leds = [ORANGE; 4];
        EffectSlot::Off.render(0, &mut leds);
        assert_eq!(leds, [BLACK; 4]);
    }

    #[test]
    fn names_are_stable() {
        assert_eq!(EffectSlot::color_wipe(ORANGE).name(), "color_wipe");
        assert_eq!(EffectSlot::rainbow_cycle().name(), "rainbow_cycle");
        assert_eq!(EffectSlot::default().name(), "off");
        assert_eq!(EffectSlot::Sparkle(SparkleEffect::new(ORANGE, BLACK)).name(), "sparkle");
    }
}
