//! Hue wheel
//!
//! Maps a position in `0..=255` onto a red -> green -> blue -> red cycle.
//! The cycle is split into three 85-wide bands; inside a band one channel
//! ramps down from 255 while the next ramps up from 0.

use super::Rgb;

/// Width of a single wheel band
pub const WHEEL_BAND: u8 = 85;

/// Get the wheel color for a hue position
///
/// Band bounds are `[0, 85)`, `[85, 170)` and `[170, 256)`. The offset inside
/// a band never exceeds 85, so `offset * 3` always fits in a `u8`.
pub const fn wheel(position: u8) -> Rgb {
    match position {
        0..WHEEL_BAND => {
            let ramp = position * 3;
            Rgb {
                r: 255 - ramp,
                g: ramp,
                b: 0,
            }
        }
        WHEEL_BAND..170 => {
            let ramp = (position - WHEEL_BAND) * 3;
            Rgb {
                r: 0,
                g: 255 - ramp,
                b: ramp,
            }
        }
        _ => {
            let ramp = (position - 2 * WHEEL_BAND) * 3;
            Rgb {
                r: ramp,
                g: 0,
                b: 255 - ramp,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_colors_sit_on_band_starts() {
        assert_eq!(wheel(0), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(wheel(85), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(wheel(170), Rgb { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn red_to_green_band() {
        for p in 0u8..85 {
            assert_eq!(wheel(p), Rgb { r: 255 - 3 * p, g: 3 * p, b: 0 }, "position {p}");
        }
    }

    #[test]
    fn green_to_blue_band() {
        for p in 85u8..170 {
            let q = p - 85;
            assert_eq!(wheel(p), Rgb { r: 0, g: 255 - 3 * q, b: 3 * q }, "position {p}");
        }
    }

    #[test]
    fn blue_to_red_band() {
        for p in 170u8..=255 {
            let q = p - 170;
            assert_eq!(wheel(p), Rgb { r: 3 * q, g: 0, b: 255 - 3 * q }, "position {p}");
        }
    }

    #[test]
    fn band_edges_do_not_overflow() {
        assert_eq!(wheel(84), Rgb { r: 3, g: 252, b: 0 });
        assert_eq!(wheel(169), Rgb { r: 0, g: 3, b: 252 });
        assert_eq!(wheel(255), Rgb { r: 255, g: 0, b: 0 });
    }
}
