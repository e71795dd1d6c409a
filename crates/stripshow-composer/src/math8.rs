/// Convert a brightness percentage (0.0-1.0) to an 8-bit brightness
///
/// The percentage is clamped and rounded half up, so `0.5` maps to `128`.
/// `NaN` is treated as `0.0`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn brightness_from_percentage(percentage: f32) -> u8 {
    let clamped = if percentage.is_nan() || percentage <= 0.0 {
        0.0
    } else if percentage >= 1.0 {
        1.0
    } else {
        percentage
    };

    (clamped * 255.0 + 0.5) as u8
}

/// Scale an 8-bit value by `numerator / denominator`
///
/// Result is truncated. Ratios above one are clamped to one.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale_ratio(value: u8, numerator: u32, denominator: u32) -> u8 {
    if denominator == 0 {
        return 0;
    }
    if numerator >= denominator {
        return value;
    }

    (value as u32 * numerator / denominator) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_rounds_half_up() {
        assert_eq!(brightness_from_percentage(0.5), 128);
        assert_eq!(brightness_from_percentage(0.2), 51);
        assert_eq!(brightness_from_percentage(0.0), 0);
        assert_eq!(brightness_from_percentage(1.0), 255);
    }

    #[test]
    fn brightness_is_clamped() {
        assert_eq!(brightness_from_percentage(-0.3), 0);
        assert_eq!(brightness_from_percentage(4.0), 255);
        assert_eq!(brightness_from_percentage(f32::NAN), 0);
    }

    #[test]
    fn scale_ratio_bounds() {
        assert_eq!(scale_ratio(200, 1, 4), 50);
        assert_eq!(scale_ratio(200, 7, 7), 200);
        assert_eq!(scale_ratio(200, 9, 7), 200);
        assert_eq!(scale_ratio(200, 3, 0), 0);
    }
}
