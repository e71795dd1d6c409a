use crate::{color::Rgb, math8::scale_ratio};

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Scale every channel of a color by `numerator / denominator`
///
/// Channels are truncated, a zero denominator yields black.
#[inline]
pub fn scale_color(color: Rgb, numerator: u32, denominator: u32) -> Rgb {
    Rgb {
        r: scale_ratio(color.r, numerator, denominator),
        g: scale_ratio(color.g, numerator, denominator),
        b: scale_ratio(color.b, numerator, denominator),
    }
}

/// Mix `from` toward `to`, taking `amount / total` of `to`
///
/// `amount` is clamped to `total`, a zero `total` yields `to`.
pub fn blend_colors(from: Rgb, to: Rgb, amount: u32, total: u32) -> Rgb {
    if total == 0 {
        return to;
    }
    let amount = amount.min(total);
    let keep = total - amount;
    Rgb {
        r: blend_channel(from.r, to.r, keep, amount, total),
        g: blend_channel(from.g, to.g, keep, amount, total),
        b: blend_channel(from.b, to.b, keep, amount, total),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn blend_channel(from: u8, to: u8, keep: u32, amount: u32, total: u32) -> u8 {
    let mixed = (u64::from(from) * u64::from(keep) + u64::from(to) * u64::from(amount)) / u64::from(total);
    mixed as u8
}
