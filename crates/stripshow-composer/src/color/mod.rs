mod utils;
mod wheel;

use smart_leds::RGB8;

pub use utils::{blend_colors, rgb_from_u32, rgb_to_u32, scale_color};
pub use wheel::{WHEEL_BAND, wheel};

pub type Rgb = RGB8;

pub const BLACK: Rgb = rgb_from_u32(0x00_0000);
pub const ORANGE: Rgb = rgb_from_u32(0xFF_6432);
pub const GREEN: Rgb = rgb_from_u32(0x00_FF00);
pub const BLUE: Rgb = rgb_from_u32(0x00_00FF);
