use embassy_time::Duration;
use stripshow_composer::brightness_from_percentage;

pub const LED_COUNT: usize = 144;

#[derive(Debug, Clone, Copy)]
pub struct LightConfig {
    pub led_count: usize,
    /// Share of full brightness, 0.0-1.0
    pub brightness_percentage: f32,
    /// BCM number of the data pin
    pub gpio_pin: i32,
    pub dma_channel: i32,
    pub frequency_hz: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct ShowConfig {
    /// Interval between show restarts
    pub period: Duration,
}

pub const LIGHT: LightConfig = LightConfig {
    led_count: LED_COUNT,
    brightness_percentage: 0.5,
    gpio_pin: 18,
    dma_channel: 10,
    frequency_hz: 800_000,
};

pub const SHOW: ShowConfig = ShowConfig {
    period: Duration::from_millis(1000),
};

/// Strip brightness handed to the driver at startup
pub const BRIGHTNESS: u8 = brightness_from_percentage(LIGHT.brightness_percentage);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_brightness_is_half_rounded_up() {
        assert_eq!(BRIGHTNESS, 128);
    }

    #[test]
    fn light_config_matches_strip_length() {
        assert_eq!(LIGHT.led_count, LED_COUNT);
        assert_eq!(SHOW.period, Duration::from_millis(1000));
    }
}
