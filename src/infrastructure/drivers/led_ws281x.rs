use log::{debug, info};
use rs_ws281x::{ChannelBuilder, Controller, ControllerBuilder, StripType, WS2811Error};

use stripshow_composer::{LedDriver, Rgb};

use crate::config::LightConfig;

const CHANNEL: usize = 0;

/// Raspberry Pi LED driver backed by the native `rpi_ws281x` library
///
/// The library generates the WS281x signal with PWM + DMA on the configured
/// GPIO. The strip is released when the driver is dropped.
pub struct Ws281xDriver {
    controller: Controller,
}

impl Ws281xDriver {
    /// Initialize the strip with brightness 0, see [`LedDriver::set_brightness`]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn new(config: &LightConfig) -> Result<Self, WS2811Error> {
        let controller = ControllerBuilder::new()
            .freq(config.frequency_hz)
            .dma(config.dma_channel)
            .channel(
                CHANNEL,
                ChannelBuilder::new()
                    .pin(config.gpio_pin)
                    .count(config.led_count as i32)
                    .strip_type(StripType::Ws2812)
                    .brightness(0)
                    .build(),
            )
            .build()?;

        info!(
            "ws281x: strip of {} leds on gpio {} (dma {})",
            config.led_count, config.gpio_pin, config.dma_channel
        );
        Ok(Self { controller })
    }
}

impl<const N: usize> LedDriver<N> for Ws281xDriver {
    type Error = WS2811Error;

    fn set_brightness(&mut self, brightness: u8) -> Result<(), Self::Error> {
        debug!("ws281x: brightness {}", brightness);
        self.controller.set_brightness(CHANNEL, brightness);
        Ok(())
    }

    fn write(&mut self, colors: &[Rgb; N]) -> Result<(), Self::Error> {
        // Raw layout is [B, G, R, W]
        let leds = self.controller.leds_mut(CHANNEL);
        for (led, color) in leds.iter_mut().zip(colors.iter()) {
            *led = [color.b, color.g, color.r, 0];
        }
        self.controller.render()
    }

    fn reset(&mut self) -> Result<(), Self::Error> {
        for led in self.controller.leds_mut(CHANNEL) {
            *led = [0; 4];
        }
        self.controller.render()?;
        self.controller.wait()
    }
}
