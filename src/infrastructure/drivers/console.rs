use core::convert::Infallible;

use log::{info, trace};
use stripshow_composer::color::rgb_to_u32;
use stripshow_composer::{LedDriver, Rgb};

/// Dry-run driver that reports frames through the logger
///
/// Used when the crate is built without the `rpi` feature, so the show can run
/// on any host. Frames are logged at trace level.
#[derive(Debug, Default)]
pub struct ConsoleDriver {
    brightness: u8,
    frames: u64,
}

impl ConsoleDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl<const N: usize> LedDriver<N> for ConsoleDriver {
    type Error = Infallible;

    fn set_brightness(&mut self, brightness: u8) -> Result<(), Self::Error> {
        info!("console: brightness set to {}", brightness);
        self.brightness = brightness;
        Ok(())
    }

    fn write(&mut self, colors: &[Rgb; N]) -> Result<(), Self::Error> {
        self.frames += 1;
        let lit = colors.iter().filter(|c| **c != Rgb::default()).count();
        trace!(
            "console: frame {} lit={}/{} head=#{:06x}",
            self.frames,
            lit,
            N,
            colors.first().copied().map_or(0, rgb_to_u32)
        );
        Ok(())
    }

    fn reset(&mut self) -> Result<(), Self::Error> {
        info!("console: strip cleared after {} frames", self.frames);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_frames_and_keeps_brightness() {
        let mut driver = ConsoleDriver::new();

        LedDriver::<3>::set_brightness(&mut driver, 128).unwrap();
        driver.write(&[Rgb::default(); 3]).unwrap();
        driver.write(&[Rgb { r: 1, g: 0, b: 0 }; 3]).unwrap();
        LedDriver::<3>::reset(&mut driver).unwrap();

        assert_eq!(driver.brightness(), 128);
        assert_eq!(driver.frames(), 2);
    }
}
