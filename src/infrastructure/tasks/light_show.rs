use std::sync::atomic::AtomicBool;

use anyhow::anyhow;
use log::{error, info};
use stripshow_composer::{LedDriver, Show, ShowEngine};

use crate::config::{self, LED_COUNT};
use crate::infrastructure::types::LightDriver;

/// Bring up the strip driver and apply the configured brightness
pub fn init_light_show() -> anyhow::Result<LightDriver> {
    let mut driver = new_driver()?;
    LedDriver::<LED_COUNT>::set_brightness(&mut driver, config::BRIGHTNESS)
        .map_err(|e| anyhow!("setting strip brightness: {e:?}"))?;
    info!(
        "light: {} leds at brightness {} ({}%)",
        LED_COUNT,
        config::BRIGHTNESS,
        config::LIGHT.brightness_percentage * 100.0
    );
    Ok(driver)
}

#[cfg(feature = "rpi")]
fn new_driver() -> anyhow::Result<LightDriver> {
    LightDriver::new(&config::LIGHT).map_err(|e| anyhow!("initializing ws281x strip: {e:?}"))
}

#[cfg(not(feature = "rpi"))]
#[allow(clippy::unnecessary_wraps)]
fn new_driver() -> anyhow::Result<LightDriver> {
    info!("light: built without `rpi`, frames go to the log");
    Ok(LightDriver::new())
}

/// Run the default show until the stop flag is raised, then clear the strip
///
/// A failed final clear is logged and does not change the outcome. Returns the
/// number of frames written.
pub async fn run_light_show<D: LedDriver<LED_COUNT>>(driver: D, stop: &AtomicBool) -> u64 {
    let mut engine: ShowEngine<D, LED_COUNT> =
        ShowEngine::new(driver, Show::default_cycle()).with_period(config::SHOW.period);

    if let Err(e) = engine.run(stop).await {
        error!("light: clearing strip on exit failed: {:?}", e);
    }

    info!("light: show stopped after {} frames", engine.frames_written());
    engine.frames_written()
}
