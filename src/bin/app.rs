use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use embassy_executor::Spawner;
use log::{error, info};

use stripshow_light::infrastructure::signals::register_stop_flag;
use stripshow_light::infrastructure::tasks::{init_light_show, run_light_show};
use stripshow_light::infrastructure::types::LightDriver;

fn setup() -> anyhow::Result<(Arc<AtomicBool>, LightDriver)> {
    let stop = register_stop_flag()?;
    let driver = init_light_show()?;
    Ok((stop, driver))
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("app: stripshow {}", env!("CARGO_PKG_VERSION"));

    // The executor never returns, so the exit status is set here
    let (stop, driver) = match setup() {
        Ok(setup) => setup,
        Err(e) => {
            error!("app: {e:#}");
            std::process::exit(1);
        }
    };

    run_light_show(driver, &stop).await;
    info!("app: exiting");
    std::process::exit(0);
}
