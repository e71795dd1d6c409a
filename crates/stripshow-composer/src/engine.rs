//! Show engine - frame pacing and cycle scheduling
//!
//! The `ShowEngine` is the central coordinator that:
//! - Owns the pixel buffer and the LED driver
//! - Renders every frame of every show step in order
//! - Paces frames with the step's frame delay
//! - Restarts the show on a fixed period, dropping ticks missed while a
//!   cycle was running
//! - Stops cooperatively when the stop flag is raised

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Instant, Timer};
use log::{debug, error, info};

use crate::{
    color::{BLACK, Rgb},
    driver::LedDriver,
    error::ShowError,
    show::Show,
};

/// Default interval between show restarts
pub const DEFAULT_SHOW_PERIOD: Duration = Duration::from_millis(1000);

/// How often a pending delay re-checks the stop flag
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Next period boundary the engine should start a cycle on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickSchedule {
    /// Boundary index counted from the origin, starting at 1
    pub index: u64,
    /// Time of the boundary
    pub at: Instant,
}

impl TickSchedule {
    /// Ticks skipped between `previous` and this one
    pub fn dropped_since(&self, previous: u64) -> u64 {
        self.index.saturating_sub(previous).saturating_sub(1)
    }
}

/// First boundary `origin + k * period` (k >= 1) strictly after `now`
pub fn next_tick_after(origin: Instant, now: Instant, period: Duration) -> TickSchedule {
    let period_ticks = period.as_ticks().max(1);
    let elapsed = now.saturating_duration_since(origin).as_ticks();
    let index = elapsed / period_ticks + 1;

    TickSchedule {
        index,
        at: origin + Duration::from_ticks(index * period_ticks),
    }
}

/// Show Engine - the main orchestrator
///
/// Generic over `D: LedDriver` to support different hardware backends.
pub struct ShowEngine<D: LedDriver<N>, const N: usize> {
    /// Hardware driver for LED output
    driver: D,
    /// Frame buffer, rendered in place and kept between frames
    pixels: [Rgb; N],
    /// Steps of one cycle
    show: Show,
    /// Interval between show restarts
    period: Duration,
    /// Time the periodic schedule is anchored to
    origin: Instant,
    /// Index of the tick that started the last cycle
    last_tick: u64,
    /// Frames pushed to the driver since creation
    frames_written: u64,
}

impl<D: LedDriver<N>, const N: usize> ShowEngine<D, N> {
    pub fn new(driver: D, show: Show) -> Self {
        Self {
            driver,
            pixels: [BLACK; N],
            show,
            period: DEFAULT_SHOW_PERIOD,
            origin: Instant::now(),
            last_tick: 0,
            frames_written: 0,
        }
    }

    /// Set the show restart period
    #[must_use]
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Give the driver back, e.g. to drop it after the final reset
    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Run every step of the show once
    ///
    /// The stop flag is checked before each frame and raced against each
    /// frame delay.
    pub async fn run_cycle(&mut self, stop: &AtomicBool) -> Result<(), ShowError<D::Error>> {
        for step in self.show.steps() {
            let frames = step.effect.frame_count::<N>();
            debug!(
                "show: {} for {} frames, {} ms apart",
                step.effect.name(),
                frames,
                step.frame_delay.as_millis()
            );

            for frame in 0..frames {
                if stop.load(Ordering::Relaxed) {
                    return Err(ShowError::Interrupted);
                }
                step.effect.render(frame, &mut self.pixels);
                self.driver.write(&self.pixels).map_err(ShowError::Driver)?;
                self.frames_written += 1;
                pace::<D::Error>(step.frame_delay, stop).await?;
            }
        }
        Ok(())
    }

    /// Wait for the next period boundary
    ///
    /// Boundaries that already passed are skipped, not queued.
    pub async fn wait_next_tick(&mut self, stop: &AtomicBool) -> Result<(), ShowError<D::Error>> {
        let tick = next_tick_after(self.origin, Instant::now(), self.period);
        let dropped = tick.dropped_since(self.last_tick);
        if dropped > 0 {
            debug!("show: dropped {} ticks while the last cycle ran", dropped);
        }
        self.last_tick = tick.index;

        match select(Timer::at(tick.at), stop_requested(stop)).await {
            Either::First(()) => Ok(()),
            Either::Second(()) => Err(ShowError::Interrupted),
        }
    }

    /// Turn the strip off and clear the buffer
    pub fn reset(&mut self) -> Result<(), D::Error> {
        self.pixels.fill(BLACK);
        self.driver.reset()
    }

    /// Repeat the show on every period boundary until the stop flag is raised
    ///
    /// Driver failures are logged and answered with a reset; the engine then
    /// waits for the next boundary. Returns the result of the final reset.
    pub async fn run(&mut self, stop: &AtomicBool) -> Result<(), D::Error> {
        self.origin = Instant::now();
        self.last_tick = 0;
        info!(
            "show: starting, {} steps every {} ms on {} pixels",
            self.show.steps().len(),
            self.period.as_millis(),
            N
        );

        loop {
            if self.wait_next_tick(stop).await.is_err() {
                break;
            }
            match self.run_cycle(stop).await {
                Ok(()) => debug!("show: cycle finished, {} frames so far", self.frames_written),
                Err(ShowError::Interrupted) => break,
                Err(ShowError::Driver(e)) => {
                    error!("show: cycle failed: {:?}", e);
                    if let Err(e) = self.reset() {
                        error!("show: reset after failure failed: {:?}", e);
                    }
                }
            }
        }

        info!("show: stop requested, clearing strip");
        self.reset()
    }
}

/// Wait `delay`, returning early when the stop flag is raised
async fn pace<E: core::fmt::Debug>(delay: Duration, stop: &AtomicBool) -> Result<(), ShowError<E>> {
    match select(Timer::after(delay), stop_requested(stop)).await {
        Either::First(()) => Ok(()),
        Either::Second(()) => Err(ShowError::Interrupted),
    }
}

async fn stop_requested(stop: &AtomicBool) {
    while !stop.load(Ordering::Relaxed) {
        Timer::after(STOP_POLL_INTERVAL).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_one_period_after_origin() {
        let origin = Instant::from_millis(5_000);
        let tick = next_tick_after(origin, origin, Duration::from_millis(1000));

        assert_eq!(tick.index, 1);
        assert_eq!(tick.at, Instant::from_millis(6_000));
        assert_eq!(tick.dropped_since(0), 0);
    }

    #[test]
    fn ticks_missed_by_a_long_cycle_are_dropped() {
        let origin = Instant::from_millis(0);
        let period = Duration::from_millis(1000);

        // Cycle started on tick 1 and ran for ~46 s
        let tick = next_tick_after(origin, Instant::from_millis(47_080), period);

        assert_eq!(tick.index, 48);
        assert_eq!(tick.at, Instant::from_millis(48_000));
        assert_eq!(tick.dropped_since(1), 46);
    }

    #[test]
    fn exact_boundary_moves_to_the_following_tick() {
        let origin = Instant::from_millis(0);
        let tick = next_tick_after(origin, Instant::from_millis(3_000), Duration::from_millis(1000));

        assert_eq!(tick.index, 4);
        assert_eq!(tick.at, Instant::from_millis(4_000));
    }

    #[test]
    fn zero_period_still_advances() {
        let origin = Instant::from_ticks(10);
        let tick = next_tick_after(origin, origin, Duration::from_ticks(0));

        assert_eq!(tick.index, 1);
        assert_eq!(tick.at, Instant::from_ticks(11));
    }
}
