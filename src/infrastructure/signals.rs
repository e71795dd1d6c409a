use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use anyhow::Context;
use log::debug;
use signal_hook::consts::{SIGINT, SIGTERM};

/// Signals that end the show
pub const TERMINATION_SIGNALS: [i32; 2] = [SIGINT, SIGTERM];

/// Register the termination signals on a shared stop flag
///
/// The handlers only raise the flag; the show engine polls it and runs the
/// reset itself.
pub fn register_stop_flag() -> anyhow::Result<Arc<AtomicBool>> {
    let stop = Arc::new(AtomicBool::new(false));
    for signal in TERMINATION_SIGNALS {
        signal_hook::flag::register(signal, Arc::clone(&stop))
            .with_context(|| format!("registering handler for signal {signal}"))?;
    }
    debug!("signals: stop flag armed for SIGINT and SIGTERM");
    Ok(stop)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;

    #[test]
    fn raised_signal_sets_the_flag() {
        let stop = register_stop_flag().unwrap();
        assert!(!stop.load(Ordering::Relaxed));

        signal_hook::low_level::raise(SIGTERM).unwrap();

        assert!(stop.load(Ordering::Relaxed));
    }
}
