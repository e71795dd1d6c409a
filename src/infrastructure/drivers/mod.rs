mod console;
#[cfg(feature = "rpi")]
mod led_ws281x;

pub use console::ConsoleDriver;
#[cfg(feature = "rpi")]
pub use led_ws281x::Ws281xDriver;
