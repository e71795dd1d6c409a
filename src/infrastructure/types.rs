#[cfg(feature = "rpi")]
pub type LightDriver = crate::infrastructure::drivers::Ws281xDriver;
#[cfg(not(feature = "rpi"))]
pub type LightDriver = crate::infrastructure::drivers::ConsoleDriver;
