//! LED Driver abstraction layer
//!
//! Provides a trait-based abstraction for LED strip drivers,
//! allowing the show engine to be hardware-agnostic.

use core::fmt::Debug;

use crate::color::Rgb;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware backends.
/// Constructing the driver plus [`LedDriver::set_brightness`] is the one-time
/// strip setup; the engine only writes frames and resets afterwards.
pub trait LedDriver<const N: usize> {
    /// Hardware failure reported by the backend
    type Error: Debug;

    /// Set the global strip brightness (0-255)
    fn set_brightness(&mut self, brightness: u8) -> Result<(), Self::Error>;

    /// Push a complete frame to the LED strip
    fn write(&mut self, colors: &[Rgb; N]) -> Result<(), Self::Error>;

    /// Turn every LED off
    fn reset(&mut self) -> Result<(), Self::Error>;
}
