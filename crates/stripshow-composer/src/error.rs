use core::fmt::Debug;

use thiserror::Error;

/// Reasons a show stops before its last frame
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShowError<E: Debug> {
    /// The stop flag was raised
    #[error("show interrupted by stop request")]
    Interrupted,
    /// The LED driver failed to apply a frame
    #[error("led driver failed: {0:?}")]
    Driver(E),
}

impl<E: Debug> ShowError<E> {
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}
