//! Infrastructure layer - Port implementations
//!
//! This module contains concrete implementations of the composer ports
//! using actual hardware and system resources.

pub mod drivers;
pub mod signals;
pub mod tasks;
pub mod types;
