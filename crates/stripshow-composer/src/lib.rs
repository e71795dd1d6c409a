#![cfg_attr(not(test), no_std)]

//! Strip show composer
//!
//! Architecture layers:
//! - `color` - Color model and the hue wheel
//! - `driver` - Hardware abstraction ([`LedDriver`] trait)
//! - `effect` - Frame generators and the [`EffectSlot`] enum
//! - `show` - Ordered list of effects with their frame delays
//! - `engine` - Scheduler that paces frames and repeats the show
//!
//! The engine is generic over `LedDriver`, allowing different hardware backends.

pub mod color;
pub mod driver;
pub mod effect;
pub mod engine;
pub mod error;
pub mod math8;
pub mod show;

pub use color::{Rgb, wheel};
pub use driver::LedDriver;
pub use effect::{EffectImpl, EffectSlot};
pub use engine::{ShowEngine, TickSchedule, next_tick_after};
pub use error::ShowError;
pub use math8::brightness_from_percentage;
pub use show::{Show, ShowStep};
