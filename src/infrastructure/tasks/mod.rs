pub mod light_show;

pub use light_show::{init_light_show, run_light_show};
