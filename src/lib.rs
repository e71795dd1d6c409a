pub mod config;
pub mod infrastructure;
