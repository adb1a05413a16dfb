pub mod config;
pub mod logging;

pub mod classifier;
pub mod store;
