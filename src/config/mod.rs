pub mod config;
pub mod file;

pub use config::{broadcast, PlannerConfig};
