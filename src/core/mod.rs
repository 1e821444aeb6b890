pub mod browse;
pub mod filters;
pub mod loader;
pub mod stats;
