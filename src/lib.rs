pub mod cli;
pub mod config;
pub mod locator;
pub mod model;
pub mod util;
pub mod workspace;
