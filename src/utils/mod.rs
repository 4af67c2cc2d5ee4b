mod errors;
mod config;
mod constants;

pub use errors::*;
pub use config::*;
pub use constants::*;

#[cfg(test)]
mod config_tests;
