//! Build-time configuration for the weather clock firmware.

#![no_std]

pub mod config;
pub mod constants;
pub mod resolution;

pub use config::{Config, CONFIG};
pub use resolution::Resolution;
