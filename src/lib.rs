pub mod algorithm;
pub mod common;
pub mod config;
pub mod error;
pub mod sequence;
pub mod utils;

pub mod align;
pub mod cluster;
pub mod ga;
pub mod report;

pub use error::{Error, Result};
