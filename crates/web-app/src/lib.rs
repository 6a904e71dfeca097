#![warn(clippy::pedantic)]

mod config;
pub mod log;
mod service;

pub use config::*;
pub use service::*;
