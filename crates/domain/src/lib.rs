#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod body_part;
mod equipment;
mod error;
mod exercise;
pub mod form;
mod service;

pub use body_part::*;
pub use equipment::*;
pub use error::*;
pub use exercise::*;
pub use form::{Command, FormError, FormState, Generation, Msg, Status};
pub use service::*;
