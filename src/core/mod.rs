//! Configuration and errors shared across the crate.

pub mod config;
pub mod error;

pub use config::SetConfig;
pub use error::{Result, TokenError};
