//! Models Module - Data Structures & Configuration
//!
//! Report types, error codes and the immutable engine configuration.

pub mod config;
pub mod errors;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;
