//! Providers Module - Chain access
//!
//! The `ChainReader` seam, its JSON-RPC implementation, and endpoint resolution.

pub mod reader;
pub mod resolver;
pub mod rpc;

pub use reader::*;
pub use resolver::*;
pub use rpc::*;
