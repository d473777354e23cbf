//! HTTP API Module
//! REST surface over the honeypot engine

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;

pub use routes::create_router;
pub use types::*;
