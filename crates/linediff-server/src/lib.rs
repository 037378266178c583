//! HTTP server for the line diff service.
//!
//! Accepts two texts as JSON and answers with their line diff records.
//! Each request is independent; the server keeps no state between them.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::{ServerConfig, DEFAULT_PORT};
pub use error::{ServerError, ServerResult};
pub use server::DiffServer;
