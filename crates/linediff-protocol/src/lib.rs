//! Wire protocol for the line diff service.
//!
//! Defines the HTTP endpoint paths and the JSON bodies exchanged between
//! clients and the diff server.

pub mod endpoint;
pub mod error;
pub mod message;

pub use endpoint::{endpoints, HealthResponse};
pub use error::{ProtocolError, ProtocolResult};
pub use message::{DiffRequest, DiffResponse, ErrorResponse};
