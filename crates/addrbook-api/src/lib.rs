//! addrbook-api: HTTP API for the address book service
//!
//! Exposes the single-tenant and multi-tenant address book operations as
//! REST endpoints. Built with axum for async HTTP handling.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod request;
pub mod response;
pub mod routes;
pub mod server;

#[cfg(test)]
mod test_util;

pub use error::{ApiError, Result};
pub use response::ApiResponse;
pub use server::{AppState, app, start_server};
