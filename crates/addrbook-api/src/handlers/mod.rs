//! HTTP API handlers
//!
//! `address_book` serves the legacy single-tenant API and `user` the
//! multi-tenant API. Both translate one request into one service call and
//! map absence (`false`, `None`, empty) to 404.

pub mod address_book;
pub mod user;

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Envelope-shaped 404 for unknown routes
pub async fn fallback(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {} {}", method, uri.path()))
}
