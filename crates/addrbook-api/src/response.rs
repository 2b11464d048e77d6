//! Uniform response envelope

use chrono::{DateTime, Utc};
use serde::Serialize;

/// `{success, message, data?, timestamp?}` wrapper for every API response
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying data
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            timestamp: None,
        }
    }
}

impl ApiResponse<()> {
    /// Successful response without data
    pub fn done(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            timestamp: None,
        }
    }

    /// Failure response, stamped with the current time
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            timestamp: Some(Utc::now()),
        }
    }
}
