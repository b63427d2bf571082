//! Website-specific error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared::{SharedError, site_error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebsiteError {
    #[error("HTTP server startup failed on {address}")]
    ServerStartupFailed { address: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Page not found: {path}")]
    PageNotFound { path: String },

    #[error("Method {method} not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },

    #[error("Submission delivery failed: {reason}")]
    DeliveryFailed { reason: String },

    #[error("Submission task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl WebsiteError {
    pub fn config(field: impl Into<String>, value: impl ToString) -> Self {
        WebsiteError::InvalidConfig {
            field: field.into(),
            value: value.to_string(),
        }
    }

    pub fn delivery(reason: impl Into<String>) -> Self {
        WebsiteError::DeliveryFailed { reason: reason.into() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            WebsiteError::PageNotFound { .. } => StatusCode::NOT_FOUND,
            WebsiteError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            WebsiteError::DeliveryFailed { .. } => StatusCode::SERVICE_UNAVAILABLE,
            WebsiteError::JsonError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebsiteError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            site_error!("website", "Request failed: {}", self);
        }
        (status, self.to_string()).into_response()
    }
}

pub type WebsiteResult<T> = Result<T, WebsiteError>;
