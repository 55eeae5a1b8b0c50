use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

/// Deployment settings that could not be parsed at startup.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a port number between 1 and 65535, got {value:?}")]
    InvalidPort { key: String, value: String },

    #[error("{key} must be a positive worker count, got {value:?}")]
    InvalidWorkers { key: String, value: String },

    #[error("{key} must be one of true/false/1/0/yes/no, got {value:?}")]
    InvalidFlag { key: String, value: String },
}

/// Errors surfaced to HTTP clients.
///
/// The defined routes cannot fail, so the only case is a request that
/// matched no route.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No route for {method} {path}")]
    RouteNotFound { method: String, path: String },
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let code = match self {
            ApiError::RouteNotFound { .. } => "NOT_FOUND",
        };
        HttpResponse::build(self.status_code()).json(json!({
            "error": code,
            "message": self.to_string()
        }))
    }
}
