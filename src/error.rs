use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::resource::ResourceKey;

/// Errors raised by the resource fetch client and stored per resource by the
/// data-loading coordinator.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint answered, but with a non-success status.
    #[error("request for {resource} returned HTTP {status}")]
    Http { resource: ResourceKey, status: u16 },

    /// The transport failed before any status was available.
    #[error("network error while fetching {resource}: {source}")]
    Network {
        resource: ResourceKey,
        #[source]
        source: reqwest::Error,
    },

    /// A settlement that produced no usable error value, coerced into a
    /// generic per-resource message.
    #[error("{0}")]
    Message(String),
}

impl FetchError {
    /// The generic message used when a load fails without a proper error.
    pub fn coerced(resource: ResourceKey) -> Self {
        FetchError::Message(format!("Failed to fetch {} data", resource))
    }
}

/// Errors raised by the JSON-file settings store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file does not exist. The message is matched verbatim by
    /// the settings route handler to produce a 404.
    #[error("Settings data source not found")]
    NotFound,

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Wire shape of every failure response: `{ "error": <message> }`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A handler-level failure carrying the status code it should map to.
///
/// Route handlers catch downstream errors and translate them into one of
/// these; nothing propagates past the handler boundary.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}
