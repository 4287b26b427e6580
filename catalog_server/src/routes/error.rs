//! HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::error::StoreError;

pub const NOT_FOUND_MESSAGE: &str = "Data not found";

#[derive(Debug)]
pub enum ApiError {
    /// Read found nothing: 404 with a message.
    NotFound,
    /// Write targeted a missing record: 404 with an empty body.
    Missing,
    /// Payload or write refused by the store: 404 with the error text.
    Persistence(String),
    /// Malformed query parameter: 400.
    BadRequest(String),
    /// Store unreachable: 500.
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Persistence(message) => ApiError::Persistence(message),
            StoreError::Unavailable(message) => ApiError::Internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, Json(NOT_FOUND_MESSAGE)).into_response(),
            ApiError::Missing => StatusCode::NOT_FOUND.into_response(),
            ApiError::Persistence(message) => (StatusCode::NOT_FOUND, Json(message)).into_response(),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, Json(message)).into_response(),
            ApiError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(message)).into_response()
            }
        }
    }
}
