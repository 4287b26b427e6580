//! Response shaping for the catalog API.

use axum::http::StatusCode;
use serde::Serialize;

use crate::error::{StoreError, StoreResult};
use crate::models::movie::Movie;
use crate::routes::ApiError;

/// JSON response for a movie.
///
/// `rating` is stored as a float but published as an integer, truncated
/// toward zero.
#[derive(Debug, PartialEq, Serialize)]
pub struct MovieJson {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<i64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

impl From<Movie> for MovieJson {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            description: movie.description,
            trailer: movie.trailer,
            year: movie.year,
            rating: movie.rating.map(|r| r.trunc() as i64),
            genre_id: movie.genre_id,
            director_id: movie.director_id,
        }
    }
}

/// 201 on create; a refused payload or write becomes a 404 carrying its message.
pub fn created<T>(result: StoreResult<T>, entity: &'static str) -> Result<StatusCode, ApiError> {
    match result {
        Ok(_) => Ok(StatusCode::CREATED),
        Err(e) => Err(write_failed(e, entity)),
    }
}

/// 204 on a full-replace update, empty 404 when the record does not exist.
pub fn replaced<T>(
    result: StoreResult<Option<T>>,
    entity: &'static str,
) -> Result<StatusCode, ApiError> {
    match result {
        Ok(Some(_)) => Ok(StatusCode::NO_CONTENT),
        Ok(None) => {
            crate::metrics::not_found(entity);
            Err(ApiError::Missing)
        }
        Err(e) => Err(write_failed(e, entity)),
    }
}

/// 204 on delete, empty 404 when the record does not exist.
pub fn removed(result: StoreResult<bool>, entity: &'static str) -> Result<StatusCode, ApiError> {
    match result {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => {
            crate::metrics::not_found(entity);
            Err(ApiError::Missing)
        }
        Err(e) => Err(write_failed(e, entity)),
    }
}

fn write_failed(e: StoreError, entity: &'static str) -> ApiError {
    match e {
        StoreError::Persistence(message) => {
            crate::metrics::persistence_error(entity);
            tracing::warn!(entity, "Write rejected: {message}");
            ApiError::Persistence(message)
        }
        StoreError::Unavailable(message) => {
            tracing::error!(entity, "Write failed: {message}");
            ApiError::Internal(message)
        }
    }
}
