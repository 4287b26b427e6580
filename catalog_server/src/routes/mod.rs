//! Catalog HTTP routes. Movies are read-only; directors and genres are writable.

pub mod api;
pub mod error;

use std::time::Duration;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post, put};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::CatalogConfig;
use crate::db::{DbPool, PooledConnection};
use crate::error::StoreError;
use crate::filter::{MovieFilter, MovieQuery};
use crate::models::payload::EntityPayload;
use crate::services::{director_service, genre_service, movie_service};

pub use error::ApiError;

/// Shared state for catalog route handlers.
#[derive(Clone)]
pub struct CatalogState {
    pub pool: DbPool,
    pub config: CatalogConfig,
}

impl CatalogState {
    async fn conn(&self) -> Result<PooledConnection, ApiError> {
        let conn = self.pool.get().await.map_err(|e| {
            tracing::error!("Connection pool error: {e}");
            StoreError::Unavailable(e.to_string())
        })?;
        Ok(conn)
    }
}

/// Build the catalog's Axum router.
pub fn catalog_router(state: CatalogState) -> Router {
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    Router::new()
        // Movies
        .route("/movies/", get(list_movies))
        .route("/movies/{movie_id}", get(get_movie))
        // Directors
        .route("/director/", post(create_director))
        .route(
            "/director/{director_id}",
            put(update_director).delete(delete_director),
        )
        // Genres
        .route("/genre/", post(create_genre))
        .route("/genre/{genre_id}", put(update_genre).delete(delete_genre))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(timeout_layer(timeout)),
        )
}

/// Requests running past `timeout` are answered with 408.
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

// ── Movies ──

async fn list_movies(
    State(state): State<CatalogState>,
    Query(query): Query<MovieQuery>,
) -> Result<Json<Vec<api::MovieJson>>, ApiError> {
    let filter = MovieFilter::try_from(query).map_err(|e| {
        tracing::debug!("Rejected movie filter: {e}");
        ApiError::BadRequest(e.to_string())
    })?;

    let mut conn = state.conn().await?;
    let movies = movie_service::list_movies(&mut conn, filter).await?;
    crate::metrics::movies_listed(movies.len());

    if movies.is_empty() {
        crate::metrics::not_found("movie");
        return Err(ApiError::NotFound);
    }
    Ok(Json(movies.into_iter().map(api::MovieJson::from).collect()))
}

async fn get_movie(
    State(state): State<CatalogState>,
    Path(movie_id): Path<i32>,
) -> Result<Json<api::MovieJson>, ApiError> {
    let mut conn = state.conn().await?;

    match movie_service::get_movie(&mut conn, movie_id).await? {
        Some(movie) => Ok(Json(movie.into())),
        None => {
            crate::metrics::not_found("movie");
            Err(ApiError::NotFound)
        }
    }
}

// ── Directors ──

async fn create_director(
    State(state): State<CatalogState>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let mut conn = state.conn().await?;

    let created = match EntityPayload::parse(&body) {
        Ok(payload) => director_service::create_director(&mut conn, payload).await,
        Err(e) => Err(e),
    };
    api::created(created, "director")
}

async fn update_director(
    State(state): State<CatalogState>,
    Path(director_id): Path<i32>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let mut conn = state.conn().await?;

    // A missing record is reported before the body is looked at.
    let updated = match director_service::get_director(&mut conn, director_id).await {
        Ok(Some(_)) => match EntityPayload::parse_replace(&body) {
            Ok(payload) => director_service::update_director(&mut conn, director_id, payload).await,
            Err(e) => Err(e),
        },
        other => other,
    };
    api::replaced(updated, "director")
}

async fn delete_director(
    State(state): State<CatalogState>,
    Path(director_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let mut conn = state.conn().await?;
    api::removed(
        director_service::delete_director(&mut conn, director_id).await,
        "director",
    )
}

// ── Genres ──

async fn create_genre(
    State(state): State<CatalogState>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let mut conn = state.conn().await?;

    let created = match EntityPayload::parse(&body) {
        Ok(payload) => genre_service::create_genre(&mut conn, payload).await,
        Err(e) => Err(e),
    };
    api::created(created, "genre")
}

async fn update_genre(
    State(state): State<CatalogState>,
    Path(genre_id): Path<i32>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let mut conn = state.conn().await?;

    let updated = match genre_service::get_genre(&mut conn, genre_id).await {
        Ok(Some(_)) => match EntityPayload::parse_replace(&body) {
            Ok(payload) => genre_service::update_genre(&mut conn, genre_id, payload).await,
            Err(e) => Err(e),
        },
        other => other,
    };
    api::replaced(updated, "genre")
}

async fn delete_genre(
    State(state): State<CatalogState>,
    Path(genre_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let mut conn = state.conn().await?;
    api::removed(genre_service::delete_genre(&mut conn, genre_id).await, "genre")
}
