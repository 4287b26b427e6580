//! Shared harness: a fresh SQLite catalog per test, driven through the router.

#![allow(dead_code)]

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use tempfile::TempDir;
use tower::ServiceExt;

use movie_catalog::config::CatalogConfig;
use movie_catalog::db::{self, DbPool, PooledConnection};
use movie_catalog::models::movie::{Movie, NewMovie};
use movie_catalog::routes::{catalog_router, CatalogState};
use movie_catalog::services::movie_service;

pub struct TestCatalog {
    // Keeps the database file alive for the test's duration.
    _dir: TempDir,
    pub pool: DbPool,
    router: Router,
}

impl TestCatalog {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog.db");
        let config = CatalogConfig {
            pool_max_size: 2,
            ..CatalogConfig::default()
        };

        let pool = db::create_pool(path.to_str().expect("utf-8 path"), &config).expect("pool");
        {
            let mut conn = pool.get().await.expect("connection");
            db::ensure_schema(&mut conn).await.expect("schema");
        }

        let router = catalog_router(CatalogState {
            pool: pool.clone(),
            config,
        });

        Self {
            _dir: dir,
            pool,
            router,
        }
    }

    pub async fn conn(&self) -> PooledConnection {
        self.pool.get().await.expect("connection")
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Bytes) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .expect("request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("infallible router");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, bytes)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Bytes) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: &str) -> (StatusCode, Bytes) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: &str) -> (StatusCode, Bytes) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Bytes) {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn insert_movie(&self, new_movie: NewMovie) -> Movie {
        let mut conn = self.conn().await;
        movie_service::insert_movie(&mut conn, new_movie)
            .await
            .expect("insert movie")
    }
}

pub fn movie(title: &str, director_id: Option<i32>, genre_id: Option<i32>) -> NewMovie {
    NewMovie {
        title: Some(title.to_string()),
        director_id,
        genre_id,
        ..NewMovie::default()
    }
}

pub fn json(bytes: &Bytes) -> serde_json::Value {
    serde_json::from_slice(bytes).expect("json body")
}

pub fn titles(bytes: &Bytes) -> Vec<String> {
    json(bytes)
        .as_array()
        .expect("array body")
        .iter()
        .map(|m| m["title"].as_str().unwrap_or_default().to_string())
        .collect()
}
