//! Movie catalog: movies, directors and genres over a small REST API.
//!
//! Movies are read-only over HTTP (listing with optional `director_id` /
//! `genre_id` equality filters, lookup by id). Directors and genres support
//! create, full-replace update and delete. Storage is SQLite through diesel.

pub mod config;
pub mod db;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod models;
pub mod routes;
pub mod schema;
pub mod seeder;
pub mod services;
