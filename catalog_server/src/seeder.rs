//! Catalog seeder. Loads directors, genres and movies from a JSON fixture.

use std::path::Path;

use anyhow::Context;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use serde::Deserialize;

use crate::db::DbConnection;
use crate::models::director::Director;
use crate::models::genre::Genre;
use crate::models::movie::NewMovie;
use crate::schema::{director, genre, movie};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogFixture {
    pub directors: Vec<Director>,
    pub genres: Vec<Genre>,
    pub movies: Vec<NewMovie>,
}

/// Rows actually written by a seeding run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub directors: usize,
    pub genres: usize,
    pub movies: usize,
}

/// Read a fixture file and seed it.
pub async fn seed_from_file(conn: &mut DbConnection, path: &Path) -> anyhow::Result<SeedReport> {
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading seed file {}", path.display()))?;
    let fixture: CatalogFixture = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing seed file {}", path.display()))?;
    seed(conn, fixture).await
}

/// Insert fixture rows in one transaction.
///
/// Idempotent: rows whose key already exists are skipped (`INSERT OR IGNORE`).
/// Movies without an `id` get a fresh key on every run.
pub async fn seed(conn: &mut DbConnection, fixture: CatalogFixture) -> anyhow::Result<SeedReport> {
    let report = conn
        .transaction::<_, diesel::result::Error, _>(|conn| {
            async move {
                let mut report = SeedReport::default();
                for row in &fixture.directors {
                    report.directors += diesel::insert_or_ignore_into(director::table)
                        .values(row)
                        .execute(conn)
                        .await?;
                }
                for row in &fixture.genres {
                    report.genres += diesel::insert_or_ignore_into(genre::table)
                        .values(row)
                        .execute(conn)
                        .await?;
                }
                for row in &fixture.movies {
                    report.movies += diesel::insert_or_ignore_into(movie::table)
                        .values(row)
                        .execute(conn)
                        .await?;
                }
                Ok(report)
            }
            .scope_boxed()
        })
        .await
        .context("seeding catalog")?;

    tracing::info!(
        directors = report.directors,
        genres = report.genres,
        movies = report.movies,
        "Catalog seeded"
    );
    Ok(report)
}
