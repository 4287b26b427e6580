//! Movie reads and seeding inserts.

use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::db::DbConnection;
use crate::error::{StoreError, StoreResult};
use crate::filter::MovieFilter;
use crate::models::movie::{Movie, NewMovie};
use crate::schema::movie;

/// List movies matching the filter, in key order.
pub async fn list_movies(conn: &mut DbConnection, filter: MovieFilter) -> StoreResult<Vec<Movie>> {
    let results = filter
        .apply(movie::table.into_boxed())
        .order(movie::id.asc())
        .load::<Movie>(conn)
        .await?;
    Ok(results)
}

/// Get a movie by ID.
pub async fn get_movie(conn: &mut DbConnection, movie_id: i32) -> StoreResult<Option<Movie>> {
    let result = movie::table
        .find(movie_id)
        .first::<Movie>(conn)
        .await
        .optional()?;
    Ok(result)
}

/// Insert a movie row. Used by the seeder; the HTTP surface is read-only.
pub async fn insert_movie(conn: &mut DbConnection, new_movie: NewMovie) -> StoreResult<Movie> {
    let result = conn
        .transaction::<_, StoreError, _>(|conn| {
            async move {
                let created = diesel::insert_into(movie::table)
                    .values(&new_movie)
                    .get_result::<Movie>(conn)
                    .await?;
                Ok(created)
            }
            .scope_boxed()
        })
        .await?;

    tracing::debug!(movie_id = result.id, "Movie inserted");
    Ok(result)
}
