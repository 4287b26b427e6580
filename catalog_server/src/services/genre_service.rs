//! Genre CRUD.

use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::db::DbConnection;
use crate::error::{StoreError, StoreResult};
use crate::models::genre::{Genre, NewGenre};
use crate::models::payload::EntityPayload;
use crate::schema::genre;

/// List all genres.
pub async fn list_genres(conn: &mut DbConnection) -> StoreResult<Vec<Genre>> {
    let results = genre::table
        .order(genre::id.asc())
        .load::<Genre>(conn)
        .await?;
    Ok(results)
}

/// Get a genre by ID.
pub async fn get_genre(conn: &mut DbConnection, genre_id: i32) -> StoreResult<Option<Genre>> {
    let result = genre::table
        .find(genre_id)
        .first::<Genre>(conn)
        .await
        .optional()?;
    Ok(result)
}

/// Create a genre. Any `id` in the payload is ignored; the store assigns one.
pub async fn create_genre(conn: &mut DbConnection, payload: EntityPayload) -> StoreResult<Genre> {
    let new_genre = NewGenre {
        name: payload.require_name()?,
    };

    let result = conn
        .transaction::<_, StoreError, _>(|conn| {
            async move {
                let created = diesel::insert_into(genre::table)
                    .values(&new_genre)
                    .get_result::<Genre>(conn)
                    .await?;
                Ok(created)
            }
            .scope_boxed()
        })
        .await?;

    crate::metrics::mutation("genre", "create");
    tracing::info!(genre_id = result.id, "Genre created");
    Ok(result)
}

/// Replace a genre's fields. Returns `None` when the ID does not exist.
///
/// A payload `id` moves the record to that key; without one the key is kept.
/// A missing `name` is stored as NULL.
pub async fn update_genre(
    conn: &mut DbConnection,
    genre_id: i32,
    payload: EntityPayload,
) -> StoreResult<Option<Genre>> {
    let result = conn
        .transaction::<_, StoreError, _>(|conn| {
            async move {
                let exists = genre::table
                    .find(genre_id)
                    .select(genre::id)
                    .first::<i32>(conn)
                    .await
                    .optional()?
                    .is_some();
                if !exists {
                    return Ok(None);
                }

                let updated = diesel::update(genre::table.find(genre_id))
                    .set((
                        genre::id.eq(payload.id.unwrap_or(genre_id)),
                        genre::name.eq(payload.name),
                    ))
                    .get_result::<Genre>(conn)
                    .await?;
                Ok(Some(updated))
            }
            .scope_boxed()
        })
        .await?;

    if let Some(updated) = &result {
        crate::metrics::mutation("genre", "update");
        tracing::info!(genre_id, new_id = updated.id, "Genre updated");
    }
    Ok(result)
}

/// Delete a genre. Movies that reference it keep their `genre_id`.
pub async fn delete_genre(conn: &mut DbConnection, genre_id: i32) -> StoreResult<bool> {
    let deleted = conn
        .transaction::<_, StoreError, _>(|conn| {
            async move {
                let rows = diesel::delete(genre::table.find(genre_id))
                    .execute(conn)
                    .await?;
                Ok(rows > 0)
            }
            .scope_boxed()
        })
        .await?;

    if deleted {
        crate::metrics::mutation("genre", "delete");
        tracing::info!(genre_id, "Genre deleted");
    }
    Ok(deleted)
}
