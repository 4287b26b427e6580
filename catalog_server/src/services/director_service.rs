//! Director CRUD.

use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::db::DbConnection;
use crate::error::{StoreError, StoreResult};
use crate::models::director::{Director, NewDirector};
use crate::models::payload::EntityPayload;
use crate::schema::director;

/// List all directors.
pub async fn list_directors(conn: &mut DbConnection) -> StoreResult<Vec<Director>> {
    let results = director::table
        .order(director::id.asc())
        .load::<Director>(conn)
        .await?;
    Ok(results)
}

/// Get a director by ID.
pub async fn get_director(conn: &mut DbConnection, director_id: i32) -> StoreResult<Option<Director>> {
    let result = director::table
        .find(director_id)
        .first::<Director>(conn)
        .await
        .optional()?;
    Ok(result)
}

/// Create a director. Any `id` in the payload is ignored; the store assigns one.
pub async fn create_director(conn: &mut DbConnection, payload: EntityPayload) -> StoreResult<Director> {
    let new_director = NewDirector {
        name: payload.require_name()?,
    };

    let result = conn
        .transaction::<_, StoreError, _>(|conn| {
            async move {
                let created = diesel::insert_into(director::table)
                    .values(&new_director)
                    .get_result::<Director>(conn)
                    .await?;
                Ok(created)
            }
            .scope_boxed()
        })
        .await?;

    crate::metrics::mutation("director", "create");
    tracing::info!(director_id = result.id, "Director created");
    Ok(result)
}

/// Replace a director's fields. Returns `None` when the ID does not exist.
///
/// A payload `id` moves the record to that key; without one the key is kept.
/// A missing `name` is stored as NULL.
pub async fn update_director(
    conn: &mut DbConnection,
    director_id: i32,
    payload: EntityPayload,
) -> StoreResult<Option<Director>> {
    let result = conn
        .transaction::<_, StoreError, _>(|conn| {
            async move {
                let exists = director::table
                    .find(director_id)
                    .select(director::id)
                    .first::<i32>(conn)
                    .await
                    .optional()?
                    .is_some();
                if !exists {
                    return Ok(None);
                }

                let updated = diesel::update(director::table.find(director_id))
                    .set((
                        director::id.eq(payload.id.unwrap_or(director_id)),
                        director::name.eq(payload.name),
                    ))
                    .get_result::<Director>(conn)
                    .await?;
                Ok(Some(updated))
            }
            .scope_boxed()
        })
        .await?;

    if let Some(updated) = &result {
        crate::metrics::mutation("director", "update");
        tracing::info!(director_id, new_id = updated.id, "Director updated");
    }
    Ok(result)
}

/// Delete a director. Movies that reference it keep their `director_id`.
pub async fn delete_director(conn: &mut DbConnection, director_id: i32) -> StoreResult<bool> {
    let deleted = conn
        .transaction::<_, StoreError, _>(|conn| {
            async move {
                let rows = diesel::delete(director::table.find(director_id))
                    .execute(conn)
                    .await?;
                Ok(rows > 0)
            }
            .scope_boxed()
        })
        .await?;

    if deleted {
        crate::metrics::mutation("director", "delete");
        tracing::info!(director_id, "Director deleted");
    }
    Ok(deleted)
}
