//! A catalog entry, optionally linked to one genre and one director.

use diesel::prelude::*;
use serde::Deserialize;

use crate::schema::movie;

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = movie)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Movie {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

/// Movie row for seeding. `id: None` lets SQLite assign the key.
#[derive(Debug, Clone, Default, Insertable, Deserialize)]
#[diesel(table_name = movie)]
pub struct NewMovie {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}
