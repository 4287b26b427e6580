//! A movie genre.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::genre;

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = genre)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Genre {
    pub id: i32,
    pub name: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = genre)]
pub struct NewGenre {
    pub name: String,
}
