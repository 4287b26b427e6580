//! A film director.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::director;

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = director)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Director {
    pub id: i32,
    pub name: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = director)]
pub struct NewDirector {
    pub name: String,
}
