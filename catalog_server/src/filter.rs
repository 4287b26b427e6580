//! Movie listing filter: optional equality on `director_id` and `genre_id`.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use serde::Deserialize;
use thiserror::Error;

use crate::schema::movie;

/// Raw query string of `GET /movies/`. Values are parsed by [`MovieFilter`].
#[derive(Debug, Default, Deserialize)]
pub struct MovieQuery {
    pub director_id: Option<String>,
    pub genre_id: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("query parameter `{name}` must be an integer, got {value:?}")]
    InvalidParameter { name: &'static str, value: String },
}

/// Absent parameters match everything; present ones are ANDed together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovieFilter {
    pub director_id: Option<i32>,
    pub genre_id: Option<i32>,
}

impl MovieFilter {
    pub fn apply<'a>(
        &self,
        mut query: movie::BoxedQuery<'a, Sqlite>,
    ) -> movie::BoxedQuery<'a, Sqlite> {
        if let Some(director_id) = self.director_id {
            query = query.filter(movie::director_id.eq(director_id));
        }
        if let Some(genre_id) = self.genre_id {
            query = query.filter(movie::genre_id.eq(genre_id));
        }
        query
    }
}

impl TryFrom<MovieQuery> for MovieFilter {
    type Error = FilterError;

    fn try_from(query: MovieQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            director_id: parse_id("director_id", query.director_id)?,
            genre_id: parse_id("genre_id", query.genre_id)?,
        })
    }
}

fn parse_id(name: &'static str, raw: Option<String>) -> Result<Option<i32>, FilterError> {
    raw.map(|value| {
        value
            .trim()
            .parse()
            .map_err(|_| FilterError::InvalidParameter { name, value })
    })
    .transpose()
}
