//! Diesel table definitions for the catalog.
//!
//! Tables: movie, director, genre. `movie.genre_id` and `movie.director_id`
//! point at genre/director rows but are not enforced by the store.

diesel::table! {
    director (id) {
        id -> Integer,
        name -> Nullable<Text>,
    }
}

diesel::table! {
    genre (id) {
        id -> Integer,
        name -> Nullable<Text>,
    }
}

diesel::table! {
    movie (id) {
        id -> Integer,
        title -> Nullable<Text>,
        description -> Nullable<Text>,
        trailer -> Nullable<Text>,
        year -> Nullable<Integer>,
        rating -> Nullable<Double>,
        genre_id -> Nullable<Integer>,
        director_id -> Nullable<Integer>,
    }
}

diesel::allow_tables_to_appear_in_same_query!(director, genre, movie);
