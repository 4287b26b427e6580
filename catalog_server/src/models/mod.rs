//! Catalog data models.

pub mod director;
pub mod genre;
pub mod movie;
pub mod payload;
