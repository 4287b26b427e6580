//! Entity store: reads and transactional writes per entity.

pub mod director_service;
pub mod genre_service;
pub mod movie_service;
