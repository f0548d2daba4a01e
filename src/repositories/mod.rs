// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO event emission

pub mod movie_repository;

pub use movie_repository::{ApiError, ApiResult, MoviePage, MovieRepository};

#[cfg(test)]
pub use movie_repository::MockMovieRepository;
