pub mod entity;
pub mod invariants;

pub use entity::{Movie, MovieId, Runtime, POSTER_PLACEHOLDER_URL};
pub use invariants::{validate_movie, validate_rating, MAX_RATING, MIN_RATING};
