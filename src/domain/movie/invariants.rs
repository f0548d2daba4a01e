use super::entity::Movie;
use crate::domain::{DomainError, DomainResult};

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;

/// Validates all Movie invariants
/// Run before every create/update submission
pub fn validate_movie(movie: &Movie) -> DomainResult<()> {
    validate_title(&movie.title)?;
    validate_genres(&movie.genres)?;
    if let Some(rating) = movie.rating {
        validate_rating(rating)?;
    }
    Ok(())
}

/// Title cannot be empty
fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// At least one non-blank genre label
fn validate_genres(genres: &[String]) -> DomainResult<()> {
    if !genres.iter().any(|g| !g.trim().is_empty()) {
        return Err(DomainError::InvariantViolation(
            "Movie must have at least one genre".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_rating(rating: f64) -> DomainResult<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(DomainError::RatingOutOfRange(rating));
    }
    Ok(())
}

/// Invariants that must hold true for the Movie domain:
///
/// 1. Identity is assigned by the backend and never changes afterwards
/// 2. Title cannot be empty
/// 3. At least one genre label
/// 4. Rating, when present, lies in [0, 10] (NaN is rejected)
