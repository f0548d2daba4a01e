// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod movie;
pub mod view;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Movie Domain
pub use movie::{
    validate_movie, validate_rating, Movie, MovieId, Runtime, MAX_RATING, MIN_RATING, POSTER_PLACEHOLDER_URL,
};

// View Parameters
pub use view::{GenreFilter, SortBy, ViewParams};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Rating {0} is outside the range 0-10")]
    RatingOutOfRange(f64),

    #[error("Unknown option: {0}")]
    UnknownOption(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
