// src/lib.rs
// Movie Catalog - paginated REST fetcher and view projector
//
// Architecture:
// - Domain-centric: movie entity, invariants and view parameters live in `domain`
// - Repository seam: `MovieRepository` hides the HTTP transport
// - Event-driven: the catalog service publishes refresh/write events
// - Pure projection: search, genre and sort never touch the network
// - Application Layer: display boundary (DTOs, commands, state)

// ============================================================================
// CORE
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::CatalogConfig;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_movie,
    validate_rating,
    DomainError,
    // View parameters
    GenreFilter,
    // Movie
    Movie,
    MovieId,
    Runtime,
    SortBy,
    ViewParams,
    POSTER_PLACEHOLDER_URL,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    CatalogRefreshed, DomainEvent, EventBus, EventLogEntry, MovieCreated, MovieDeleted,
    MovieUpdated,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{ApiError, ApiResult, MoviePage, MovieRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{project, CatalogService};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, ErrorResponse, ErrorType};

// Re-export application submodules
pub use application::commands;
pub use application::dto;

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::MovieApiClient;
