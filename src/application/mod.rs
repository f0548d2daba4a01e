// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between a display layer and the catalog core
// - View changes stay local, writes are followed by a full re-fetch
// - Translates between DTOs and domain entities

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use dto::{FormErrors, MovieDto, MovieFormDto, OptionDto, SuccessDto};
pub use error_handling::{ErrorResponse, ErrorType};
pub use state::AppState;
