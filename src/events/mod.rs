// src/events/mod.rs
//
// Internal Event System - Public API
//
// EventHandler is INTERNAL to the bus and must NOT be exported

pub mod bus;
pub mod types;

pub use types::{CatalogRefreshed, DomainEvent, MovieCreated, MovieDeleted, MovieUpdated};

pub use bus::{EventBus, EventLogEntry};
