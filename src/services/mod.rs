// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_service;
pub mod view_projector;

#[cfg(test)]
mod catalog_service_tests;

pub use catalog_service::CatalogService;

pub use view_projector::{genre_stage, matches_genre, matches_search, project, search_stage, sort_stage};
