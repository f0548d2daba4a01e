// src/integrations/mod.rs
//
// External Integrations Module

pub mod movie_api;

pub use movie_api::MovieApiClient;
