// src/application/commands/movie_commands.rs
//
// Movie Command Handlers
//
// RULES:
// - Accept DTOs
// - Call the catalog service
// - Re-fetch the whole catalog after every successful write
// - Return DTOs

use log::info;

use super::view_commands::visible_movies;
use crate::application::{
    dto::{MovieDto, MovieFormDto, SuccessDto},
    error_handling::ErrorResponse,
    state::AppState,
};
use crate::domain::MovieId;

pub const MOVIE_ADDED_MESSAGE: &str = "The movie has been added to database successfully";
pub const MOVIE_UPDATED_MESSAGE: &str = "The movie has been updated successfully";
pub const MOVIE_DELETED_MESSAGE: &str = "The movie has been deleted successfully";

/// Load (or reload) the whole catalog and return the visible list
pub async fn load_catalog(state: &AppState) -> Result<Vec<MovieDto>, ErrorResponse> {
    state.catalog_service.fetch_all().await?;
    Ok(visible_movies(state))
}

/// Movie detail, straight from the backend
pub async fn movie_detail(state: &AppState, movie_id: i64) -> Result<MovieDto, ErrorResponse> {
    let movie = state.catalog_service.fetch_by_id(MovieId(movie_id)).await?;
    Ok(MovieDto::from(&movie))
}

/// Edit form prefilled with the current backend record
pub async fn edit_form(state: &AppState, movie_id: i64) -> Result<MovieFormDto, ErrorResponse> {
    let movie = state.catalog_service.fetch_by_id(MovieId(movie_id)).await?;
    Ok(MovieFormDto::from_movie(&movie))
}

/// Add (`editing_id == None`) or edit a movie from the form
pub async fn submit_movie(
    state: &AppState,
    form: MovieFormDto,
    editing_id: Option<i64>,
) -> Result<SuccessDto, ErrorResponse> {
    let editing_id = editing_id.map(MovieId);
    let movie = form
        .into_movie(editing_id)
        .map_err(ErrorResponse::from_form_errors)?;

    let (saved, message) = match editing_id {
        Some(_) => (state.catalog_service.update(&movie).await?, MOVIE_UPDATED_MESSAGE),
        None => (state.catalog_service.create(&movie).await?, MOVIE_ADDED_MESSAGE),
    };

    let movie_count = state.catalog_service.fetch_all().await?.len();
    info!("{} ({:?})", message, saved.title);

    Ok(SuccessDto {
        message: message.to_string(),
        movie_id: saved.id.or(editing_id).map(|id| id.0),
        movie_count,
    })
}

pub async fn delete_movie(state: &AppState, movie_id: Option<i64>) -> Result<SuccessDto, ErrorResponse> {
    let movie_id = movie_id.map(MovieId);
    state.catalog_service.delete_by_id(movie_id).await?;

    let movie_count = state.catalog_service.fetch_all().await?.len();

    Ok(SuccessDto {
        message: MOVIE_DELETED_MESSAGE.to_string(),
        movie_id: movie_id.map(|id| id.0),
        movie_count,
    })
}
