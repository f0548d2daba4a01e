// src/application/commands/view_commands.rs
//
// View Command Handlers
//
// RULES:
// - Only touch the view parameters, never the network
// - Every handler returns the recomputed visible list

use crate::application::{
    dto::{self, MovieDto, OptionDto},
    error_handling::ErrorResponse,
    state::AppState,
};
use crate::domain::{GenreFilter, SortBy, ViewParams};
use crate::services::view_projector;

/// The list the display layer should render right now
pub fn visible_movies(state: &AppState) -> Vec<MovieDto> {
    let collection = state.catalog_service.collection();
    let params = state.view_params();
    view_projector::project(&collection, &params)
        .into_iter()
        .map(MovieDto::from)
        .collect()
}

/// "No movies found" / "1 movie found" / "N movies found"
pub fn visible_count_text(state: &AppState) -> String {
    let collection = state.catalog_service.collection();
    let params = state.view_params();
    dto::movie_count_text(view_projector::project(&collection, &params).len())
}

/// Live search. A non-blank term resets the genre tab to ALL.
pub fn set_search_term(state: &AppState, term: &str) -> Vec<MovieDto> {
    state.update_view(|view| {
        view.search_term = term.to_string();
        if !term.trim().is_empty() {
            view.selected_genre = GenreFilter::All;
        }
    });
    visible_movies(state)
}

pub fn clear_search(state: &AppState) -> Vec<MovieDto> {
    set_search_term(state, "")
}

/// Select a genre tab. Any genre other than ALL clears the search term.
pub fn set_genre(state: &AppState, genre: &str) -> Result<Vec<MovieDto>, ErrorResponse> {
    let genre = genre.parse::<GenreFilter>().map_err(|e| ErrorResponse::from_app_error(e.into()))?;
    state.update_view(|view| {
        view.selected_genre = genre;
        if !genre.is_all() {
            view.search_term.clear();
        }
    });
    Ok(visible_movies(state))
}

pub fn set_sort(state: &AppState, sort_by: &str) -> Result<Vec<MovieDto>, ErrorResponse> {
    let sort_by = sort_by.parse::<SortBy>().map_err(|e| ErrorResponse::from_app_error(e.into()))?;
    state.update_view(|view| view.sort_by = sort_by);
    Ok(visible_movies(state))
}

pub fn view_params(state: &AppState) -> ViewParams {
    state.view_params()
}

pub fn genre_options(state: &AppState) -> Vec<OptionDto> {
    dto::genre_options(state.view_params().selected_genre)
}

pub fn sort_options(state: &AppState) -> Vec<OptionDto> {
    dto::sort_options(state.view_params().sort_by)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error_handling::ErrorType;
    use crate::events::EventBus;
    use crate::repositories::MockMovieRepository;
    use crate::services::CatalogService;
    use std::sync::Arc;

    fn empty_state() -> AppState {
        let bus = Arc::new(EventBus::new());
        let service = Arc::new(CatalogService::new(Arc::new(MockMovieRepository::new()), Arc::clone(&bus)));
        AppState::new(service, bus)
    }

    #[test]
    fn test_set_genre_parses_case_insensitively() {
        let state = empty_state();
        set_search_term(&state, "heat");

        assert!(set_genre(&state, "crime").is_ok());
        let view = view_params(&state);
        assert_eq!(view.selected_genre, GenreFilter::Crime);
        assert_eq!(view.search_term, "");
    }

    #[test]
    fn test_unknown_genre_is_a_domain_error() {
        let state = empty_state();

        let err = set_genre(&state, "WESTERN").unwrap_err();
        assert_eq!(err.error_type, ErrorType::DomainError);
        assert_eq!(view_params(&state).selected_genre, GenreFilter::All);
    }

    #[test]
    fn test_set_sort_updates_view() {
        let state = empty_state();

        assert!(set_sort(&state, "rating").is_ok());
        assert_eq!(view_params(&state).sort_by, SortBy::Rating);

        let err = set_sort(&state, "popularity").unwrap_err();
        assert_eq!(err.error_type, ErrorType::DomainError);
        assert_eq!(view_params(&state).sort_by, SortBy::Rating);
    }

    #[test]
    fn test_options_mark_current_selection() {
        let state = empty_state();
        set_sort(&state, "title").unwrap();

        let selected: Vec<String> = sort_options(&state)
            .into_iter()
            .filter(|o| o.selected)
            .map(|o| o.value)
            .collect();
        assert_eq!(selected, vec!["title".to_string()]);
        assert_eq!(genre_options(&state).len(), GenreFilter::ALL_OPTIONS.len());
        assert_eq!(visible_count_text(&state), "No movies found");
    }
}
