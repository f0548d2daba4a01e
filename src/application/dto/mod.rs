// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// PRINCIPLES:
// - DTOs are UI-friendly representations (display strings, "N/A" fallbacks)
// - Form DTOs hold what the user typed; conversion to `Movie` validates it
// - Conversion FROM domain entities for display, TO domain only through the form

use chrono::NaiveDate;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{validate_rating, GenreFilter, Movie, MovieId, Runtime, SortBy};

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_OVERVIEW: &str = "No overview available.";

// ============================================================================
// MOVIE DTOs
// ============================================================================

/// Card and detail view of a movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDto {
    pub id: Option<i64>,
    pub title: String,
    pub year: String,
    pub release_date: Option<String>,
    pub genres: Vec<String>,
    /// Genres joined for display, e.g. "Drama & Romance"
    pub genre_text: String,
    pub rating: String,
    pub runtime: String,
    pub overview: String,
    pub poster_url: String,
    pub tagline: Option<String>,
}

impl From<&Movie> for MovieDto {
    fn from(movie: &Movie) -> Self {
        let genre_text = if movie.genres.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            movie.genres.join(" & ")
        };

        Self {
            id: movie.id.map(|id| id.0),
            title: movie.title.clone(),
            year: movie
                .year()
                .map(|y| y.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            release_date: movie.release_date.map(|d| d.format("%Y-%m-%d").to_string()),
            genres: movie.genres.clone(),
            genre_text,
            rating: movie
                .rating
                .map(|r| r.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            runtime: movie
                .runtime
                .map(|r| r.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            overview: if movie.overview.trim().is_empty() {
                NO_OVERVIEW.to_string()
            } else {
                movie.overview.clone()
            },
            poster_url: movie.poster_url_or_placeholder().to_string(),
            tagline: movie.tagline.clone(),
        }
    }
}

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        MovieDto::from(&movie)
    }
}

/// Result of a successful add/edit/delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessDto {
    pub message: String,
    pub movie_id: Option<i64>,
    pub movie_count: usize,
}

/// A selectable option in the catalog header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDto {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

pub fn genre_options(selected: GenreFilter) -> Vec<OptionDto> {
    GenreFilter::ALL_OPTIONS
        .iter()
        .map(|g| OptionDto {
            value: g.as_str().to_string(),
            label: g.as_str().to_string(),
            selected: *g == selected,
        })
        .collect()
}

pub fn sort_options(selected: SortBy) -> Vec<OptionDto> {
    SortBy::ALL_OPTIONS
        .iter()
        .map(|s| OptionDto {
            value: s.as_str().to_string(),
            label: s.label().to_string(),
            selected: *s == selected,
        })
        .collect()
}

pub fn movie_count_text(count: usize) -> String {
    match count {
        0 => "No movies found".to_string(),
        1 => "1 movie found".to_string(),
        n => format!("{} movies found", n),
    }
}

// ============================================================================
// FORM DTO
// ============================================================================

/// Field name → message, ordered by field name
pub type FormErrors = BTreeMap<String, String>;

/// The add/edit movie form exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieFormDto {
    pub title: String,
    /// `YYYY-MM-DD`
    pub release_date: String,
    pub movie_url: String,
    pub rating: String,
    /// Selected genres joined with ", "
    pub genre: String,
    /// "2h 30min", "95min" or plain minutes
    pub runtime: String,
    pub overview: String,
}

impl MovieFormDto {
    /// Prefill the edit form from an existing movie
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            release_date: movie
                .release_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            movie_url: movie.poster_url.clone().unwrap_or_default(),
            rating: movie.rating.map(|r| r.to_string()).unwrap_or_default(),
            genre: movie.genres.join(", "),
            runtime: movie.runtime.map(|r| r.to_string()).unwrap_or_default(),
            overview: movie.overview.clone(),
        }
    }

    /// Labels from the joined genre field
    pub fn genre_labels(&self) -> Vec<String> {
        self.genre
            .split(',')
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Check every field; all problems are reported at once
    pub fn validate(&self) -> Result<(), FormErrors> {
        self.parse().map(|_| ())
    }

    /// Convert into a canonical movie, `id` being the movie under edit (if any)
    pub fn into_movie(self, id: Option<MovieId>) -> Result<Movie, FormErrors> {
        let parsed = self.parse()?;
        Ok(Movie {
            id,
            title: self.title.trim().to_string(),
            release_date: Some(parsed.release_date),
            genres: parsed.genres,
            rating: Some(parsed.rating),
            runtime: Some(parsed.runtime),
            overview: self.overview.trim().to_string(),
            poster_url: Some(self.movie_url.trim().to_string()),
            tagline: None,
        })
    }

    fn parse(&self) -> Result<ParsedForm, FormErrors> {
        let mut errors = FormErrors::new();
        let mut fail = |field: &str, message: &str| {
            errors.insert(field.to_string(), message.to_string());
        };

        if self.title.trim().is_empty() {
            fail("title", "Title is required");
        }

        let release_date = if self.release_date.trim().is_empty() {
            fail("release_date", "Release date is required");
            None
        } else {
            let parsed = NaiveDate::parse_from_str(self.release_date.trim(), "%Y-%m-%d").ok();
            if parsed.is_none() {
                fail("release_date", "Please enter a valid date");
            }
            parsed
        };

        let url = self.movie_url.trim();
        if url.is_empty() {
            fail("movie_url", "Movie URL is required");
        } else if Url::parse(url).is_err() {
            fail("movie_url", "Please enter a valid URL");
        }

        let rating = if self.rating.trim().is_empty() {
            fail("rating", "Rating is required");
            None
        } else {
            let parsed = self
                .rating
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|r| validate_rating(*r).is_ok());
            if parsed.is_none() {
                fail("rating", "Rating must be between 0 and 10");
            }
            parsed
        };

        let genres = self.genre_labels();
        if genres.is_empty() {
            fail("genre", "Please select at least one genre");
        }

        let runtime = if self.runtime.trim().is_empty() {
            fail("runtime", "Runtime is required");
            None
        } else {
            let parsed = Runtime::parse(&self.runtime);
            if parsed.is_none() {
                fail("runtime", "Runtime must look like 2h 30min or a number of minutes");
            }
            parsed
        };

        if self.overview.trim().is_empty() {
            fail("overview", "Overview is required");
        }

        match (release_date, rating, runtime) {
            (Some(release_date), Some(rating), Some(runtime)) if errors.is_empty() => Ok(ParsedForm {
                release_date,
                rating,
                runtime,
                genres,
            }),
            _ => Err(errors),
        }
    }
}

struct ParsedForm {
    release_date: NaiveDate,
    rating: f64,
    runtime: Runtime,
    genres: Vec<String>,
}
