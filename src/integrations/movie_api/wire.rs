// src/integrations/movie_api/wire.rs
//
// Wire shapes of the movie backend and the ONE mapping to/from `Movie`.
//
// The backend (and older clients writing to it) is loose about field names:
// `genres[]` vs comma-separated `genre`, `poster_path` / `poster` / `url`,
// `vote_average` / `rating`, `release_date` / `releaseDate` / `year`, and a
// runtime that is either minutes or display text. All of that is resolved
// here; nothing past this module branches on which field was present.

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::domain::{Movie, MovieId, Runtime, MAX_RATING, MIN_RATING};

// ============================================================================
// INCOMING
// ============================================================================

/// Listing response: pagination envelope or bare array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum WirePage {
    Envelope {
        data: Vec<WireMovie>,
        #[serde(rename = "totalAmount", default)]
        total_amount: Option<u64>,
    },
    Bare(Vec<WireMovie>),
}

impl WirePage {
    pub(crate) fn into_parts(self) -> (Vec<WireMovie>, Option<u64>) {
        match self {
            WirePage::Envelope { data, total_amount } => (data, total_amount),
            WirePage::Bare(data) => (data, None),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireMovie {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default, rename = "releaseDate")]
    release_date_camel: Option<String>,
    #[serde(default)]
    year: Option<WireYear>,
    #[serde(default)]
    genres: Option<Vec<String>>,
    #[serde(default)]
    genre: Option<String>,
    #[serde(default)]
    vote_average: Option<f64>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    runtime: Option<WireRuntime>,
    #[serde(default)]
    overview: Option<String>,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    poster: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    tagline: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireRuntime {
    Minutes(u32),
    Fractional(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireYear {
    Number(i32),
    Text(String),
}

/// Total mapping from a wire record to the canonical movie
pub(crate) fn map_wire_movie(wire: WireMovie) -> Movie {
    let release_date = [wire.release_date.as_deref(), wire.release_date_camel.as_deref()]
        .into_iter()
        .flatten()
        .find_map(parse_release_date)
        .or_else(|| wire.year.as_ref().and_then(year_to_date));

    let genres = match wire.genres {
        Some(list) if !list.is_empty() => clean_labels(list),
        _ => wire.genre.as_deref().map(split_genre_labels).unwrap_or_default(),
    };

    let rating = wire.vote_average.or(wire.rating).and_then(normalize_rating);

    let runtime = wire.runtime.and_then(|r| match r {
        WireRuntime::Minutes(m) => Some(Runtime::from_minutes(m)),
        WireRuntime::Fractional(m) if m.is_finite() && m >= 0.0 => {
            Some(Runtime::from_minutes(m.round() as u32))
        }
        WireRuntime::Fractional(_) => None,
        WireRuntime::Text(text) => Runtime::parse(&text),
    });

    let poster_url = [wire.poster_path, wire.poster, wire.url]
        .into_iter()
        .flatten()
        .map(|p| p.trim().to_string())
        .find(|p| !p.is_empty());

    Movie {
        id: wire.id.map(MovieId),
        title: wire.title.unwrap_or_default(),
        release_date,
        genres,
        rating,
        runtime,
        overview: wire.overview.unwrap_or_default(),
        poster_url,
        tagline: wire.tagline.filter(|t| !t.trim().is_empty()),
    }
}

/// Accepts `YYYY-MM-DD` and anything starting with it (e.g. RFC 3339 timestamps)
pub(crate) fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn year_to_date(year: &WireYear) -> Option<NaiveDate> {
    let year = match year {
        WireYear::Number(y) => *y,
        WireYear::Text(text) => text.trim().parse().ok()?,
    };
    NaiveDate::from_ymd_opt(year, 1, 1)
}

fn normalize_rating(rating: f64) -> Option<f64> {
    if !rating.is_finite() {
        return None;
    }
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        warn!("Clamping out-of-range rating {} from backend", rating);
        return Some(rating.clamp(MIN_RATING, MAX_RATING));
    }
    Some(rating)
}

fn clean_labels(labels: Vec<String>) -> Vec<String> {
    labels
        .into_iter()
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
        .collect()
}

/// `"Crime, Drama"` → `["Crime", "Drama"]`
pub(crate) fn split_genre_labels(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

// ============================================================================
// OUTGOING
// ============================================================================

/// JSON body for `POST /movies` and `PUT /movies`
#[derive(Debug, Serialize)]
pub(crate) struct WireMovieBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    poster_path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vote_average: Option<f64>,
    genres: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    runtime: Option<u32>,
    overview: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tagline: Option<&'a str>,
}

impl<'a> WireMovieBody<'a> {
    pub(crate) fn for_create(movie: &'a Movie) -> Self {
        Self::build(None, movie)
    }

    pub(crate) fn for_update(id: MovieId, movie: &'a Movie) -> Self {
        Self::build(Some(id.0), movie)
    }

    fn build(id: Option<i64>, movie: &'a Movie) -> Self {
        Self {
            id,
            title: &movie.title,
            release_date: movie.release_date.map(|d| d.format("%Y-%m-%d").to_string()),
            poster_path: movie.poster_url.as_deref(),
            vote_average: movie.rating,
            genres: &movie.genres,
            runtime: movie.runtime.map(|r| r.minutes()),
            overview: &movie.overview,
            tagline: movie.tagline.as_deref(),
        }
    }
}

// ============================================================================
// ERROR PAYLOADS
// ============================================================================

/// Human-readable message from an error body such as
/// `{"message": "..."}`, `{"message": ["a", "b"]}` or `{"error": "..."}`
pub(crate) fn error_payload_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("message").or_else(|| value.get("error"))?;
    match message {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        _ => None,
    }
}
