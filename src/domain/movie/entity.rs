use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Poster shown when a movie carries no cover art reference.
pub const POSTER_PLACEHOLDER_URL: &str =
    "https://via.placeholder.com/400x600/333333/ffffff?text=No+Image";

/// Server-assigned movie identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub i64);

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MovieId {
    fn from(value: i64) -> Self {
        MovieId(value)
    }
}

/// Canonical movie record
///
/// One shape for the whole crate. The wire format (field aliases, string
/// vs. integer runtime, single vs. multiple genres) is translated once in
/// `integrations::movie_api`, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Absent until the backend assigns one
    pub id: Option<MovieId>,

    pub title: String,

    pub release_date: Option<NaiveDate>,

    /// Genre labels, at least one for a persisted movie
    pub genres: Vec<String>,

    /// Score in [0, 10]; `None` when the backend has no rating
    pub rating: Option<f64>,

    pub runtime: Option<Runtime>,

    pub overview: String,

    pub poster_url: Option<String>,

    pub tagline: Option<String>,
}

impl Movie {
    /// Create a movie that has not been submitted yet (no id)
    pub fn new(title: impl Into<String>, genres: Vec<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            release_date: None,
            genres,
            rating: None,
            runtime: None,
            overview: String::new(),
            poster_url: None,
            tagline: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(MovieId(id));
        self
    }

    /// Release year, derived from the release date
    pub fn year(&self) -> Option<i32> {
        self.release_date.map(|d| d.year())
    }

    pub fn poster_url_or_placeholder(&self) -> &str {
        match self.poster_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => POSTER_PLACEHOLDER_URL,
        }
    }

    /// Rating used for ordering; missing counts as zero
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }
}

/// Movie length in whole minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Runtime(u32);

impl Runtime {
    pub fn from_minutes(minutes: u32) -> Self {
        Runtime(minutes)
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }

    /// Parse the free-text forms users type into the runtime field:
    /// `"2h 30min"`, `"2h30m"`, `"2 h"`, `"45min"`, `"45 min"` or bare `"150"`.
    pub fn parse(text: &str) -> Option<Runtime> {
        let text = text.trim().to_lowercase();
        if text.is_empty() {
            return None;
        }

        if let Ok(minutes) = text.parse::<u32>() {
            return Some(Runtime(minutes));
        }

        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern = PATTERN.get_or_init(|| {
            Regex::new(r"^(?:(\d+)\s*h(?:ours?|rs?)?)?\s*(?:(\d+)\s*m(?:in(?:utes?|s)?)?)?$")
                .expect("runtime pattern is valid")
        });

        let caps = pattern.captures(&text)?;
        let hours = caps.get(1).map(|m| m.as_str().parse::<u32>()).transpose().ok()?;
        let minutes = caps.get(2).map(|m| m.as_str().parse::<u32>()).transpose().ok()?;
        if hours.is_none() && minutes.is_none() {
            return None;
        }

        let total = hours
            .unwrap_or(0)
            .checked_mul(60)?
            .checked_add(minutes.unwrap_or(0))?;
        Some(Runtime(total))
    }
}

impl std::fmt::Display for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hours = self.0 / 60;
        let minutes = self.0 % 60;
        if hours > 0 {
            write!(f, "{}h {}min", hours, minutes)
        } else {
            write!(f, "{}min", minutes)
        }
    }
}
