// src/domain/view/value_objects.rs
//
// View Parameters - the three user-controlled inputs of the projector.
//
// Pure values: no I/O, no reference to the collection they are applied to.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

// ============================================================================
// GENRE FILTER
// ============================================================================

/// Genre selection offered by the catalog, `All` being the no-op sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GenreFilter {
    #[default]
    All,
    Action,
    Crime,
    Horror,
    Comedy,
    Documentary,
    Drama,
}

impl GenreFilter {
    /// Display order of the genre tabs
    pub const ALL_OPTIONS: [GenreFilter; 7] = [
        GenreFilter::All,
        GenreFilter::Action,
        GenreFilter::Crime,
        GenreFilter::Horror,
        GenreFilter::Comedy,
        GenreFilter::Documentary,
        GenreFilter::Drama,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GenreFilter::All => "ALL",
            GenreFilter::Action => "ACTION",
            GenreFilter::Crime => "CRIME",
            GenreFilter::Horror => "HORROR",
            GenreFilter::Comedy => "COMEDY",
            GenreFilter::Documentary => "DOCUMENTARY",
            GenreFilter::Drama => "DRAMA",
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, GenreFilter::All)
    }

    /// Lowercase needles a genre label must contain to match this filter.
    /// Empty for `All`.
    pub fn needles(&self) -> &'static [&'static str] {
        match self {
            GenreFilter::All => &[],
            GenreFilter::Action => &["action", "adventure"],
            GenreFilter::Crime => &["crime"],
            GenreFilter::Horror => &["horror"],
            GenreFilter::Comedy => &["comedy"],
            GenreFilter::Documentary => &["documentary"],
            GenreFilter::Drama => &["drama"],
        }
    }
}

impl std::fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenreFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        GenreFilter::ALL_OPTIONS
            .iter()
            .copied()
            .find(|g| g.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownOption(format!("genre '{}'", s)))
    }
}

// ============================================================================
// SORT KEY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Title,
    Rating,
    #[default]
    ReleaseDate,
}

impl SortBy {
    pub const ALL_OPTIONS: [SortBy; 3] = [SortBy::ReleaseDate, SortBy::Title, SortBy::Rating];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Title => "title",
            SortBy::Rating => "rating",
            SortBy::ReleaseDate => "release_date",
        }
    }

    /// Label of the sort option in the catalog header
    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Title => "TITLE",
            SortBy::Rating => "RATING",
            SortBy::ReleaseDate => "RELEASE DATE",
        }
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(SortBy::Title),
            "rating" => Ok(SortBy::Rating),
            "release_date" | "releasedate" | "release-date" => Ok(SortBy::ReleaseDate),
            _ => Err(DomainError::UnknownOption(format!("sort key '{}'", s))),
        }
    }
}

// ============================================================================
// VIEW PARAMETERS
// ============================================================================

/// The full set of inputs the projector needs besides the collection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewParams {
    pub search_term: String,
    pub selected_genre: GenreFilter,
    pub sort_by: SortBy,
}

impl ViewParams {
    pub fn new(search_term: impl Into<String>, selected_genre: GenreFilter, sort_by: SortBy) -> Self {
        Self {
            search_term: search_term.into(),
            selected_genre,
            sort_by,
        }
    }

    /// True when the search stage filters anything
    pub fn has_search(&self) -> bool {
        !self.search_term.trim().is_empty()
    }
}
