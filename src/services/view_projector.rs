// src/services/view_projector.rs
//
// View Projector
//
// Pure function from (collection, search term, genre, sort key) to the
// ordered list the display layer renders. No I/O, no state, no mutation of
// the collection: the output borrows from the snapshot it was given.
//
// Pipeline order is fixed: search → genre → sort.

use chrono::NaiveDate;
use std::cmp::Ordering;

use crate::domain::{GenreFilter, Movie, SortBy, ViewParams};

/// Run the full pipeline
pub fn project<'a>(collection: &'a [Movie], params: &ViewParams) -> Vec<&'a Movie> {
    let searched = search_stage(collection.iter(), &params.search_term);
    let filtered = genre_stage(searched, params.selected_genre);
    sort_stage(filtered, params.sort_by)
}

/// Keep records whose title, a genre label or overview contains `term`
/// (case-insensitive). A blank term keeps everything.
pub fn search_stage<'a, I>(movies: I, term: &str) -> Vec<&'a Movie>
where
    I: IntoIterator<Item = &'a Movie>,
{
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return movies.into_iter().collect();
    }
    movies
        .into_iter()
        .filter(|movie| matches_search(movie, &term))
        .collect()
}

/// `needle` must already be lowercase
pub fn matches_search(movie: &Movie, needle: &str) -> bool {
    movie.title.to_lowercase().contains(needle)
        || movie.genres.iter().any(|g| g.to_lowercase().contains(needle))
        || movie.overview.to_lowercase().contains(needle)
}

/// Keep records with a genre label matching `genre`; `All` keeps everything.
/// ACTION also matches "adventure" labels.
pub fn genre_stage<'a, I>(movies: I, genre: GenreFilter) -> Vec<&'a Movie>
where
    I: IntoIterator<Item = &'a Movie>,
{
    if genre.is_all() {
        return movies.into_iter().collect();
    }
    movies
        .into_iter()
        .filter(|movie| matches_genre(movie, genre))
        .collect()
}

pub fn matches_genre(movie: &Movie, genre: GenreFilter) -> bool {
    if genre.is_all() {
        return true;
    }
    let needles = genre.needles();
    movie.genres.iter().any(|label| {
        let label = label.to_lowercase();
        needles.iter().any(|needle| label.contains(needle))
    })
}

/// Stable sort on the primary key only; ties keep their input order
pub fn sort_stage(mut movies: Vec<&Movie>, sort_by: SortBy) -> Vec<&Movie> {
    movies.sort_by(|a, b| compare(a, b, sort_by));
    movies
}

fn compare(a: &Movie, b: &Movie, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Title => a.title.cmp(&b.title),
        SortBy::Rating => b.rating_or_zero().total_cmp(&a.rating_or_zero()),
        SortBy::ReleaseDate => release_key(b).cmp(&release_key(a)),
    }
}

/// Missing dates sort as the Unix epoch (`NaiveDate::default()`)
fn release_key(movie: &Movie) -> NaiveDate {
    movie.release_date.unwrap_or_default()
}
