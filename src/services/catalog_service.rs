// src/services/catalog_service.rs
//
// Catalog Fetcher
//
// Owns the canonical movie collection and mediates every call to the
// backend. Writes never patch the cache: the orchestrator re-runs
// `fetch_all` after a successful write.

use log::{debug, error, info, warn};
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::config::{CatalogConfig, DEFAULT_PAGE_SIZE};
use crate::domain::{validate_movie, Movie, MovieId};
use crate::error::{AppError, AppResult};
use crate::events::{CatalogRefreshed, EventBus, MovieCreated, MovieDeleted, MovieUpdated};
use crate::integrations::MovieApiClient;
use crate::repositories::{ApiError, MovieRepository};

pub struct CatalogService {
    repository: Arc<dyn MovieRepository>,
    event_bus: Arc<EventBus>,
    page_size: usize,
    collection: RwLock<Arc<[Movie]>>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn MovieRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            repository,
            event_bus,
            page_size: DEFAULT_PAGE_SIZE,
            collection: RwLock::new(Arc::from(Vec::new())),
        }
    }

    /// Service talking to the HTTP backend described by `config`
    pub fn from_config(config: &CatalogConfig, event_bus: Arc<EventBus>) -> AppResult<Self> {
        let client = MovieApiClient::new(config)?;
        Ok(Self::new(Arc::new(client), event_bus).with_page_size(config.page_size))
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Snapshot of the canonical collection as of the last successful `fetch_all`
    pub fn collection(&self) -> Arc<[Movie]> {
        Arc::clone(&self.collection.read().unwrap())
    }

    /// Drain every page of the listing endpoint, in server order.
    ///
    /// Stops when a page comes back shorter than the page size or when the
    /// accumulated count reaches the server-reported total. A page longer than
    /// the page size means the backend ignores `limit`/`offset` and already sent
    /// everything, so the loop stops there too. Any page failure
    /// discards what was accumulated and leaves the cached collection as it was.
    pub async fn fetch_all(&self) -> AppResult<Arc<[Movie]>> {
        let limit = self.page_size;
        let mut all_movies: Vec<Movie> = Vec::new();
        let mut offset = 0;
        let mut pages_fetched = 0;

        info!("Starting to fetch all movies...");

        loop {
            debug!("Fetching movies: offset={}, limit={}", offset, limit);

            let page = self
                .repository
                .fetch_page(limit, offset)
                .await
                .map_err(|e| Self::fetch_failure("Failed to fetch all movies", e))?;
            pages_fetched += 1;

            let received = page.movies.len();
            all_movies.extend(page.movies);

            match page.total_amount {
                Some(total) => info!("Fetched {} of {} movies", all_movies.len(), total),
                None => info!("Fetched {} movies", all_movies.len()),
            }

            if received > limit {
                warn!(
                    "Backend returned {} movies for a page of {}; treating it as the whole catalog",
                    received, limit
                );
                break;
            }

            let short_page = received < limit;
            let reached_total = page
                .total_amount
                .is_some_and(|total| all_movies.len() as u64 >= total);
            if short_page || reached_total {
                break;
            }
            offset += limit;
        }

        let duplicate_ids = count_duplicate_ids(&all_movies);

        let snapshot: Arc<[Movie]> = Arc::from(all_movies);
        *self.collection.write().unwrap() = Arc::clone(&snapshot);

        info!("Successfully fetched all {} movies", snapshot.len());
        self.event_bus
            .emit(CatalogRefreshed::new(snapshot.len(), pages_fetched, duplicate_ids));

        Ok(snapshot)
    }

    /// Single-record lookup. Not-found and every other failure surface as `Fetch`.
    pub async fn fetch_by_id(&self, id: MovieId) -> AppResult<Movie> {
        self.repository
            .fetch_by_id(id)
            .await
            .map_err(|e| Self::fetch_failure("Failed to fetch movie", e))
    }

    /// Submit a new movie; the backend assigns the id
    pub async fn create(&self, movie: &Movie) -> AppResult<Movie> {
        validate_for_submission(movie)?;

        let mut submission = movie.clone();
        if submission.id.take().is_some() {
            warn!("Ignoring client-side id on create for {:?}", movie.title);
        }

        let created = self
            .repository
            .create(&submission)
            .await
            .map_err(|e| Self::submission_failure("Failed to create movie", e))?;

        info!("Created movie {:?} (id: {:?})", created.title, created.id);
        self.event_bus
            .emit(MovieCreated::new(created.id, created.title.clone()));
        Ok(created)
    }

    /// Full-record replacement. A movie without id is rejected before any request.
    pub async fn update(&self, movie: &Movie) -> AppResult<Movie> {
        let id = movie.id.ok_or_else(|| {
            AppError::Validation("Movie ID is required for update".to_string())
        })?;
        validate_for_submission(movie)?;

        let updated = self
            .repository
            .update(id, movie)
            .await
            .map_err(|e| Self::submission_failure("Failed to update movie", e))?;

        info!("Updated movie {}", id);
        self.event_bus.emit(MovieUpdated::new(id));
        Ok(updated)
    }

    /// Delete by id. A missing id is rejected before any request.
    pub async fn delete_by_id(&self, id: Option<MovieId>) -> AppResult<()> {
        let id = id.ok_or_else(|| {
            AppError::Validation("Movie ID is required for deletion".to_string())
        })?;

        self.repository
            .delete(id)
            .await
            .map_err(|e| Self::submission_failure("Failed to delete movie", e))?;

        info!("Deleted movie {}", id);
        self.event_bus.emit(MovieDeleted::new(id));
        Ok(())
    }

    fn fetch_failure(context: &str, err: ApiError) -> AppError {
        error!("{}: {}", context, err);
        AppError::Fetch(format!("{}: {}", context, err.message))
    }

    fn submission_failure(context: &str, err: ApiError) -> AppError {
        error!("{}: {}", context, err);
        AppError::Submission(format!("{}: {}", context, err.message))
    }
}

/// Invariant check run before every write; failures never reach the network
fn validate_for_submission(movie: &Movie) -> AppResult<()> {
    validate_movie(movie).map_err(|e| AppError::Validation(e.to_string()))
}

/// Records sharing an id with an earlier record; each one is logged
fn count_duplicate_ids(movies: &[Movie]) -> usize {
    let mut seen = HashSet::new();
    let mut duplicates = 0;
    for id in movies.iter().filter_map(|m| m.id) {
        if !seen.insert(id) {
            warn!("Backend returned duplicate movie id {}", id);
            duplicates += 1;
        }
    }
    duplicates
}
