// src/repositories/movie_repository.rs
//
// Movie persistence seam - one method per backend endpoint.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Movie, MovieId};

/// Failure of a single backend call
///
/// `message` is the server's error payload message when the backend sent
/// one, otherwise the transport error text.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// One page of the `/movies` listing
#[derive(Debug, Clone, PartialEq)]
pub struct MoviePage {
    pub movies: Vec<Movie>,

    /// `totalAmount` from the pagination envelope; `None` for a bare array
    pub total_amount: Option<u64>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// `GET /movies?limit=&offset=`
    async fn fetch_page(&self, limit: usize, offset: usize) -> ApiResult<MoviePage>;

    /// `GET /movies/{id}`
    async fn fetch_by_id(&self, id: MovieId) -> ApiResult<Movie>;

    /// `POST /movies`, returns the record with its assigned id
    async fn create(&self, movie: &Movie) -> ApiResult<Movie>;

    /// `PUT /movies`, full-record replacement
    async fn update(&self, id: MovieId, movie: &Movie) -> ApiResult<Movie>;

    /// `DELETE /movies/{id}`
    async fn delete(&self, id: MovieId) -> ApiResult<()>;
}
