// src/integrations/movie_api/client.rs
//
// Movie REST API client
//
// ARCHITECTURE:
// - reqwest client bound to the configured base URL and timeout
// - Implements `MovieRepository`: one HTTP call per method, no loops, no retries
// - Translates wire records through `wire::map_wire_movie` (NO domain validation here)
// - Error messages come from the server's payload when present, else from the transport

use async_trait::async_trait;
use log::{debug, error};
use reqwest::{header, Client, Method, RequestBuilder, Response};
use serde::Serialize;
use std::time::Duration;

use super::wire::{error_payload_message, map_wire_movie, WireMovie, WireMovieBody, WirePage};
use crate::config::CatalogConfig;
use crate::domain::{Movie, MovieId};
use crate::error::{AppError, AppResult};
use crate::repositories::{ApiError, ApiResult, MoviePage, MovieRepository};

/// HTTP-backed movie repository
#[derive(Debug, Clone)]
pub struct MovieApiClient {
    base_url: String,
    timeout: Duration,
    http_client: Client,
}

impl MovieApiClient {
    /// Create a client from validated configuration
    pub fn new(config: &CatalogConfig) -> AppResult<Self> {
        config.validate()?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.normalized_base_url().to_string(),
            timeout: config.timeout,
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn movies_url(&self) -> String {
        format!("{}/movies", self.base_url)
    }

    fn movie_url(&self, id: MovieId) -> String {
        format!("{}/movies/{}", self.base_url, id)
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        self.http_client
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
    }

    // ========================================================================
    // INTERNAL: request execution
    // ========================================================================

    /// Send a request and return the successful response body as text
    async fn execute(&self, request: RequestBuilder, what: &str) -> ApiResult<String> {
        let response = request.send().await.map_err(|e| self.transport_error(e, what))?;
        let status = response.status();
        let body = Self::read_body(response, what).await?;

        if !status.is_success() {
            let message = error_payload_message(&body)
                .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));
            error!("API error: {} returned {}: {}", what, status, message);
            return Err(ApiError::status(status.as_u16(), message));
        }

        Ok(body)
    }

    async fn execute_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: String,
        body: &B,
        what: &str,
    ) -> ApiResult<String> {
        self.execute(self.request(method, url).json(body), what).await
    }

    async fn read_body(response: Response, what: &str) -> ApiResult<String> {
        response
            .text()
            .await
            .map_err(|e| ApiError::transport(format!("Failed to read {} response: {}", what, e)))
    }

    fn transport_error(&self, err: reqwest::Error, what: &str) -> ApiError {
        let message = if err.is_timeout() {
            format!("timeout of {}ms exceeded", self.timeout.as_millis())
        } else {
            err.to_string()
        };
        error!("API error: {} failed: {}", what, message);
        ApiError::transport(message)
    }

    fn parse_movie(body: &str, what: &str) -> ApiResult<Movie> {
        serde_json::from_str::<WireMovie>(body)
            .map(map_wire_movie)
            .map_err(|e| ApiError::transport(format!("Malformed {} response: {}", what, e)))
    }
}

#[async_trait]
impl MovieRepository for MovieApiClient {
    async fn fetch_page(&self, limit: usize, offset: usize) -> ApiResult<MoviePage> {
        debug!("GET /movies limit={} offset={}", limit, offset);

        let request = self
            .request(Method::GET, self.movies_url())
            .query(&[("limit", limit), ("offset", offset)]);
        let body = self.execute(request, "GET /movies").await?;

        let page: WirePage = serde_json::from_str(&body).map_err(|e| {
            ApiError::transport(format!(
                "Unexpected response shape, expected {{data, totalAmount}} or an array: {}",
                e
            ))
        })?;

        let (records, total_amount) = page.into_parts();
        Ok(MoviePage {
            movies: records.into_iter().map(map_wire_movie).collect(),
            total_amount,
        })
    }

    async fn fetch_by_id(&self, id: MovieId) -> ApiResult<Movie> {
        debug!("GET /movies/{}", id);
        let body = self
            .execute(self.request(Method::GET, self.movie_url(id)), "GET /movies/{id}")
            .await?;
        Self::parse_movie(&body, "GET /movies/{id}")
    }

    async fn create(&self, movie: &Movie) -> ApiResult<Movie> {
        debug!("POST /movies title={:?}", movie.title);
        let body = self
            .execute_json(Method::POST, self.movies_url(), &WireMovieBody::for_create(movie), "POST /movies")
            .await?;
        Self::parse_movie(&body, "POST /movies")
    }

    async fn update(&self, id: MovieId, movie: &Movie) -> ApiResult<Movie> {
        debug!("PUT /movies id={}", id);
        let body = self
            .execute_json(
                Method::PUT,
                self.movies_url(),
                &WireMovieBody::for_update(id, movie),
                "PUT /movies",
            )
            .await?;

        // Some backends answer a PUT with an empty body
        if body.trim().is_empty() {
            let mut updated = movie.clone();
            updated.id = Some(id);
            return Ok(updated);
        }
        Self::parse_movie(&body, "PUT /movies")
    }

    async fn delete(&self, id: MovieId) -> ApiResult<()> {
        debug!("DELETE /movies/{}", id);
        self.execute(self.request(Method::DELETE, self.movie_url(id)), "DELETE /movies/{id}")
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = MovieApiClient::new(&CatalogConfig::default()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:4000");
        assert_eq!(client.movies_url(), "http://localhost:4000/movies");
        assert_eq!(client.movie_url(MovieId(42)), "http://localhost:4000/movies/42");
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let client = MovieApiClient::new(&CatalogConfig::with_base_url("http://api.local/v1/")).unwrap();
        assert_eq!(client.movies_url(), "http://api.local/v1/movies");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(matches!(
            MovieApiClient::new(&CatalogConfig::with_base_url("not a url")),
            Err(AppError::Config(_))
        ));
    }

    // HTTP behaviour is exercised against a mock server in tests/movie_api_client.rs
}
