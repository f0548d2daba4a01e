// src/services/catalog_service_tests.rs
//
// Catalog fetcher behaviour against a mocked repository
//
// INVARIANTS TESTED:
// - fetch_all drains pages sequentially and preserves server order
// - fetch_all stops on a short page, an over-long page, or the reported total
// - a failed page discards the partial result and keeps the old snapshot
// - local validation failures issue zero backend calls

#[cfg(test)]
mod fetch_all_tests {
    use crate::domain::{Movie, MovieId};
    use crate::error::AppError;
    use crate::events::{CatalogRefreshed, EventBus};
    use crate::repositories::{ApiError, MockMovieRepository, MoviePage};
    use crate::services::CatalogService;
    use std::sync::{Arc, Mutex};

    fn numbered(start: usize, count: usize) -> Vec<Movie> {
        (start..start + count)
            .map(|n| Movie::new(format!("Movie {}", n), vec!["Drama".to_string()]).with_id(n as i64))
            .collect()
    }

    fn service(mock: MockMovieRepository) -> (CatalogService, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        (CatalogService::new(Arc::new(mock), Arc::clone(&bus)), bus)
    }

    #[tokio::test]
    async fn test_three_full_pages_and_a_partial_one() {
        let offsets = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&offsets);

        let mut mock = MockMovieRepository::new();
        mock.expect_fetch_page().times(4).returning(move |limit, offset| {
            recorded.lock().unwrap().push(offset);
            let count = if offset < 300 { limit } else { 40 };
            Ok(MoviePage {
                movies: numbered(offset, count),
                total_amount: Some(340),
            })
        });

        let (service, bus) = service(mock);
        let movies = service.fetch_all().await.unwrap();

        assert_eq!(movies.len(), 340);
        assert_eq!(*offsets.lock().unwrap(), vec![0, 100, 200, 300]);
        assert!(movies
            .iter()
            .enumerate()
            .all(|(i, m)| m.id == Some(MovieId(i as i64))));
        assert_eq!(service.collection().len(), 340);

        let log = bus.get_event_log();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].event_type, "CatalogRefreshed");
    }

    #[tokio::test]
    async fn test_stops_when_total_is_reached_on_a_full_page() {
        let mut mock = MockMovieRepository::new();
        mock.expect_fetch_page().times(2).returning(|limit, offset| {
            Ok(MoviePage {
                movies: numbered(offset, limit),
                total_amount: Some(200),
            })
        });

        let (service, _) = service(mock);
        assert_eq!(service.fetch_all().await.unwrap().len(), 200);
    }

    #[tokio::test]
    async fn test_unpaginated_backend_stops_after_first_page() {
        // Backend ignores limit/offset and returns its whole catalog every time
        let mut mock = MockMovieRepository::new();
        mock.expect_fetch_page().times(1).returning(|_, _| {
            Ok(MoviePage {
                movies: numbered(1, 150),
                total_amount: None,
            })
        });

        let (service, bus) = service(mock);
        let movies = service.fetch_all().await.unwrap();

        assert_eq!(movies.len(), 150);
        assert_eq!(service.collection().len(), 150);
        assert_eq!(bus.get_event_log().len(), 1);
    }

    #[tokio::test]
    async fn test_refresh_event_reports_duplicate_ids() {
        let mut mock = MockMovieRepository::new();
        mock.expect_fetch_page().times(1).returning(|_, _| {
            let mut movies = numbered(1, 3);
            movies.push(Movie::new("Movie 2 again", vec!["Drama".to_string()]).with_id(2));
            Ok(MoviePage {
                movies,
                total_amount: Some(4),
            })
        });

        let (service, bus) = service(mock);
        let refreshed = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&refreshed);
        bus.subscribe::<CatalogRefreshed, _>(move |event| {
            recorded.lock().unwrap().push((event.movie_count, event.duplicate_ids));
        });

        let movies = service.fetch_all().await.unwrap();

        // Server order is kept, duplicates included
        assert_eq!(movies.len(), 4);
        assert_eq!(movies[3].id, Some(MovieId(2)));
        assert_eq!(*refreshed.lock().unwrap(), vec![(4, 1)]);
    }

    #[tokio::test]
    async fn test_bare_pages_stop_on_short_page() {
        let mut mock = MockMovieRepository::new();
        mock.expect_fetch_page().times(3).returning(|limit, offset| {
            let count = if offset < 2 * limit { limit } else { 0 };
            Ok(MoviePage {
                movies: numbered(offset, count),
                total_amount: None,
            })
        });

        let (service, _) = service(mock);
        assert_eq!(service.fetch_all().await.unwrap().len(), 200);
    }

    #[tokio::test]
    async fn test_custom_page_size() {
        let mut mock = MockMovieRepository::new();
        mock.expect_fetch_page()
            .withf(|limit, _| *limit == 10)
            .times(3)
            .returning(|limit, offset| {
                let count = if offset < 20 { limit } else { 5 };
                Ok(MoviePage {
                    movies: numbered(offset, count),
                    total_amount: Some(25),
                })
            });

        let (service, _) = service(mock);
        let service = service.with_page_size(10);
        assert_eq!(service.fetch_all().await.unwrap().len(), 25);
    }

    #[tokio::test]
    async fn test_empty_catalog() {
        let mut mock = MockMovieRepository::new();
        mock.expect_fetch_page().times(1).returning(|_, _| {
            Ok(MoviePage {
                movies: vec![],
                total_amount: Some(0),
            })
        });

        let (service, _) = service(mock);
        assert!(service.fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_page_discards_partial_result() {
        let mut mock = MockMovieRepository::new();
        let mut seq = mockall::Sequence::new();

        // First refresh succeeds with a single short page
        mock.expect_fetch_page()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(MoviePage {
                    movies: numbered(0, 3),
                    total_amount: Some(3),
                })
            });
        // Second refresh: page one fine, page two fails
        mock.expect_fetch_page()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|limit, offset| {
                Ok(MoviePage {
                    movies: numbered(offset, limit),
                    total_amount: Some(500),
                })
            });
        mock.expect_fetch_page()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(ApiError::status(500, "Internal Server Error")));

        let (service, _) = service(mock);
        service.fetch_all().await.unwrap();

        let err = service.fetch_all().await.unwrap_err();
        match err {
            AppError::Fetch(message) => {
                assert_eq!(message, "Failed to fetch all movies: Internal Server Error")
            }
            other => panic!("expected fetch error, got {:?}", other),
        }
        assert_eq!(service.collection().len(), 3);
    }
}

#[cfg(test)]
mod write_tests {
    use crate::domain::{Movie, MovieId};
    use crate::error::AppError;
    use crate::events::{EventBus, MovieCreated};
    use crate::repositories::{ApiError, MockMovieRepository};
    use crate::services::CatalogService;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn valid_movie() -> Movie {
        let mut movie = Movie::new("Knives Out", vec!["Thriller".to_string()]);
        movie.rating = Some(7.9);
        movie
    }

    fn service(mock: MockMovieRepository) -> (CatalogService, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        (CatalogService::new(Arc::new(mock), Arc::clone(&bus)), bus)
    }

    #[tokio::test]
    async fn test_update_without_id_makes_no_request() {
        let mut mock = MockMovieRepository::new();
        mock.expect_update().times(0);
        mock.expect_fetch_page().times(0);

        let (service, bus) = service(mock);
        let err = service.update(&valid_movie()).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(bus.get_event_log().is_empty());
    }

    #[tokio::test]
    async fn test_delete_without_id_makes_no_request() {
        let mut mock = MockMovieRepository::new();
        mock.expect_delete().times(0);

        let (service, _) = service(mock);
        let err = service.delete_by_id(None).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Movie ID is required for deletion"
        );
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_rating_locally() {
        let mut mock = MockMovieRepository::new();
        mock.expect_create().times(0);

        let (service, _) = service(mock);
        let mut movie = valid_movie();
        movie.rating = Some(12.0);

        assert!(matches!(
            service.create(&movie).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_empty_title_locally() {
        let mut mock = MockMovieRepository::new();
        mock.expect_create().times(0);

        let (service, _) = service(mock);
        let mut movie = valid_movie();
        movie.title = " ".to_string();

        assert!(service.create(&movie).await.unwrap_err().is_validation());
    }

    #[tokio::test]
    async fn test_create_strips_id_and_emits_event() {
        let mut mock = MockMovieRepository::new();
        mock.expect_create()
            .withf(|movie| movie.id.is_none())
            .times(1)
            .returning(|movie| Ok(movie.clone().with_id(501)));

        let (service, bus) = service(mock);
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = Arc::clone(&seen);
        bus.subscribe::<MovieCreated, _>(move |event| {
            assert_eq!(event.movie_id, Some(MovieId(501)));
            seen_clone.fetch_add(1, Ordering::SeqCst);
        });

        let created = service.create(&valid_movie().with_id(3)).await.unwrap();
        assert_eq!(created.id, Some(MovieId(501)));
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_create_failure_is_a_submission_error() {
        let mut mock = MockMovieRepository::new();
        mock.expect_create()
            .times(1)
            .returning(|_| Err(ApiError::status(400, "title should not be empty")));

        let (service, bus) = service(mock);
        let err = service.create(&valid_movie()).await.unwrap_err();

        match err {
            AppError::Submission(message) => {
                assert_eq!(message, "Failed to create movie: title should not be empty")
            }
            other => panic!("expected submission error, got {:?}", other),
        }
        assert!(bus.get_event_log().is_empty());
    }

    #[tokio::test]
    async fn test_update_sends_id() {
        let mut mock = MockMovieRepository::new();
        mock.expect_update()
            .withf(|id, movie| *id == MovieId(8) && movie.title == "Knives Out")
            .times(1)
            .returning(|_, movie| Ok(movie.clone()));

        let (service, bus) = service(mock);
        service.update(&valid_movie().with_id(8)).await.unwrap();
        assert_eq!(bus.get_event_log()[0].event_type, "MovieUpdated");
    }

    #[tokio::test]
    async fn test_update_transport_failure() {
        let mut mock = MockMovieRepository::new();
        mock.expect_update()
            .times(1)
            .returning(|_, _| Err(ApiError::transport("timeout of 10000ms exceeded")));

        let (service, _) = service(mock);
        let err = service.update(&valid_movie().with_id(8)).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to update movie: timeout of 10000ms exceeded"
        );
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let mut mock = MockMovieRepository::new();
        mock.expect_delete()
            .withf(|id| *id == MovieId(12))
            .times(1)
            .returning(|_| Ok(()));

        let (service, bus) = service(mock);
        service.delete_by_id(Some(MovieId(12))).await.unwrap();
        assert_eq!(bus.get_event_log()[0].event_type, "MovieDeleted");
    }

    #[tokio::test]
    async fn test_fetch_by_id_not_found_is_a_fetch_error() {
        let mut mock = MockMovieRepository::new();
        mock.expect_fetch_by_id()
            .times(1)
            .returning(|_| Err(ApiError::status(404, "Not Found")));

        let (service, _) = service(mock);
        let err = service.fetch_by_id(MovieId(99)).await.unwrap_err();
        assert!(matches!(err, AppError::Fetch(ref m) if m == "Failed to fetch movie: Not Found"));
    }
}
