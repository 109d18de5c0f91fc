mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{client_for, free_port, TEST_API_KEY};
use movie_finder::tmdb::{DiscoverOutcome, FetchError, Movie};

#[tokio::test]
async fn sends_authenticated_discover_request() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(r#"{"results": []}"#))
        .await;

    let client = client_for(&backend.base_url());
    client.discover_popular().await.unwrap();

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/3/discover/movie");
    assert_eq!(req.query.as_deref(), Some("sort_by=popularity.desc"));
    assert_eq!(
        req.header("authorization"),
        Some(format!("Bearer {}", TEST_API_KEY).as_str())
    );
    assert_eq!(req.header("accept"), Some("application/json"));
}

#[tokio::test]
async fn results_are_returned_in_order() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(
            r#"{"page": 1, "results": [
                {"id": 1, "title": "A", "vote_average": 7.5, "original_language": "en"},
                {"id": 2, "title": "B", "release_date": "2024-01-02"}
            ]}"#,
        ))
        .await;

    let outcome = client_for(&backend.base_url()).discover_popular().await.unwrap();
    let DiscoverOutcome::Movies(movies) = outcome else {
        panic!("expected Movies");
    };
    assert_eq!(movies.iter().map(|m| m.id).collect::<Vec<_>>(), vec![Some(1), Some(2)]);
    assert_eq!(movies[0].vote_average, Some(7.5));
    assert_eq!(movies[1].release_year(), Some("2024"));
}

#[tokio::test]
async fn absent_results_is_empty_list() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(r#"{"page": 1}"#))
        .await;

    let outcome = client_for(&backend.base_url()).discover_popular().await.unwrap();
    assert_eq!(outcome, DiscoverOutcome::Movies(Vec::new()));
}

#[tokio::test]
async fn odd_records_do_not_fail_the_list() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(
            r#"{"results": [
                {"id": 1, "title": null},
                {"title": "No id"},
                {"id": 3, "title": "C", "vote_average": "n/a"}
            ]}"#,
        ))
        .await;

    let outcome = client_for(&backend.base_url()).discover_popular().await.unwrap();
    let DiscoverOutcome::Movies(movies) = outcome else {
        panic!("expected Movies");
    };
    assert_eq!(
        movies.iter().map(|m| m.title.as_str()).collect::<Vec<_>>(),
        vec!["", "No id", "C"]
    );
    assert_eq!(movies[1].id, None);
    assert_eq!(movies[2].vote_average, None);
}

#[tokio::test]
async fn null_results_is_empty_list() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(r#"{"page": 1, "results": null}"#))
        .await;

    let outcome = client_for(&backend.base_url()).discover_popular().await.unwrap();
    assert_eq!(outcome, DiscoverOutcome::Movies(Vec::new()));
}

#[tokio::test]
async fn boolean_response_flag_is_not_a_rejection() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(
            r#"{"Response": false, "results": [{"id": 1, "title": "A"}]}"#,
        ))
        .await;

    let outcome = client_for(&backend.base_url()).discover_popular().await.unwrap();
    assert_eq!(outcome, DiscoverOutcome::Movies(vec![Movie::new(1, "A")]));
}

#[tokio::test]
async fn logical_failure_is_rejected_outcome() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(
            r#"{"Response": "False", "Error": "Invalid key"}"#,
        ))
        .await;

    let outcome = client_for(&backend.base_url()).discover_popular().await.unwrap();
    assert_eq!(
        outcome,
        DiscoverOutcome::Rejected {
            message: "Invalid key".to_string()
        }
    );
}

#[tokio::test]
async fn logical_failure_without_message_uses_default() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(r#"{"Response": "False"}"#))
        .await;

    let outcome = client_for(&backend.base_url()).discover_popular().await.unwrap();
    assert_eq!(
        outcome,
        DiscoverOutcome::Rejected {
            message: "Failed to fetch movies.".to_string()
        }
    );
}

#[tokio::test]
async fn non_success_status_is_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(500, "boom"))
        .await;

    match client_for(&backend.base_url()).discover_popular().await {
        Err(FetchError::Status { status }) => assert_eq!(status, 500),
        other => panic!("expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn unauthorized_status_is_error_not_rejection() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(401, "Invalid API key"))
        .await;

    assert!(matches!(
        client_for(&backend.base_url()).discover_popular().await,
        Err(FetchError::Status { status: 401 })
    ));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let backend = MockBackend::start().await;
    backend.enqueue_response(MockResponse::text("not json")).await;

    assert!(matches!(
        client_for(&backend.base_url()).discover_popular().await,
        Err(FetchError::Decode(_))
    ));
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    let base_url = format!("http://127.0.0.1:{}/3", free_port());

    match client_for(&base_url).discover_popular().await {
        Err(FetchError::Transport { url, .. }) => assert!(url.starts_with(&base_url)),
        other => panic!("expected Transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn unknown_movie_fields_survive_decoding() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(
            r#"{"results": [{"id": 9, "title": "C", "genre_ids": [18, 80]}]}"#,
        ))
        .await;

    let outcome = client_for(&backend.base_url()).discover_popular().await.unwrap();
    let DiscoverOutcome::Movies(movies) = outcome else {
        panic!("expected Movies");
    };
    let expected: Movie =
        serde_json::from_str(r#"{"id": 9, "title": "C", "genre_ids": [18, 80]}"#).unwrap();
    assert_eq!(movies, vec![expected]);
}
