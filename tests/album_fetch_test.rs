//! Integration tests for the gallery client and the album fetch worker
//!
//! Runs the real HTTP client against a local mock server:
//! 1. The metadata request carries the folder path as an encoded query
//! 2. Non-2xx answers, malformed bodies and refused connections surface as errors
//! 3. The background worker tags responses and drops superseded fetches

use albumtui::api::{Dimensions, FetchError, GalleryClient};
use albumtui::logic::errors::{classify_error, ErrorType};
use albumtui::services::{spawn_api_service, ApiRequest, ApiResponse};
use httpmock::prelude::*;
use std::time::Duration;

const TRIP_JSON: &str = r#"{
    "name": "my trip",
    "location": [
        {"name": "2020", "path": "2020/"},
        {"name": "my trip", "path": "2020/my trip/"}
    ],
    "folders": [],
    "images": [
        {"name": "a.jpg", "url": "/2020/my trip/a.jpg", "time": 1592222400},
        {"name": "b.jpg", "url": "/2020/my trip/b.jpg", "time": 1592222500}
    ]
}"#;

#[tokio::test]
async fn test_fetch_album_sends_path_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/a/").query_param("path", "2020/my trip/");
            then.status(200)
                .header("content-type", "application/json")
                .body(TRIP_JSON);
        })
        .await;

    let client = GalleryClient::new(server.url(""));
    let album = client.fetch_album("2020/my trip/").await.unwrap();

    mock.assert_hits_async(1).await;
    assert_eq!(album.name, "my trip");
    assert_eq!(album.location.len(), 2);
    assert_eq!(album.images[1].name, "b.jpg");
    assert!(album.folders.is_empty());
}

#[tokio::test]
async fn test_fetch_album_not_found_is_status_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/a/");
            then.status(404);
        })
        .await;

    let client = GalleryClient::new(server.url(""));
    let err = client.fetch_album("missing/").await.unwrap_err();

    match &err {
        FetchError::Status { status, .. } => assert_eq!(*status, 404),
        other => panic!("expected status error, got {:?}", other),
    }
    assert_eq!(classify_error(&err), ErrorType::NotFound);
}

#[tokio::test]
async fn test_fetch_album_bad_body_is_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/a/");
            then.status(200).body("<html>not an album</html>");
        })
        .await;

    let client = GalleryClient::new(server.url(""));
    let err = client.fetch_album("/").await.unwrap_err();

    assert!(matches!(err, FetchError::Decode { .. }), "got {:?}", err);
    assert_eq!(classify_error(&err), ErrorType::BadResponse);
}

#[tokio::test]
async fn test_fetch_album_connection_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client =
        GalleryClient::with_timeout(format!("http://{}", addr), Duration::from_millis(500))
            .unwrap();
    let err = client.fetch_album("/").await.unwrap_err();

    assert!(matches!(err, FetchError::Request { .. }), "got {:?}", err);
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_fetch_image_uses_size_prefix() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/img/288x162/2020/a.jpg");
            then.status(200).body("jpeg-bytes");
        })
        .await;

    let client = GalleryClient::new(server.url(""));
    let dims = Dimensions::new(1920, 1080).scaled(0.15);
    let bytes = client.fetch_image("/2020/a.jpg", dims).await.unwrap();

    mock.assert_hits_async(1).await;
    assert_eq!(bytes, b"jpeg-bytes".to_vec());
}

#[tokio::test]
async fn test_api_service_tags_responses() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/a/").query_param("path", "2020/my trip/");
            then.status(200).body(TRIP_JSON);
        })
        .await;

    let (api_tx, mut api_rx) = spawn_api_service(GalleryClient::new(server.url("")));
    api_tx
        .send(ApiRequest::FetchAlbum {
            request_id: 7,
            path: "2020/my trip/".to_string(),
        })
        .unwrap();

    let response = tokio::time::timeout(Duration::from_secs(5), api_rx.recv())
        .await
        .expect("worker did not answer")
        .expect("worker channel closed");

    let ApiResponse::AlbumResult {
        request_id,
        path,
        album,
    } = response;
    assert_eq!(request_id, 7);
    assert_eq!(path, "2020/my trip/");
    assert_eq!(album.unwrap().images.len(), 2);
}

#[tokio::test]
async fn test_api_service_drops_superseded_fetch() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/a/").query_param("path", "slow/");
            then.status(200)
                .body(r#"{"name":"slow"}"#)
                .delay(Duration::from_millis(1000));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/a/").query_param("path", "fast/");
            then.status(200).body(r#"{"name":"fast"}"#);
        })
        .await;

    let (api_tx, mut api_rx) = spawn_api_service(GalleryClient::new(server.url("")));
    api_tx
        .send(ApiRequest::FetchAlbum {
            request_id: 1,
            path: "slow/".to_string(),
        })
        .unwrap();
    api_tx
        .send(ApiRequest::FetchAlbum {
            request_id: 2,
            path: "fast/".to_string(),
        })
        .unwrap();

    let ApiResponse::AlbumResult { request_id, .. } =
        tokio::time::timeout(Duration::from_secs(5), api_rx.recv())
            .await
            .expect("worker did not answer")
            .expect("worker channel closed");
    assert_eq!(request_id, 2);

    // The slow fetch was aborted, so nothing else arrives
    let late = tokio::time::timeout(Duration::from_millis(1500), api_rx.recv()).await;
    assert!(late.is_err(), "superseded fetch still answered");
}
