//! Integration tests for the deferred image preload
//!
//! The preload waits before downloading, so stepping quickly through images
//! never downloads the ones skipped over:
//! 1. An armed preload downloads into the shared cache after the delay
//! 2. Cancelling or re-arming before the delay prevents the download
//! 3. Images already cached are not downloaded again

use albumtui::api::{Dimensions, GalleryClient, ImageEntry};
use albumtui::cache;
use albumtui::services::PreloadScheduler;
use httpmock::prelude::*;
use std::time::Duration;

fn image(name: &str) -> ImageEntry {
    ImageEntry {
        name: name.to_string(),
        url: format!("/2020/{}", name),
        time: 0,
    }
}

const DIMS: Dimensions = Dimensions {
    width: 1280,
    height: 800,
};

/// Wait until the scheduler has nothing pending (bounded)
async fn wait_idle(scheduler: &PreloadScheduler) {
    for _ in 0..100 {
        if !scheduler.is_pending() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("preload still pending after 5s");
}

#[tokio::test]
async fn test_preload_downloads_after_delay() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/img/1280x800/2020/b.jpg");
            then.status(200).body("next-image");
        })
        .await;

    let client = GalleryClient::new(server.url(""));
    let image_cache = cache::shared(4);
    let mut scheduler =
        PreloadScheduler::new(client.clone(), image_cache.clone(), Duration::from_millis(50));

    scheduler.arm(&image("b.jpg"), DIMS);
    assert!(scheduler.is_pending());
    wait_idle(&scheduler).await;

    mock.assert_hits_async(1).await;
    let url = client.image_url("/2020/b.jpg", DIMS);
    let cached = image_cache.lock().unwrap().get(&url);
    assert_eq!(cached.as_deref(), Some(&b"next-image".to_vec()));
}

#[tokio::test]
async fn test_cancelled_preload_never_downloads() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/img/1280x800/2020/b.jpg");
            then.status(200).body("next-image");
        })
        .await;

    let image_cache = cache::shared(4);
    let mut scheduler = PreloadScheduler::new(
        GalleryClient::new(server.url("")),
        image_cache.clone(),
        Duration::from_millis(200),
    );

    scheduler.arm(&image("b.jpg"), DIMS);
    scheduler.cancel();
    assert!(!scheduler.is_pending());

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(mock.hits_async().await, 0);
    assert!(image_cache.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_rearming_replaces_pending_preload() {
    let server = MockServer::start_async().await;
    let skipped = server
        .mock_async(|when, then| {
            when.method(GET).path("/img/1280x800/2020/b.jpg");
            then.status(200).body("b");
        })
        .await;
    let wanted = server
        .mock_async(|when, then| {
            when.method(GET).path("/img/1280x800/2020/c.jpg");
            then.status(200).body("c");
        })
        .await;

    let mut scheduler = PreloadScheduler::new(
        GalleryClient::new(server.url("")),
        cache::shared(4),
        Duration::from_millis(200),
    );

    scheduler.arm(&image("b.jpg"), DIMS);
    scheduler.arm(&image("c.jpg"), DIMS);
    wait_idle(&scheduler).await;

    assert_eq!(skipped.hits_async().await, 0);
    wanted.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_cached_image_is_not_downloaded_again() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/img/1280x800/2020/b.jpg");
            then.status(200).body("fresh");
        })
        .await;

    let client = GalleryClient::new(server.url(""));
    let image_cache = cache::shared(4);
    let url = client.image_url("/2020/b.jpg", DIMS);
    image_cache
        .lock()
        .unwrap()
        .insert(url.clone(), b"cached".to_vec());

    let mut scheduler =
        PreloadScheduler::new(client, image_cache.clone(), Duration::from_millis(10));
    scheduler.arm(&image("b.jpg"), DIMS);
    wait_idle(&scheduler).await;

    assert_eq!(mock.hits_async().await, 0);
    let cached = image_cache.lock().unwrap().get(&url);
    assert_eq!(cached.as_deref(), Some(&b"cached".to_vec()));
}

#[tokio::test]
async fn test_failed_preload_is_silent() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/img/1280x800/2020/gone.jpg");
            then.status(404);
        })
        .await;

    let image_cache = cache::shared(4);
    let mut scheduler = PreloadScheduler::new(
        GalleryClient::new(server.url("")),
        image_cache.clone(),
        Duration::from_millis(10),
    );
    scheduler.arm(&image("gone.jpg"), DIMS);
    wait_idle(&scheduler).await;

    assert!(image_cache.lock().unwrap().is_empty());
}
