use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::api::{Dimensions, GalleryClient, ImageEntry};
use crate::cache::SharedImageCache;

use super::images::fetch_cached;

/// Warms the image cache with the image the viewer is likely to open next
///
/// At most one preload is pending. Arming a new one cancels the previous task,
/// and nothing is downloaded until the delay has elapsed without cancellation.
pub struct PreloadScheduler {
    client: GalleryClient,
    cache: SharedImageCache,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl PreloadScheduler {
    pub fn new(client: GalleryClient, cache: SharedImageCache, delay: Duration) -> Self {
        Self {
            client,
            cache,
            delay,
            pending: None,
        }
    }

    /// Schedule `image` to be fetched at `dims` after the delay
    pub fn arm(&mut self, image: &ImageEntry, dims: Dimensions) {
        self.cancel();

        let client = self.client.clone();
        let cache = self.cache.clone();
        let delay = self.delay;
        let name = image.name.clone();
        let relative_url = image.url.clone();

        debug!(image = %name, delay_ms = delay.as_millis() as u64, "preload armed");
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match fetch_cached(&client, &cache, &relative_url, dims).await {
                Ok(bytes) => debug!(image = %name, size = bytes.len(), "preloaded"),
                Err(e) => warn!(image = %name, error = %e, "preload failed"),
            }
        }));
    }

    /// Drop the pending preload, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                debug!("preload cancelled");
            }
            handle.abort();
        }
    }

    /// Whether a preload is still waiting or downloading
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for PreloadScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
