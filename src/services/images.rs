use std::sync::Arc;
use std::time::Instant;

use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::api::{Dimensions, FetchError, GalleryClient};
use crate::cache::SharedImageCache;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageMetadata {
    pub dimensions: Option<(u32, u32)>,
    pub byte_size: u64,
}

pub enum ImagePreviewState {
    Loading,
    Ready {
        protocol: StatefulProtocol,
        metadata: ImageMetadata,
    },
    Failed {
        message: String,
    },
}

impl std::fmt::Debug for ImagePreviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImagePreviewState::Loading => write!(f, "ImagePreviewState::Loading"),
            ImagePreviewState::Ready { metadata, .. } => f
                .debug_struct("ImagePreviewState::Ready")
                .field("metadata", metadata)
                .field("protocol", &"<StatefulProtocol>")
                .finish(),
            ImagePreviewState::Failed { message } => f
                .debug_struct("ImagePreviewState::Failed")
                .field("message", message)
                .finish(),
        }
    }
}

/// Image update sent back to the UI loop, keyed by absolute image URL
pub type ImageUpdate = (String, ImagePreviewState);

/// Get image bytes from the cache, downloading and caching them on a miss
pub async fn fetch_cached(
    client: &GalleryClient,
    cache: &SharedImageCache,
    relative_url: &str,
    dims: Dimensions,
) -> Result<Arc<Vec<u8>>, FetchError> {
    let url = client.image_url(relative_url, dims);

    if let Some(bytes) = cache.lock().ok().and_then(|cache| cache.get(&url)) {
        debug!(url = %url, "image cache hit");
        return Ok(bytes);
    }

    let bytes = client.fetch_image(relative_url, dims).await?;
    debug!(url = %url, size = bytes.len(), "image downloaded");

    match cache.lock() {
        Ok(mut cache) => Ok(cache.insert(url, bytes)),
        Err(_) => Ok(Arc::new(bytes)),
    }
}

/// Downloads and decodes images in the background for the lightbox and the
/// thumbnail pane
pub struct ImageLoader {
    client: GalleryClient,
    cache: SharedImageCache,
    picker: Option<Picker>,
    update_tx: mpsc::UnboundedSender<ImageUpdate>,
}

impl ImageLoader {
    /// `picker` is `None` when image rendering is disabled
    pub fn new(
        client: GalleryClient,
        cache: SharedImageCache,
        picker: Option<Picker>,
        update_tx: mpsc::UnboundedSender<ImageUpdate>,
    ) -> Self {
        Self {
            client,
            cache,
            picker,
            update_tx,
        }
    }

    pub fn enabled(&self) -> bool {
        self.picker.is_some()
    }

    /// Key under which updates for this image arrive
    pub fn key(&self, relative_url: &str, dims: Dimensions) -> String {
        self.client.image_url(relative_url, dims)
    }

    /// Start loading an image; returns its key, or `None` if rendering is disabled
    pub fn load(&self, relative_url: &str, dims: Dimensions) -> Option<String> {
        let picker = self.picker.clone()?;
        let key = self.key(relative_url, dims);

        let client = self.client.clone();
        let cache = self.cache.clone();
        let update_tx = self.update_tx.clone();
        let relative_url = relative_url.to_string();
        let task_key = key.clone();

        tokio::spawn(async move {
            debug!(url = %task_key, "background: loading image");
            let state = match Self::load_image(&client, &cache, &relative_url, dims, picker).await
            {
                Ok((protocol, metadata)) => {
                    debug!(url = %task_key, ?metadata, "background: image ready");
                    ImagePreviewState::Ready { protocol, metadata }
                }
                Err(message) => {
                    warn!(url = %task_key, %message, "background: image load failed");
                    ImagePreviewState::Failed { message }
                }
            };
            let _ = update_tx.send((task_key, state));
        });

        Some(key)
    }

    async fn load_image(
        client: &GalleryClient,
        cache: &SharedImageCache,
        relative_url: &str,
        dims: Dimensions,
        picker: Picker,
    ) -> Result<(StatefulProtocol, ImageMetadata), String> {
        let bytes = fetch_cached(client, cache, relative_url, dims)
            .await
            .map_err(|e| e.to_string())?;
        let byte_size = bytes.len() as u64;

        let load_start = Instant::now();
        let decoded = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes)).await;

        let img = match decoded {
            Ok(Ok(img)) => img,
            Ok(Err(e)) => return Err(format!("Decode error: {}", e)),
            Err(e) => return Err(format!("Task error: {}", e)),
        };
        let metadata = ImageMetadata {
            dimensions: Some((img.width(), img.height())),
            byte_size,
        };

        let protocol = picker.new_resize_protocol(img);
        debug!(
            elapsed = load_start.elapsed().as_secs_f32(),
            "decode and protocol creation finished"
        );

        Ok((protocol, metadata))
    }
}

/// Pixel size of the screen used to request resized images
///
/// A configured size wins; otherwise the terminal size in cells is multiplied
/// by the font cell size.
pub fn screen_dimensions(
    configured: Option<Dimensions>,
    terminal_cells: (u16, u16),
    font_size: (u16, u16),
) -> Dimensions {
    if let Some(dims) = configured {
        return dims;
    }
    let (columns, rows) = terminal_cells;
    let (font_width, font_height) = font_size;
    Dimensions::new(
        (columns as u32 * font_width as u32).max(1),
        (rows as u32 * font_height as u32).max(1),
    )
}
