//! External Services
//!
//! Background tasks that talk to the gallery server:
//! - api: album metadata fetch worker
//! - images: image download, cache and decode for display
//! - preload: deferred, cancellable cache warming for the next image

pub mod api;
pub mod images;
pub mod preload;

pub use api::{spawn_api_service, ApiRequest, ApiResponse};
pub use images::{ImageLoader, ImageMetadata, ImagePreviewState, ImageUpdate};
pub use preload::PreloadScheduler;
