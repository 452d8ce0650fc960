use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::api::{AlbumView, FetchError, GalleryClient};

/// API request types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// Fetch album metadata for a path; tagged so the response can be matched
    FetchAlbum { request_id: u64, path: String },
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    AlbumResult {
        request_id: u64,
        path: String,
        album: Result<AlbumView, FetchError>,
    },
}

/// API service worker that runs album fetches in the background
///
/// Only the newest album fetch matters, so a new request aborts the one still
/// in flight.
pub struct ApiService {
    client: GalleryClient,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    in_flight: Option<(u64, JoinHandle<()>)>,
}

impl ApiService {
    pub fn new(client: GalleryClient, response_tx: mpsc::UnboundedSender<ApiResponse>) -> Self {
        Self {
            client,
            response_tx,
            in_flight: None,
        }
    }

    fn dispatch(&mut self, request: ApiRequest) {
        match request {
            ApiRequest::FetchAlbum { request_id, path } => {
                if let Some((previous, handle)) = self.in_flight.take() {
                    if !handle.is_finished() {
                        debug!(previous, request_id, "superseding in-flight album fetch");
                        handle.abort();
                    }
                }

                let client = self.client.clone();
                let response_tx = self.response_tx.clone();

                let handle = tokio::spawn(async move {
                    debug!(request_id, path = %path, "fetching album");
                    let album = client.fetch_album(&path).await;
                    debug!(request_id, path = %path, ok = album.is_ok(), "album fetch finished");

                    let _ = response_tx.send(ApiResponse::AlbumResult {
                        request_id,
                        path,
                        album,
                    });
                });
                self.in_flight = Some((request_id, handle));
            }
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: GalleryClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();

    tokio::spawn(async move {
        let mut service = ApiService::new(client, response_tx);

        while let Some(request) = request_rx.recv().await {
            service.dispatch(request);
        }
        debug!("api service stopped");
    });

    (request_tx, response_rx)
}
