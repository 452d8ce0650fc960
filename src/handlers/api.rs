//! API Response Handler
//!
//! Handles album responses from the background fetch worker.

use albumtui::logic::errors::error_headline;
use albumtui::model::LoadState;
use albumtui::services::ApiResponse;
use tracing::debug;

use crate::App;

/// Handle API response from background service
///
/// Stale responses (superseded by a later navigation) are dropped by the
/// navigation model; a failed fetch for the current path also shows a toast.
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::AlbumResult {
            request_id,
            path,
            album,
        } => {
            let was_open = app.model.lightbox_open();

            if !app.model.navigation.apply_album(request_id, &path, album) {
                debug!(request_id, path = %path, "album response dropped");
                return;
            }

            if let LoadState::Failed { error_type, .. } = &app.model.navigation.load_state {
                let headline = error_headline(error_type);
                app.model.show_toast(format!("Error: {}", headline));
            }

            if was_open && !app.model.lightbox_open() {
                app.model.on_lightbox_closed();
            }
        }
    }
}
