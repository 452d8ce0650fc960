//! Image loading orchestration methods
//!
//! Decides which images the screen needs (the lightbox image at full screen
//! size, the selected tile's thumbnail) and keeps their decoded state.

use albumtui::api::Dimensions;
use albumtui::logic::layout;
use albumtui::model::Tile;
use albumtui::services::images::screen_dimensions;
use albumtui::services::ImagePreviewState;
use tracing::debug;

use crate::App;

/// Decoded images kept around before old ones are dropped
const MAX_DECODED_IMAGES: usize = 8;

impl App {
    pub(crate) fn set_terminal_cells(&mut self, width: u16, height: u16) {
        self.terminal_cells = (width, height);
    }

    /// Full screen size in pixels, used for the lightbox and the preload
    pub(crate) fn screen_dims(&self) -> Dimensions {
        screen_dimensions(self.screen_override, self.terminal_cells, self.font_size)
    }

    /// Thumbnail size: a fraction of the screen size
    pub(crate) fn thumbnail_dims(&self) -> Dimensions {
        self.screen_dims().scaled(self.thumbnail_scale)
    }

    /// Key of the lightbox image at the current screen size
    pub(crate) fn lightbox_image_key(&self) -> Option<String> {
        let image = self.model.navigation.current_image()?;
        Some(self.images.key(&image.url, self.screen_dims()))
    }

    /// Relative URL of the thumbnail for the selected grid tile
    fn selected_thumbnail_url(&self) -> Option<String> {
        match self.model.navigation.selected_tile()? {
            Tile::Folder(folder) => Some(folder.url.clone()),
            Tile::Image(image) => Some(image.url.clone()),
        }
    }

    pub(crate) fn thumbnail_key(&self) -> Option<String> {
        let url = self.selected_thumbnail_url()?;
        Some(self.images.key(&url, self.thumbnail_dims()))
    }

    /// Whether the thumbnail pane fits next to the grid
    pub(crate) fn preview_pane_visible(&self) -> bool {
        self.images.enabled() && layout::preview_visible(self.terminal_cells.0)
    }

    /// Start loading the images the next frame will show
    pub(crate) fn request_visible_images(&mut self) {
        if !self.images.enabled() {
            return;
        }

        let mut wanted = Vec::new();
        if let Some(image) = self.model.navigation.current_image() {
            wanted.push((image.url.clone(), self.screen_dims()));
        } else if self.preview_pane_visible() {
            if let Some(url) = self.selected_thumbnail_url() {
                wanted.push((url, self.thumbnail_dims()));
            }
        }

        let wanted_keys: Vec<String> = wanted
            .iter()
            .map(|(url, dims)| self.images.key(url, *dims))
            .collect();

        if self.image_state_map.len() > MAX_DECODED_IMAGES {
            debug!(count = self.image_state_map.len(), "dropping decoded images");
            self.image_state_map
                .retain(|key, _| wanted_keys.contains(key));
        }

        for (url, dims) in wanted {
            let key = self.images.key(&url, dims);
            if self.image_state_map.contains_key(&key) {
                continue;
            }
            if let Some(key) = self.images.load(&url, dims) {
                self.image_state_map.insert(key, ImagePreviewState::Loading);
            }
        }
    }

    /// Store a finished download; results for images no longer tracked are dropped
    pub(crate) fn store_image_state(&mut self, key: String, state: ImagePreviewState) {
        if !self.image_state_map.contains_key(&key) {
            debug!(url = %key, "discarding image nobody is waiting for");
            return;
        }
        self.image_state_map.insert(key, state);
    }
}
