//! Pure Application Model
//!
//! The Model is organized into focused sub-models:
//!
//! - **NavigationState**: path, album listing, lightbox image, history
//! - **UiModel**: slideshow, toast, grid scroll, window title
//!
//! No services live here: all I/O is requested through
//! [`navigation::Effect`] values and performed by the runtime.

pub mod navigation;
pub mod ui;

pub use navigation::{Effect, Focus, LoadState, NavigationState, Step, Tile};
pub use ui::{Slideshow, UiModel};

/// Root application model composed of focused sub-models
#[derive(Clone, Debug, Default)]
pub struct Model {
    pub navigation: NavigationState,
    pub ui: UiModel,
}

impl Model {
    pub fn new() -> Self {
        Self {
            navigation: NavigationState::new(),
            ui: UiModel::new(),
        }
    }

    /// Whether the lightbox is the visible screen
    pub fn lightbox_open(&self) -> bool {
        self.navigation.lightbox_open()
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    /// Leave the lightbox-only state behind when the lightbox closes
    pub fn on_lightbox_closed(&mut self) {
        self.ui.stop_slideshow();
    }
}
