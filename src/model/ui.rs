//! UI Model
//!
//! This sub-model contains all state related to the user interface that is
//! not part of navigation: slideshow timer, toast, grid scroll position.

use std::time::{Duration, Instant};

/// Auto-advance timer armed from the lightbox
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slideshow {
    pub interval: Duration,
    pub last_step: Instant,
}

impl Slideshow {
    pub fn new(seconds: u8, now: Instant) -> Self {
        Self {
            interval: Duration::from_secs(seconds as u64),
            last_step: now,
        }
    }

    /// Whether the next image is due at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        crate::logic::ui::slideshow_due(self.last_step, self.interval, now)
    }
}

#[derive(Clone, Debug)]
pub struct UiModel {
    /// Running slideshow, only while the lightbox is open
    pub slideshow: Option<Slideshow>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// First visible row of the tile grid
    pub grid_offset: usize,

    /// Tiles per row at the last render, used for Up/Down cursor moves
    pub grid_columns: usize,

    /// Title last written to the terminal window
    pub window_title: Option<String>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}

impl UiModel {
    pub fn new() -> Self {
        Self {
            slideshow: None,
            toast_message: None,
            grid_offset: 0,
            grid_columns: 1,
            window_title: None,
            should_quit: false,
        }
    }

    /// Start (or replace) the slideshow
    pub fn start_slideshow(&mut self, seconds: u8) {
        self.slideshow = Some(Slideshow::new(seconds, Instant::now()));
    }

    pub fn stop_slideshow(&mut self) {
        self.slideshow = None;
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((message, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(message, timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }

    /// Returns the new title when it differs from what the terminal shows
    pub fn title_update(&mut self, title: &str) -> Option<String> {
        if self.window_title.as_deref() == Some(title) {
            return None;
        }
        self.window_title = Some(title.to_string());
        self.window_title.clone()
    }
}
