//! Navigation orchestration methods
//!
//! Executes the effects returned by the navigation model:
//! - Album fetches go to the API service
//! - Preloads are armed or cancelled on the scheduler
//! - Navigation errors are reported as toasts

use std::time::Instant;

use albumtui::logic::errors::NavigationError;
use albumtui::model::{Effect, Step};
use albumtui::services::ApiRequest;
use tracing::{debug, warn};

use crate::App;

impl App {
    /// Perform the side effects requested by a navigation operation
    pub(crate) fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Fetch { request_id, path } => {
                    debug!(request_id, path = %path, "queueing album fetch");
                    if self
                        .api_tx
                        .send(ApiRequest::FetchAlbum { request_id, path })
                        .is_err()
                    {
                        warn!("api service is gone, fetch dropped");
                    }
                }
                Effect::SchedulePreload(image) => {
                    let dims = self.screen_dims();
                    self.preload.arm(&image, dims);
                }
                Effect::CancelPreload => self.preload.cancel(),
            }
        }
    }

    /// Run effects on success; show the error as a toast otherwise
    pub(crate) fn apply_navigation(&mut self, result: Result<Vec<Effect>, NavigationError>) {
        match result {
            Ok(effects) => self.run_effects(effects),
            Err(e) => {
                debug!(error = %e, "navigation rejected");
                self.model.show_toast(format!("Error: {}", e));
            }
        }
    }

    /// Advance the lightbox when the slideshow interval has elapsed
    pub(crate) fn tick_slideshow(&mut self, now: Instant) {
        let due = self
            .model
            .ui
            .slideshow
            .as_ref()
            .is_some_and(|slideshow| slideshow.is_due(now));
        if !due {
            return;
        }

        if !self.model.lightbox_open() {
            self.model.on_lightbox_closed();
            return;
        }

        let result = self.model.navigation.step_image(Step::Next);
        self.apply_navigation(result);
        if let Some(slideshow) = self.model.ui.slideshow.as_mut() {
            slideshow.last_step = now;
        }
    }
}
