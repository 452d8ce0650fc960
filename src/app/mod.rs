//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in albumtui::model)
//! - Services (album fetch worker, image loader, preload scheduler)
//! - Handlers (in src/handlers/)
//! - UI rendering (in src/ui/)

pub(crate) mod navigation;
pub(crate) mod preview;
