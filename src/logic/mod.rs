//! Business Logic
//!
//! This module contains pure functions that can be unit tested:
//! - errors: Navigation errors and fetch error classification
//! - formatting: Dates, positions and sizes for display
//! - keys: Key bindings per screen
//! - layout: Tile grid geometry and scrolling
//! - navigation: Circular image stepping and grid cursor movement
//! - path: Path validation and breadcrumb helpers
//! - ui: Toast and slideshow timing

pub mod errors;
pub mod formatting;
pub mod keys;
pub mod layout;
pub mod navigation;
pub mod path;
pub mod ui;
