//! UI timing logic
//!
//! Pure functions deciding when transient UI elements expire.

use std::time::{Duration, Instant};

/// How long a normal toast stays on screen
pub const TOAST_MS: u128 = 1500;

/// How long an error toast stays on screen
pub const ERROR_TOAST_MS: u128 = 4000;

/// Whether a toast that has been visible for `elapsed_ms` should go away
///
/// Errors (messages starting with "Error:") stay longer.
///
/// # Examples
/// ```
/// use albumtui::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast("Refreshing", 1000));
/// assert!(should_dismiss_toast("Refreshing", 1500));
/// assert!(!should_dismiss_toast("Error: not found", 1500));
/// ```
pub fn should_dismiss_toast(message: &str, elapsed_ms: u128) -> bool {
    let limit = if message.starts_with("Error:") {
        ERROR_TOAST_MS
    } else {
        TOAST_MS
    };
    elapsed_ms >= limit
}

/// Whether a slideshow that last advanced at `last_step` is due at `now`
pub fn slideshow_due(last_step: Instant, interval: Duration, now: Instant) -> bool {
    now.saturating_duration_since(last_step) >= interval
}
