//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - api: Album responses from the background fetch worker
//! - keyboard: User keyboard input
//!
//! Handlers take &mut App, update the Model and hand resulting effects back
//! to the App for execution.

pub mod api;
pub mod keyboard;

// Re-export for convenience
pub use api::handle_api_response;
pub use keyboard::handle_key;
