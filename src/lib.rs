//! Album TUI Library
//!
//! Exposes the gallery client, routing, navigation model and background
//! services for the binary and for testing

pub mod api;
pub mod cache;
pub mod config;
pub mod logic;
pub mod model;
pub mod router;
pub mod services;
