// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout for the album screen and the lightbox
// - render: Main orchestration function that coordinates all rendering
// - breadcrumb: Renders the header with album name and breadcrumb trail
// - album: Renders the tile grid, load/error states and thumbnail preview
// - tiles: Renders individual folder and image tiles
// - lightbox: Renders the full-screen image with its info bar
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar with location and history
// - toast: Renders toast notifications (brief pop-up messages)

pub mod album;
pub mod breadcrumb;
pub mod layout;
pub mod legend;
pub mod lightbox;
pub mod render;
pub mod status_bar;
pub mod tiles;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
