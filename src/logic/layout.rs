//! Layout calculation logic
//!
//! Pure functions for sizing the tile grid and keeping the cursor on screen.

/// Width of one tile in terminal cells, including its border
pub const TILE_WIDTH: u16 = 26;

/// Height of one tile in terminal cells, including its border
pub const TILE_HEIGHT: u16 = 4;

/// Minimum grid width before the thumbnail preview pane is shown beside it
pub const PREVIEW_MIN_WIDTH: u16 = 100;

/// Geometry of the tile grid for the current terminal size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGeometry {
    /// Tiles per row
    pub columns: usize,
    /// Rows that fit vertically
    pub visible_rows: usize,
}

/// Calculate how many tiles fit into an area
///
/// # Examples
/// ```
/// use albumtui::logic::layout::calculate_grid;
///
/// // 80 cells wide fits 3 tiles of 26 cells; 20 rows fit 5 tiles of 4 rows
/// let grid = calculate_grid(80, 20);
/// assert_eq!(grid.columns, 3);
/// assert_eq!(grid.visible_rows, 5);
///
/// // Always at least one tile
/// let tiny = calculate_grid(5, 2);
/// assert_eq!(tiny.columns, 1);
/// assert_eq!(tiny.visible_rows, 1);
/// ```
pub fn calculate_grid(width: u16, height: u16) -> GridGeometry {
    GridGeometry {
        columns: (width / TILE_WIDTH).max(1) as usize,
        visible_rows: (height / TILE_HEIGHT).max(1) as usize,
    }
}

/// First row to draw so that the cursor row stays visible
///
/// Keeps the previous offset when the cursor is already on screen, otherwise
/// scrolls the minimum amount.
///
/// # Examples
/// ```
/// use albumtui::logic::layout::scroll_offset;
///
/// assert_eq!(scroll_offset(2, 0, 5), 0);  // already visible
/// assert_eq!(scroll_offset(7, 0, 5), 3);  // scroll down so row 7 is last
/// assert_eq!(scroll_offset(1, 4, 5), 1);  // scroll up to row 1
/// ```
pub fn scroll_offset(cursor_row: usize, current_offset: usize, visible_rows: usize) -> usize {
    let visible_rows = visible_rows.max(1);
    if cursor_row < current_offset {
        cursor_row
    } else if cursor_row >= current_offset + visible_rows {
        cursor_row + 1 - visible_rows
    } else {
        current_offset
    }
}

/// Whether the thumbnail preview pane gets its own column
pub fn preview_visible(content_width: u16) -> bool {
    content_width >= PREVIEW_MIN_WIDTH
}

/// Range of breadcrumb segments that fit into `width` cells
///
/// Segments are kept from the right (the current folder is the most useful),
/// each costing its label width plus a 3-cell separator.
///
/// # Examples
/// ```
/// use albumtui::logic::layout::visible_breadcrumb_start;
///
/// assert_eq!(visible_breadcrumb_start(&[4, 4, 4], 40), 0);
/// assert_eq!(visible_breadcrumb_start(&[10, 10, 10], 20), 2);
/// ```
pub fn visible_breadcrumb_start(segment_widths: &[usize], width: u16) -> usize {
    const SEPARATOR: usize = 3;
    let mut used = 0usize;

    for (idx, segment) in segment_widths.iter().enumerate().rev() {
        used += segment + SEPARATOR;
        if used > width as usize {
            return (idx + 1).min(segment_widths.len().saturating_sub(1));
        }
    }
    0
}

/// Position of the lightbox image inside the terminal, leaving side columns
/// for the prev/next affordances
pub fn lightbox_margins(width: u16) -> u16 {
    if width >= 40 {
        3
    } else {
        0
    }
}
