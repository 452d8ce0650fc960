use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout of the album (grid) screen
pub struct AlbumLayout {
    /// Album name and breadcrumb
    pub header_area: Rect,
    /// Folder and image tiles
    pub grid_area: Rect,
    /// Thumbnail of the selected tile (if wide enough)
    pub preview_area: Option<Rect>,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Layout of the lightbox screen
pub struct LightboxLayout {
    /// Image name, date, position and slideshow state
    pub info_area: Rect,
    /// Previous-image affordance column
    pub prev_area: Rect,
    /// The image itself
    pub image_area: Rect,
    /// Next-image affordance column
    pub next_area: Rect,
    pub legend_area: Rect,
    pub status_area: Rect,
}

/// Calculate the screen layout for the album screen
pub fn calculate_album_layout(
    terminal_size: Rect,
    legend_height: u16,
    show_preview: bool,
) -> AlbumLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header (border, breadcrumb, border)
            Constraint::Min(3),                // Tiles (+ preview)
            Constraint::Length(legend_height), // Legend area (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    let (grid_area, preview_area) = if show_preview {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[1]);
        (chunks[0], Some(chunks[1]))
    } else {
        (main_chunks[1], None)
    };

    AlbumLayout {
        header_area: main_chunks[0],
        grid_area,
        preview_area,
        legend_area: main_chunks[2],
        status_area: main_chunks[3],
    }
}

/// Calculate the screen layout for the lightbox
pub fn calculate_lightbox_layout(terminal_size: Rect, legend_height: u16) -> LightboxLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Info bar
            Constraint::Min(3),                // Image with side affordances
            Constraint::Length(legend_height), // Legend
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    let margin = albumtui::logic::layout::lightbox_margins(terminal_size.width);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(margin),
            Constraint::Min(1),
            Constraint::Length(margin),
        ])
        .split(main_chunks[1]);

    LightboxLayout {
        info_area: main_chunks[0],
        prev_area: columns[0],
        image_area: columns[1],
        next_area: columns[2],
        legend_area: main_chunks[2],
        status_area: main_chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_layout_without_preview() {
        let layout = calculate_album_layout(Rect::new(0, 0, 80, 30), 3, false);
        assert!(layout.preview_area.is_none());
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.status_area.y, 27);
        assert_eq!(layout.grid_area.width, 80);
    }

    #[test]
    fn test_album_layout_with_preview_splits_content() {
        let layout = calculate_album_layout(Rect::new(0, 0, 120, 40), 3, true);
        let preview = layout.preview_area.unwrap();
        assert_eq!(layout.grid_area.width + preview.width, 120);
        assert!(layout.grid_area.width > preview.width);
    }

    #[test]
    fn test_lightbox_layout_has_side_columns() {
        let layout = calculate_lightbox_layout(Rect::new(0, 0, 100, 30), 3);
        assert_eq!(layout.prev_area.width, 3);
        assert_eq!(layout.next_area.width, 3);
        assert_eq!(layout.image_area.width, 94);
    }
}
