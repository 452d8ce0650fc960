use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use albumtui::logic::formatting::format_month_year;
use albumtui::model::Tile;

/// Cut `text` to at most `max_width` display cells, ending in "…" when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Lines shown inside a tile: name, then the date for folders
pub fn tile_lines(tile: Tile<'_>, inner_width: usize) -> Vec<Line<'static>> {
    match tile {
        Tile::Folder(folder) => vec![
            Line::from(vec![
                Span::styled("▸ ", Style::default().fg(Color::Blue)),
                Span::styled(
                    truncate_to_width(&folder.name, inner_width.saturating_sub(2)),
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format_month_year(folder.time),
                Style::default().fg(Color::Gray),
            )),
        ],
        Tile::Image(image) => vec![Line::from(Span::raw(truncate_to_width(
            &image.name,
            inner_width,
        )))],
    }
}

/// Render one folder or image tile
pub fn render_tile(f: &mut Frame, area: Rect, tile: Tile<'_>, selected: bool) {
    let border_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let lines = tile_lines(tile, area.width.saturating_sub(2) as usize);

    let mut paragraph = Paragraph::new(lines).block(block);
    if selected {
        paragraph = paragraph.style(Style::default().add_modifier(Modifier::REVERSED));
    }
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use albumtui::api::{FolderEntry, ImageEntry};

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_to_width("abc", 10), "abc");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
        assert_eq!(truncate_to_width("abcdefgh", 0), "");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // Each CJK character is two cells wide
        let cut = truncate_to_width("日本語の写真", 5);
        assert!(cut.width() <= 5);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn test_folder_tile_has_name_and_date() {
        let folder = FolderEntry {
            name: "trip".to_string(),
            path: "2020/trip/".to_string(),
            time: 1_592_000_000, // mid June 2020
            url: "/2020/trip/a.jpg".to_string(),
        };
        let lines = tile_lines(Tile::Folder(&folder), 24);
        assert_eq!(lines.len(), 2);
        let date: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(date, "June 2020");
    }

    #[test]
    fn test_image_tile_shows_name() {
        let image = ImageEntry {
            name: "beach.jpg".to_string(),
            url: "/2020/beach.jpg".to_string(),
            time: 0,
        };
        let lines = tile_lines(Tile::Image(&image), 24);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, "beach.jpg");
    }
}
