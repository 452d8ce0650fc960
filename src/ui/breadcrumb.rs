use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use albumtui::logic::layout::visible_breadcrumb_start;

const SEPARATOR: &str = " › ";

/// Build the breadcrumb line: "Home › 2020 › trip"
///
/// `highlighted` is the segment selected while the breadcrumb has focus.
/// Leading segments that do not fit into `width` are replaced by "…".
pub fn build_breadcrumb_line(
    segments: &[(&str, &str)],
    highlighted: Option<usize>,
    width: u16,
) -> Line<'static> {
    let widths: Vec<usize> = segments.iter().map(|(label, _)| label.width()).collect();
    let start = visible_breadcrumb_start(&widths, width);
    let last = segments.len().saturating_sub(1);

    let mut spans = Vec::new();
    if start > 0 {
        spans.push(Span::styled("…", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
    }

    for (idx, (label, _)) in segments.iter().enumerate().skip(start) {
        let style = if highlighted == Some(idx) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if idx == last {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        spans.push(Span::styled(label.to_string(), style));

        if idx != last {
            spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
        }
    }

    Line::from(spans)
}

/// Render the header: album name as the block title, breadcrumb inside
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    album_name: &str,
    segments: &[(&str, &str)],
    highlighted: Option<usize>,
    server: &str,
) {
    let border_color = if highlighted.is_some() {
        Color::Yellow
    } else {
        Color::Gray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" {} ", album_name),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(Span::styled(
            format!(" {} ", server),
            Style::default().fg(Color::DarkGray),
        ))
        .right_aligned());

    let line = build_breadcrumb_line(segments, highlighted, area.width.saturating_sub(2));
    f.render_widget(Paragraph::new(line).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_breadcrumb_full_path() {
        let segments = [("Home", "/"), ("2020", "2020/"), ("trip", "2020/trip/")];
        let line = build_breadcrumb_line(&segments, None, 80);
        assert_eq!(line_text(&line), "Home › 2020 › trip");
    }

    #[test]
    fn test_breadcrumb_root_only() {
        let line = build_breadcrumb_line(&[("Home", "/")], None, 80);
        assert_eq!(line_text(&line), "Home");
    }

    #[test]
    fn test_breadcrumb_elides_leading_segments() {
        let segments = [
            ("Home", "/"),
            ("a-very-long-folder-name", "a/"),
            ("another-long-name", "a/b/"),
        ];
        let line = build_breadcrumb_line(&segments, None, 24);
        let text = line_text(&line);
        assert!(text.starts_with("…"));
        assert!(text.ends_with("another-long-name"));
        assert!(!text.contains("Home"));
    }

    #[test]
    fn test_breadcrumb_highlight_style() {
        let segments = [("Home", "/"), ("2020", "2020/")];
        let line = build_breadcrumb_line(&segments, Some(0), 80);
        assert_eq!(line.spans[0].style.bg, Some(Color::Yellow));
        assert_eq!(line.spans[2].style.bg, None);
    }
}
