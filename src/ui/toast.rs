use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Area for a toast near the top of `area`, at most 80 cells wide
pub fn toast_area(area: Rect, message: &str) -> Rect {
    let max_width = area.width.min(80) as usize;
    let toast_width = (message.width() + 6).min(max_width) as u16;
    let toast_height = 4.min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(toast_width) / 2,
        y: area.y + 3.min(area.height.saturating_sub(toast_height)),
        width: toast_width,
        height: toast_height,
    }
}

/// Render a toast notification (brief pop-up message)
pub fn render_toast(f: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_area(area, message);

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    let is_error = message.starts_with("Error:");
    let (icon, color) = if is_error {
        ("✗ ", Color::Red)
    } else {
        ("✓ ", Color::Green)
    };

    let toast_line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(message.to_string()),
    ]);

    let toast_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    let toast_text = Paragraph::new(vec![toast_line])
        .block(toast_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast_text, toast_area);
}
