use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use albumtui::logic::formatting::format_listing_summary;
use albumtui::model::{LoadState, NavigationState};

/// Build the status line: location fragment, load state, listing, history position
///
/// `preloading` adds a marker while the next image is waiting to be fetched.
pub fn build_status_line(navigation: &NavigationState, preloading: bool) -> String {
    let mut metrics = Vec::new();

    metrics.push(format!("Location: #{}", navigation.location()));

    let state = match &navigation.load_state {
        LoadState::Loading => "Loading...".to_string(),
        LoadState::Ready => format_listing_summary(
            navigation.album.folders.len(),
            navigation.album.images.len(),
        ),
        LoadState::Failed { .. } => "Failed".to_string(),
    };
    metrics.push(format!("Album: {}", state));

    let (position, total) = navigation.history.position();
    metrics.push(format!("History: {}/{}", position, total));

    if preloading {
        metrics.push("Preload: pending".to_string());
    }

    metrics.join(" | ")
}

/// Render the bottom status bar
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    navigation: &NavigationState,
    preloading: bool,
) {
    let status_line = build_status_line(navigation, preloading);

    // Color the labels (before colons)
    let mut spans = vec![];
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }
        if let Some(colon_pos) = part.find(':') {
            let label = &part[..=colon_pos];
            let value = &part[colon_pos + 1..];
            let value_style = if value.trim() == "Failed" {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            spans.push(Span::styled(label.to_string(), Style::default().fg(Color::Yellow)));
            spans.push(Span::styled(value.to_string(), value_style));
        } else {
            spans.push(Span::raw(part.to_string()));
        }
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}
