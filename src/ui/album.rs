use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use ratatui_image::StatefulImage;

use albumtui::logic::errors::error_headline;
use albumtui::logic::formatting::format_listing_summary;
use albumtui::logic::layout::{calculate_grid, scroll_offset, TILE_HEIGHT, TILE_WIDTH};
use albumtui::model::{LoadState, NavigationState, UiModel};
use albumtui::services::ImagePreviewState;

use super::tiles::render_tile;

/// Render the tile grid, or the loading / error / empty message in its place
pub fn render_album_pane(
    f: &mut Frame,
    area: Rect,
    navigation: &NavigationState,
    ui: &mut UiModel,
    focused: bool,
) {
    let summary = format_listing_summary(
        navigation.album.folders.len(),
        navigation.album.images.len(),
    );
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", summary));

    match &navigation.load_state {
        LoadState::Loading => {
            let text = Paragraph::new("Loading...")
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray));
            f.render_widget(text, area);
        }
        LoadState::Failed {
            error_type,
            message,
        } => {
            let lines = vec![
                Line::from(Span::styled(
                    error_headline(error_type),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(message.clone()),
                Line::from(""),
                Line::from(vec![
                    Span::raw("Press "),
                    Span::styled("r", Style::default().fg(Color::Yellow)),
                    Span::raw(" to retry"),
                ]),
            ];
            let text = Paragraph::new(lines)
                .block(block.border_style(Style::default().fg(Color::Red)))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(text, area);
        }
        LoadState::Ready if navigation.tile_count() == 0 => {
            let text = Paragraph::new("This folder is empty")
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(text, area);
        }
        LoadState::Ready => {
            let inner = block.inner(area);
            f.render_widget(block, area);
            render_tile_grid(f, inner, navigation, ui);
        }
    }
}

/// Lay tiles out row by row, scrolled so the cursor stays visible
fn render_tile_grid(f: &mut Frame, area: Rect, navigation: &NavigationState, ui: &mut UiModel) {
    let geometry = calculate_grid(area.width, area.height);
    ui.grid_columns = geometry.columns;

    let cursor_row = navigation.cursor / geometry.columns;
    ui.grid_offset = scroll_offset(cursor_row, ui.grid_offset, geometry.visible_rows);

    let first = ui.grid_offset * geometry.columns;
    let last = (first + geometry.visible_rows * geometry.columns).min(navigation.tile_count());

    for index in first..last {
        let Some(tile) = navigation.tile(index) else {
            break;
        };
        let row = (index - first) / geometry.columns;
        let column = index % geometry.columns;

        let tile_area = Rect {
            x: area.x + column as u16 * TILE_WIDTH,
            y: area.y + row as u16 * TILE_HEIGHT,
            width: TILE_WIDTH.min(area.width),
            height: TILE_HEIGHT.min(area.height),
        };
        render_tile(f, tile_area, tile, index == navigation.cursor);
    }
}

/// Render the thumbnail of the selected tile
pub fn render_preview_pane(
    f: &mut Frame,
    area: Rect,
    caption: Option<&str>,
    state: Option<&mut ImagePreviewState>,
) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray))
        .title(" Preview ");
    if let Some(caption) = caption {
        block = block.title_bottom(Line::from(format!(" {} ", caption)).centered());
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let message = match state {
        Some(ImagePreviewState::Ready { protocol, .. }) => {
            f.render_stateful_widget(StatefulImage::default(), inner, protocol);
            return;
        }
        Some(ImagePreviewState::Loading) => "Loading preview...".to_string(),
        Some(ImagePreviewState::Failed { message }) => format!("Preview unavailable: {}", message),
        None => "No preview".to_string(),
    };

    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    f.render_widget(text, inner);
}
