use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use ratatui_image::StatefulImage;

use albumtui::api::ImageEntry;
use albumtui::logic::formatting::{format_bytes, format_position, format_timestamp};
use albumtui::model::Slideshow;
use albumtui::services::ImagePreviewState;

use super::layout::LightboxLayout;

/// Build the info line: name, date, position and slideshow state
pub fn build_info_line(
    image: &ImageEntry,
    index: usize,
    total: usize,
    slideshow: Option<&Slideshow>,
) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            image.name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format_timestamp(image.time), Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled(format_position(index, total), Style::default().fg(Color::Cyan)),
    ];

    if let Some(slideshow) = slideshow {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("▶ {}s", slideshow.interval.as_secs()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    }

    Line::from(spans)
}

fn render_affordance(f: &mut Frame, area: Rect, symbol: &str) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    // Vertically centered arrow
    let arrow_area = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1,
    };
    let arrow = Paragraph::new(symbol)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(arrow, arrow_area);
}

/// Render the full-screen image view
pub fn render_lightbox(
    f: &mut Frame,
    layout: &LightboxLayout,
    image: &ImageEntry,
    index: usize,
    total: usize,
    slideshow: Option<&Slideshow>,
    state: Option<&mut ImagePreviewState>,
) {
    let info = Paragraph::new(build_info_line(image, index, total, slideshow))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(info, layout.info_area);

    render_affordance(f, layout.prev_area, "‹");
    render_affordance(f, layout.next_area, "›");

    let message = match state {
        Some(ImagePreviewState::Ready { protocol, .. }) => {
            f.render_stateful_widget(StatefulImage::default(), layout.image_area, protocol);
            return;
        }
        Some(ImagePreviewState::Loading) | None => "Loading image...".to_string(),
        Some(ImagePreviewState::Failed { message }) => format!("Image unavailable: {}", message),
    };

    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    f.render_widget(text, layout.image_area);
}

/// Caption for an image: "<w>x<h>, <size>" once it is decoded
pub fn image_caption(state: Option<&ImagePreviewState>) -> Option<String> {
    match state {
        Some(ImagePreviewState::Ready { metadata, .. }) => {
            let size = format_bytes(metadata.byte_size);
            Some(match metadata.dimensions {
                Some((w, h)) => format!("{}x{}, {}", w, h, size),
                None => size,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn image() -> ImageEntry {
        ImageEntry {
            name: "a.jpg".to_string(),
            url: "/a.jpg".to_string(),
            time: 0,
        }
    }

    #[test]
    fn test_info_line_shows_position() {
        let text = line_text(&build_info_line(&image(), 2, 5, None));
        assert!(text.starts_with("a.jpg"));
        assert!(text.ends_with("3/5"));
    }

    #[test]
    fn test_info_line_shows_slideshow() {
        let slideshow = Slideshow::new(4, Instant::now());
        let text = line_text(&build_info_line(&image(), 0, 1, Some(&slideshow)));
        assert!(text.ends_with("▶ 4s"));
    }

    #[test]
    fn test_caption_only_for_decoded_images() {
        assert_eq!(image_caption(None), None);
        assert_eq!(image_caption(Some(&ImagePreviewState::Loading)), None);
    }
}
