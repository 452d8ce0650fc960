use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Which screen the legend describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendMode {
    Grid,
    Breadcrumb,
    Lightbox,
}

fn key(label: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(label, Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ]
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(
    mode: LegendMode,
    can_go_back: bool,
    can_go_forward: bool,
    slideshow_running: bool,
) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    match mode {
        LegendMode::Grid => {
            hotkey_spans.extend(key("←↑↓→", ":Move  "));
            hotkey_spans.extend(key("Enter", ":Open  "));
            hotkey_spans.extend(key("Bksp", ":Parent  "));
            hotkey_spans.extend(key("Tab", ":Breadcrumb  "));
            hotkey_spans.extend(key("r", ":Reload  "));
        }
        LegendMode::Breadcrumb => {
            hotkey_spans.extend(key("←/→", ":Select  "));
            hotkey_spans.extend(key("Enter", ":Go  "));
            hotkey_spans.extend(key("Tab/Esc", ":Tiles  "));
        }
        LegendMode::Lightbox => {
            hotkey_spans.extend(key("←/PgUp", ":Prev  "));
            hotkey_spans.extend(key("→/PgDn/Space", ":Next  "));
            hotkey_spans.extend(key("Esc", ":Close  "));
            hotkey_spans.extend(key("1-9", ":Slideshow  "));
            if slideshow_running {
                hotkey_spans.extend(key("0", ":Stop  "));
            }
        }
    }

    // History - only when there is somewhere to go
    if can_go_back {
        hotkey_spans.extend(key("[", ":Back  "));
    }
    if can_go_forward {
        hotkey_spans.extend(key("]", ":Forward  "));
    }

    // Quit - always available
    hotkey_spans.extend(key("q", ":Quit"));

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(
    mode: LegendMode,
    can_go_back: bool,
    can_go_forward: bool,
    slideshow_running: bool,
) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(
        mode,
        can_go_back,
        can_go_forward,
        slideshow_running,
    ));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend for the active screen
pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    mode: LegendMode,
    can_go_back: bool,
    can_go_forward: bool,
    slideshow_running: bool,
) {
    let legend = build_legend_paragraph(mode, can_go_back, can_go_forward, slideshow_running);
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    mode: LegendMode,
    can_go_back: bool,
    can_go_forward: bool,
    slideshow_running: bool,
) -> u16 {
    // Count wrapped lines without the block; borders are added below
    let hotkey_line = Line::from(build_hotkey_spans(
        mode,
        can_go_back,
        can_go_forward,
        slideshow_running,
    ));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
