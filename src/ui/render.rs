use ratatui::Frame;

use albumtui::model::Focus;

use crate::App;

use super::{
    album, breadcrumb, layout,
    legend::{self, LegendMode},
    lightbox, status_bar, toast,
};

/// Main render function - orchestrates all UI rendering
///
/// Exactly one of the album screen and the lightbox is drawn, depending on
/// whether an image is selected.
pub fn render(f: &mut Frame, app: &mut App) {
    if app.model.lightbox_open() {
        render_lightbox_screen(f, app);
    } else {
        render_album_screen(f, app);
    }

    // Render toast notification on top of everything
    if let Some((message, _)) = &app.model.ui.toast_message {
        toast::render_toast(f, f.area(), message);
    }
}

fn render_album_screen(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let navigation = &app.model.navigation;

    let mode = match navigation.focus {
        Focus::Grid => LegendMode::Grid,
        Focus::Breadcrumb => LegendMode::Breadcrumb,
    };
    let can_go_back = navigation.history.can_go_back();
    let can_go_forward = navigation.history.can_go_forward();
    let legend_height =
        legend::calculate_legend_height(size.width, mode, can_go_back, can_go_forward, false);

    let show_preview = app.preview_pane_visible();
    let thumbnail_key = app.thumbnail_key();
    let layout_info = layout::calculate_album_layout(size, legend_height, show_preview);

    let navigation = &app.model.navigation;
    let breadcrumb_focused = navigation.focus == Focus::Breadcrumb;
    let highlighted = breadcrumb_focused.then_some(navigation.breadcrumb_cursor);
    breadcrumb::render_header(
        f,
        layout_info.header_area,
        navigation.window_title(),
        &navigation.breadcrumb(),
        highlighted,
        &app.base_url,
    );

    album::render_album_pane(
        f,
        layout_info.grid_area,
        &app.model.navigation,
        &mut app.model.ui,
        !breadcrumb_focused,
    );

    if let Some(preview_area) = layout_info.preview_area {
        let state = match thumbnail_key.as_deref() {
            Some(key) => app.image_state_map.get_mut(key),
            None => None,
        };
        let caption = lightbox::image_caption(state.as_deref());
        album::render_preview_pane(f, preview_area, caption.as_deref(), state);
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        mode,
        can_go_back,
        can_go_forward,
        false,
    );
    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        &app.model.navigation,
        app.preload.is_pending(),
    );
}

fn render_lightbox_screen(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let navigation = &app.model.navigation;
    let slideshow_running = app.model.ui.slideshow.is_some();
    let can_go_back = navigation.history.can_go_back();
    let can_go_forward = navigation.history.can_go_forward();

    let legend_height = legend::calculate_legend_height(
        size.width,
        LegendMode::Lightbox,
        can_go_back,
        can_go_forward,
        slideshow_running,
    );
    let layout_info = layout::calculate_lightbox_layout(size, legend_height);

    let key = app.lightbox_image_key();
    let navigation = &app.model.navigation;
    if let (Some(image), Some(index)) = (navigation.current_image(), navigation.current_image_index())
    {
        let state = match key.as_deref() {
            Some(key) => app.image_state_map.get_mut(key),
            None => None,
        };
        lightbox::render_lightbox(
            f,
            &layout_info,
            image,
            index,
            navigation.album.images.len(),
            app.model.ui.slideshow.as_ref(),
            state,
        );
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        LegendMode::Lightbox,
        can_go_back,
        can_go_forward,
        slideshow_running,
    );
    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        &app.model.navigation,
        app.preload.is_pending(),
    );
}
