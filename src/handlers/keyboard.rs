//! Keyboard Input Handler
//!
//! Dispatches key presses to the active screen: the lightbox while an image is
//! open, otherwise the breadcrumb or the tile grid depending on focus.

use crossterm::event::KeyEvent;
use tracing::debug;

use albumtui::logic::keys::{
    breadcrumb_action, grid_action, lightbox_action, BreadcrumbAction, GridAction, LightboxAction,
};
use albumtui::model::{Focus, Step};

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let was_open = app.model.lightbox_open();

    if was_open {
        handle_lightbox_key(app, key);
    } else {
        match app.model.navigation.focus {
            Focus::Grid => handle_grid_key(app, key),
            Focus::Breadcrumb => handle_breadcrumb_key(app, key),
        }
    }

    // Any way out of the lightbox ends the slideshow
    if was_open && !app.model.lightbox_open() {
        app.model.on_lightbox_closed();
    }
}

fn handle_lightbox_key(app: &mut App, key: KeyEvent) {
    let Some(action) = lightbox_action(&key) else {
        return;
    };
    debug!(?action, "lightbox key");

    match action {
        LightboxAction::Dismiss => {
            let effects = app.model.navigation.dismiss_image();
            app.run_effects(effects);
        }
        LightboxAction::Prev => {
            let result = app.model.navigation.step_image(Step::Prev);
            app.apply_navigation(result);
        }
        LightboxAction::Next => {
            let result = app.model.navigation.step_image(Step::Next);
            app.apply_navigation(result);
        }
        LightboxAction::Slideshow(seconds) => {
            app.model.ui.start_slideshow(seconds);
            app.model.show_toast(format!("Slideshow: every {}s", seconds));
        }
        LightboxAction::StopSlideshow => {
            if app.model.ui.slideshow.is_some() {
                app.model.ui.stop_slideshow();
                app.model.show_toast("Slideshow stopped".to_string());
            }
        }
        LightboxAction::Back => {
            let effects = app.model.navigation.go_back();
            app.run_effects(effects);
        }
        LightboxAction::Forward => {
            let effects = app.model.navigation.go_forward();
            app.run_effects(effects);
        }
        LightboxAction::Quit => app.model.ui.should_quit = true,
    }
}

fn handle_grid_key(app: &mut App, key: KeyEvent) {
    let Some(action) = grid_action(&key) else {
        return;
    };

    match action {
        GridAction::Move(movement) => {
            let columns = app.model.ui.grid_columns;
            app.model.navigation.move_cursor(movement, columns);
        }
        GridAction::Open => {
            let result = app.model.navigation.activate_selected();
            app.apply_navigation(result);
        }
        GridAction::Parent => {
            let result = app.model.navigation.navigate_up();
            app.apply_navigation(result);
        }
        GridAction::FocusBreadcrumb => app.model.navigation.focus_breadcrumb(),
        GridAction::Back => {
            let effects = app.model.navigation.go_back();
            app.run_effects(effects);
        }
        GridAction::Forward => {
            let effects = app.model.navigation.go_forward();
            app.run_effects(effects);
        }
        GridAction::Refresh => {
            let effects = app.model.navigation.refresh();
            app.run_effects(effects);
        }
        GridAction::Quit => app.model.ui.should_quit = true,
    }
}

fn handle_breadcrumb_key(app: &mut App, key: KeyEvent) {
    let Some(action) = breadcrumb_action(&key) else {
        return;
    };

    match action {
        BreadcrumbAction::Left => app.model.navigation.move_breadcrumb(false),
        BreadcrumbAction::Right => app.model.navigation.move_breadcrumb(true),
        BreadcrumbAction::Open => {
            let result = app.model.navigation.activate_breadcrumb();
            app.apply_navigation(result);
        }
        BreadcrumbAction::Leave => app.model.navigation.focus_grid(),
        BreadcrumbAction::Back => {
            let effects = app.model.navigation.go_back();
            app.run_effects(effects);
        }
        BreadcrumbAction::Forward => {
            let effects = app.model.navigation.go_forward();
            app.run_effects(effects);
        }
        BreadcrumbAction::Quit => app.model.ui.should_quit = true,
    }
}
