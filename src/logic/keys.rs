//! Key bindings
//!
//! Pure mapping from key events to the intents of each screen. The lightbox
//! bindings only apply while the lightbox is shown.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::navigation::GridMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxAction {
    Dismiss,
    Prev,
    Next,
    /// Auto-advance every N seconds (1-9)
    Slideshow(u8),
    StopSlideshow,
    Back,
    Forward,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAction {
    Move(GridMove),
    Open,
    Parent,
    FocusBreadcrumb,
    Back,
    Forward,
    Refresh,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreadcrumbAction {
    Left,
    Right,
    Open,
    Leave,
    Back,
    Forward,
    Quit,
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn history_action(key: &KeyEvent) -> Option<bool> {
    match key.code {
        KeyCode::Char('[') => Some(false),
        KeyCode::Char(']') => Some(true),
        KeyCode::Left if key.modifiers.contains(KeyModifiers::ALT) => Some(false),
        KeyCode::Right if key.modifiers.contains(KeyModifiers::ALT) => Some(true),
        _ => None,
    }
}

pub fn lightbox_action(key: &KeyEvent) -> Option<LightboxAction> {
    if is_quit(key) {
        return Some(LightboxAction::Quit);
    }
    if let Some(forward) = history_action(key) {
        return Some(if forward {
            LightboxAction::Forward
        } else {
            LightboxAction::Back
        });
    }

    match key.code {
        KeyCode::Esc | KeyCode::Home => Some(LightboxAction::Dismiss),
        KeyCode::Left | KeyCode::Up | KeyCode::PageUp => Some(LightboxAction::Prev),
        KeyCode::Right | KeyCode::Down | KeyCode::PageDown | KeyCode::Char(' ') => {
            Some(LightboxAction::Next)
        }
        KeyCode::Char('0') => Some(LightboxAction::StopSlideshow),
        KeyCode::Char(c @ '1'..='9') => Some(LightboxAction::Slideshow(c as u8 - b'0')),
        _ => None,
    }
}

pub fn grid_action(key: &KeyEvent) -> Option<GridAction> {
    if is_quit(key) {
        return Some(GridAction::Quit);
    }
    if let Some(forward) = history_action(key) {
        return Some(if forward {
            GridAction::Forward
        } else {
            GridAction::Back
        });
    }

    match key.code {
        KeyCode::Left => Some(GridAction::Move(GridMove::Left)),
        KeyCode::Right => Some(GridAction::Move(GridMove::Right)),
        KeyCode::Up => Some(GridAction::Move(GridMove::Up)),
        KeyCode::Down => Some(GridAction::Move(GridMove::Down)),
        KeyCode::Home => Some(GridAction::Move(GridMove::First)),
        KeyCode::End => Some(GridAction::Move(GridMove::Last)),
        KeyCode::Enter => Some(GridAction::Open),
        KeyCode::Backspace => Some(GridAction::Parent),
        KeyCode::Tab => Some(GridAction::FocusBreadcrumb),
        KeyCode::Char('r') => Some(GridAction::Refresh),
        _ => None,
    }
}

pub fn breadcrumb_action(key: &KeyEvent) -> Option<BreadcrumbAction> {
    if is_quit(key) {
        return Some(BreadcrumbAction::Quit);
    }
    if let Some(forward) = history_action(key) {
        return Some(if forward {
            BreadcrumbAction::Forward
        } else {
            BreadcrumbAction::Back
        });
    }

    match key.code {
        KeyCode::Left => Some(BreadcrumbAction::Left),
        KeyCode::Right => Some(BreadcrumbAction::Right),
        KeyCode::Enter => Some(BreadcrumbAction::Open),
        KeyCode::Tab | KeyCode::Esc | KeyCode::Down => Some(BreadcrumbAction::Leave),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_lightbox_dismiss_keys() {
        for code in [KeyCode::Esc, KeyCode::Home] {
            assert_eq!(lightbox_action(&key(code)), Some(LightboxAction::Dismiss));
        }
    }

    #[test]
    fn test_lightbox_prev_keys() {
        for code in [KeyCode::Left, KeyCode::Up, KeyCode::PageUp] {
            assert_eq!(lightbox_action(&key(code)), Some(LightboxAction::Prev));
        }
    }

    #[test]
    fn test_lightbox_next_keys() {
        for code in [
            KeyCode::Right,
            KeyCode::Down,
            KeyCode::PageDown,
            KeyCode::Char(' '),
        ] {
            assert_eq!(lightbox_action(&key(code)), Some(LightboxAction::Next));
        }
    }

    #[test]
    fn test_lightbox_digits_start_slideshow() {
        for digit in 1..=9u8 {
            let c = (b'0' + digit) as char;
            assert_eq!(
                lightbox_action(&key(KeyCode::Char(c))),
                Some(LightboxAction::Slideshow(digit))
            );
        }
        assert_eq!(
            lightbox_action(&key(KeyCode::Char('0'))),
            Some(LightboxAction::StopSlideshow)
        );
    }

    #[test]
    fn test_alt_arrows_are_history_not_stepping() {
        let alt_left = KeyEvent::new(KeyCode::Left, KeyModifiers::ALT);
        assert_eq!(lightbox_action(&alt_left), Some(LightboxAction::Back));
        assert_eq!(grid_action(&alt_left), Some(GridAction::Back));

        let alt_right = KeyEvent::new(KeyCode::Right, KeyModifiers::ALT);
        assert_eq!(breadcrumb_action(&alt_right), Some(BreadcrumbAction::Forward));
    }

    #[test]
    fn test_quit_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(lightbox_action(&ctrl_c), Some(LightboxAction::Quit));
        assert_eq!(grid_action(&key(KeyCode::Char('q'))), Some(GridAction::Quit));
        assert_eq!(
            breadcrumb_action(&key(KeyCode::Char('q'))),
            Some(BreadcrumbAction::Quit)
        );
    }

    #[test]
    fn test_grid_keys() {
        assert_eq!(grid_action(&key(KeyCode::Enter)), Some(GridAction::Open));
        assert_eq!(grid_action(&key(KeyCode::Backspace)), Some(GridAction::Parent));
        assert_eq!(
            grid_action(&key(KeyCode::Down)),
            Some(GridAction::Move(GridMove::Down))
        );
        assert_eq!(grid_action(&key(KeyCode::Char('x'))), None);
    }
}
