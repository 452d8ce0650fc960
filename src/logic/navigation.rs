//! Navigation selection logic
//!
//! Pure functions for circular stepping through image lists and for moving
//! the grid cursor.

/// Index of the image after `current` in a list of `len`, wrapping to the start
///
/// # Examples
/// ```
/// use albumtui::logic::navigation::next_index;
///
/// assert_eq!(next_index(0, 0), None);
/// assert_eq!(next_index(0, 3), Some(1));
/// assert_eq!(next_index(2, 3), Some(0));
/// assert_eq!(next_index(0, 1), Some(0));
/// ```
pub fn next_index(current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((current % len + 1) % len)
}

/// Index of the image before `current` in a list of `len`, wrapping to the end
///
/// # Examples
/// ```
/// use albumtui::logic::navigation::prev_index;
///
/// assert_eq!(prev_index(0, 0), None);
/// assert_eq!(prev_index(1, 3), Some(0));
/// assert_eq!(prev_index(0, 3), Some(2));
/// assert_eq!(prev_index(0, 1), Some(0));
/// ```
pub fn prev_index(current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((current % len + len - 1) % len)
}

/// Direction of a cursor move inside the tile grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Left,
    Right,
    Up,
    Down,
    First,
    Last,
}

/// Move the grid cursor, clamping at the edges
///
/// Left/Right step through items in reading order; Up/Down jump a full row
/// and stay put when no row exists in that direction.
///
/// # Examples
/// ```
/// use albumtui::logic::navigation::{move_cursor, GridMove};
///
/// // 7 items laid out 3 per row
/// assert_eq!(move_cursor(0, 7, 3, GridMove::Right), 1);
/// assert_eq!(move_cursor(1, 7, 3, GridMove::Down), 4);
/// assert_eq!(move_cursor(5, 7, 3, GridMove::Down), 6); // last row is short
/// assert_eq!(move_cursor(1, 7, 3, GridMove::Up), 1);
/// ```
pub fn move_cursor(current: usize, len: usize, columns: usize, movement: GridMove) -> usize {
    if len == 0 {
        return 0;
    }
    let columns = columns.max(1);
    let last = len - 1;
    let current = current.min(last);

    match movement {
        GridMove::Left => current.saturating_sub(1),
        GridMove::Right => (current + 1).min(last),
        GridMove::Up => {
            if current >= columns {
                current - columns
            } else {
                current
            }
        }
        GridMove::Down => {
            let current_row = current / columns;
            let last_row = last / columns;
            if current_row < last_row {
                (current + columns).min(last)
            } else {
                current
            }
        }
        GridMove::First => 0,
        GridMove::Last => last,
    }
}
