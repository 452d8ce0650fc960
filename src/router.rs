//! Location fragments and history
//!
//! A location fragment is the client-side route `<folder-path>[<image>.jpg]`.
//! `decode`/`encode` convert between fragments and [`Route`]s, and [`History`]
//! keeps the back/forward stack that navigation pushes onto.

use std::collections::VecDeque;

/// Root folder path
pub const ROOT: &str = "/";

/// Maximum number of history entries kept before the oldest are dropped
pub const HISTORY_LIMIT: usize = 256;

/// A decoded location: folder path plus an optional image in that folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub image: Option<String>,
}

impl Route {
    pub fn folder(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            image: None,
        }
    }
}

/// Whether a path segment names an image (case-insensitive `.jpg` suffix)
pub fn is_image_segment(segment: &str) -> bool {
    segment.to_lowercase().ends_with(".jpg")
}

/// Decode a location fragment (with or without the leading `#`)
///
/// # Examples
/// ```
/// use albumtui::router::{decode, Route};
///
/// assert_eq!(decode(""), Route::folder("/"));
/// assert_eq!(decode("2020/trip"), Route::folder("2020/trip"));
///
/// let route = decode("#2020/trip/photo.JPG");
/// assert_eq!(route.path, "2020/trip/");
/// assert_eq!(route.image.as_deref(), Some("photo.JPG"));
/// ```
pub fn decode(fragment: &str) -> Route {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    if fragment.is_empty() {
        return Route::folder(ROOT);
    }

    let segments: Vec<&str> = fragment.split('/').collect();
    match segments.split_last() {
        Some((last, folders)) if is_image_segment(last) => Route {
            path: format!("{}/", folders.join("/")),
            image: Some((*last).to_string()),
        },
        _ => Route::folder(fragment),
    }
}

/// Build the fragment for a folder path and optional image name (no leading `#`)
///
/// An image name is always preceded by `/`, so `decode` recovers it even when
/// the folder path was given without a trailing separator.
pub fn encode(path: &str, image: Option<&str>) -> String {
    match image {
        Some(name) if path.ends_with('/') => format!("{}{}", path, name),
        Some(name) => format!("{}/{}", path, name),
        None => path.to_string(),
    }
}

/// Whether two folder paths name the same folder, ignoring a trailing `/`
pub fn same_folder(a: &str, b: &str) -> bool {
    a.trim_end_matches('/') == b.trim_end_matches('/')
}

/// Back/forward stack of location fragments
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    cursor: usize,
}

impl History {
    pub fn new(initial: &str) -> Self {
        let mut entries = VecDeque::new();
        entries.push_back(initial.to_string());
        Self { entries, cursor: 0 }
    }

    /// Fragment of the entry the cursor points at
    pub fn current(&self) -> &str {
        self.entries
            .get(self.cursor)
            .map(String::as_str)
            .unwrap_or(ROOT)
    }

    /// Push a new entry, discarding anything ahead of the cursor
    pub fn push(&mut self, fragment: String) {
        if self.current() == fragment {
            return;
        }

        self.entries.truncate(self.cursor + 1);
        self.entries.push_back(fragment);

        if self.entries.len() > HISTORY_LIMIT {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Move one entry back; returns the fragment to resynchronize to
    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Move one entry forward; returns the fragment to resynchronize to
    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// (1-based position, total entries) for the status bar
    pub fn position(&self) -> (usize, usize) {
        (self.cursor + 1, self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_is_root() {
        assert_eq!(decode(""), Route::folder("/"));
        assert_eq!(decode("#"), Route::folder("/"));
    }

    #[test]
    fn test_decode_folder_keeps_fragment() {
        assert_eq!(decode("2020/trip"), Route::folder("2020/trip"));
        assert_eq!(decode("2020/trip/"), Route::folder("2020/trip/"));
    }

    #[test]
    fn test_decode_image_is_case_insensitive() {
        let route = decode("2020/trip/photo.JPG");
        assert_eq!(route.path, "2020/trip/");
        assert_eq!(route.image.as_deref(), Some("photo.JPG"));
    }

    #[test]
    fn test_decode_image_at_root_level() {
        let route = decode("/photo.jpg");
        assert_eq!(route.path, "/");
        assert_eq!(route.image.as_deref(), Some("photo.jpg"));
    }

    #[test]
    fn test_decode_non_jpg_is_folder() {
        assert_eq!(decode("2020/clip.png"), Route::folder("2020/clip.png"));
    }

    #[test]
    fn test_encode_roundtrip_image() {
        let fragment = encode("2020/trip/", Some("a.jpg"));
        assert_eq!(fragment, "2020/trip/a.jpg");
        let route = decode(&fragment);
        assert_eq!(route.path, "2020/trip/");
        assert_eq!(route.image.as_deref(), Some("a.jpg"));
    }

    #[test]
    fn test_encode_inserts_separator_before_image() {
        assert_eq!(encode("2020/trip", Some("a.jpg")), "2020/trip/a.jpg");
        assert_eq!(encode("/", Some("a.jpg")), "/a.jpg");
    }

    #[test]
    fn test_same_folder_ignores_trailing_separator() {
        assert!(same_folder("2020/trip", "2020/trip/"));
        assert!(same_folder("/", "/"));
        assert!(!same_folder("2020/", "2020/trip/"));
    }

    #[test]
    fn test_path_roundtrip() {
        for path in ["/", "2020", "2020/trip", "2020/trip/", "a/b/c/d"] {
            assert_eq!(decode(&encode(path, None)).path, path);
        }
    }

    #[test]
    fn test_history_push_back_forward() {
        let mut history = History::new("/");
        history.push("2020/".to_string());
        history.push("2020/trip/".to_string());
        assert_eq!(history.position(), (3, 3));

        assert_eq!(history.back(), Some("2020/"));
        assert_eq!(history.back(), Some("/"));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), Some("2020/"));
        assert!(history.can_go_forward());
    }

    #[test]
    fn test_history_push_truncates_forward_stack() {
        let mut history = History::new("/");
        history.push("a/".to_string());
        history.push("b/".to_string());
        history.back();
        history.push("c/".to_string());

        assert!(!history.can_go_forward());
        assert_eq!(history.back(), Some("a/"));
    }

    #[test]
    fn test_history_ignores_duplicate_push() {
        let mut history = History::new("/");
        history.push("/".to_string());
        assert_eq!(history.position(), (1, 1));
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = History::new("/");
        for i in 0..(HISTORY_LIMIT + 10) {
            history.push(format!("{}/", i));
        }
        assert_eq!(history.position(), (HISTORY_LIMIT, HISTORY_LIMIT));
        assert_eq!(history.current(), format!("{}/", HISTORY_LIMIT + 9));
    }
}
