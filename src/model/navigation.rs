//! Navigation Model
//!
//! Keeps the current path, the fetched album, and the selected image
//! consistent with the location history. Every operation is synchronous and
//! returns the [`Effect`]s the runtime has to perform (fetches, preloads);
//! fetch completions come back through [`NavigationState::apply_album`].

use tracing::{debug, warn};

use crate::api::{AlbumView, FetchError, FolderEntry, ImageEntry};
use crate::logic::errors::{self, ErrorType, NavigationError};
use crate::logic::navigation::{move_cursor, next_index, prev_index, GridMove};
use crate::logic::path::{breadcrumb_targets, parent_path, validate_image_name, validate_path};
use crate::router::{self, History, ROOT};

/// What the album pane shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed { error_type: ErrorType, message: String },
}

/// Side effects requested by a navigation operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch album metadata; the response must be handed back with the same id and path
    Fetch { request_id: u64, path: String },
    /// Warm the image cache with this image after the preload delay
    SchedulePreload(ImageEntry),
    /// Drop any pending preload
    CancelPreload,
}

/// Direction for stepping through images in the lightbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

/// Which part of the album screen receives arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Grid,
    Breadcrumb,
}

/// An entry of the tile grid (folders first, then images)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile<'a> {
    Folder(&'a FolderEntry),
    Image(&'a ImageEntry),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingFetch {
    request_id: u64,
    path: String,
    image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NavigationState {
    /// Folder currently shown (or being fetched)
    pub path: String,

    /// Last album received for `path`; listings are cleared while a new path loads
    pub album: AlbumView,

    pub load_state: LoadState,

    pub history: History,

    /// Index into `album.images` of the lightbox image
    current_image: Option<usize>,

    pending: Option<PendingFetch>,
    next_request_id: u64,

    /// Grid cursor over folders followed by images
    pub cursor: usize,

    pub focus: Focus,

    /// Selected breadcrumb segment (0 = Home) while the breadcrumb has focus
    pub breadcrumb_cursor: usize,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            path: ROOT.to_string(),
            album: AlbumView::loading(),
            load_state: LoadState::Loading,
            history: History::new(ROOT),
            current_image: None,
            pending: None,
            next_request_id: 1,
            cursor: 0,
            focus: Focus::Grid,
            breadcrumb_cursor: 0,
        }
    }

    /// Start from a location fragment: show the placeholder and fetch its folder
    pub fn initialize(&mut self, fragment: &str) -> Vec<Effect> {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let route = router::decode(fragment);
        debug!(fragment, path = %route.path, image = ?route.image, "initializing navigation");

        self.history = History::new(&router::encode(&route.path, route.image.as_deref()));
        self.path = route.path.clone();
        self.album = AlbumView::loading();
        self.reset_selection();

        vec![self.start_fetch(route.path, route.image)]
    }

    /// Open a folder: clear the listing right away, record history, refetch
    pub fn navigate_to_folder(&mut self, path: &str) -> Result<Vec<Effect>, NavigationError> {
        validate_path(path)?;
        debug!(path, "navigate to folder");

        self.path = path.to_string();
        self.clear_listing();
        self.history.push(router::encode(path, None));

        Ok(vec![
            Effect::CancelPreload,
            self.start_fetch(path.to_string(), None),
        ])
    }

    /// Open the lightbox on the image called `name`
    pub fn select_image(&mut self, name: &str) -> Result<Vec<Effect>, NavigationError> {
        validate_image_name(name)?;

        let index = self
            .album
            .image_index(name)
            .ok_or_else(|| NavigationError::NotFound {
                name: name.to_string(),
            })?;

        self.current_image = Some(index);
        self.history.push(router::encode(&self.path, Some(name)));
        self.track_pending_selection();
        debug!(name, index, "image selected");

        Ok(self.preload_next())
    }

    /// Close the lightbox and return to the folder grid
    pub fn dismiss_image(&mut self) -> Vec<Effect> {
        if let Some(index) = self.current_image.take() {
            self.cursor = self.album.folders.len() + index;
        }
        self.history.push(router::encode(&self.path, None));
        self.track_pending_selection();
        vec![Effect::CancelPreload]
    }

    /// Move the lightbox to the neighbouring image, wrapping at both ends
    pub fn step_image(&mut self, step: Step) -> Result<Vec<Effect>, NavigationError> {
        let current = self
            .current_image
            .ok_or(NavigationError::NoImageSelected)?;
        let len = self.album.images.len();

        let target = match step {
            Step::Prev => prev_index(current, len),
            Step::Next => next_index(current, len),
        }
        .ok_or(NavigationError::NoImageSelected)?;

        self.current_image = Some(target);
        let name = self.album.images[target].name.clone();
        self.history.push(router::encode(&self.path, Some(&name)));
        self.track_pending_selection();

        Ok(match step {
            Step::Next => self.preload_next(),
            Step::Prev => vec![Effect::CancelPreload],
        })
    }

    pub fn current_image(&self) -> Option<&ImageEntry> {
        self.current_image.and_then(|i| self.album.images.get(i))
    }

    pub fn current_image_index(&self) -> Option<usize> {
        self.current_image
    }

    pub fn prev_image(&self) -> Option<&ImageEntry> {
        let index = prev_index(self.current_image?, self.album.images.len())?;
        self.album.images.get(index)
    }

    pub fn next_image(&self) -> Option<&ImageEntry> {
        let index = next_index(self.current_image?, self.album.images.len())?;
        self.album.images.get(index)
    }

    /// Whether the lightbox (rather than the grid) is visible
    pub fn lightbox_open(&self) -> bool {
        self.current_image.is_some()
    }

    /// Hand a fetch result back. Returns false when the response is stale
    /// (superseded by a later navigation) and was ignored.
    pub fn apply_album(
        &mut self,
        request_id: u64,
        path: &str,
        result: Result<AlbumView, FetchError>,
    ) -> bool {
        let matches = self
            .pending
            .as_ref()
            .is_some_and(|p| p.request_id == request_id && p.path == path);
        if !matches {
            debug!(request_id, path, "ignoring stale album response");
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };

        match result {
            Ok(album) => {
                self.album = album;
                self.load_state = LoadState::Ready;
                self.cursor = 0;
                self.current_image = None;

                if let Some(name) = pending.image {
                    match self.album.image_index(&name) {
                        Some(index) => {
                            self.current_image = Some(index);
                            self.cursor = self.album.folders.len() + index;
                        }
                        None => warn!(name = %name, path, "image from location not in album"),
                    }
                }
                debug!(
                    path,
                    folders = self.album.folders.len(),
                    images = self.album.images.len(),
                    "album loaded"
                );
            }
            Err(error) => {
                let error_type = errors::classify_error(&error);
                let message = errors::format_error_message(&error);
                warn!(path, ?error_type, %message, "album fetch failed");
                self.load_state = LoadState::Failed {
                    error_type,
                    message,
                };
            }
        }
        true
    }

    /// Resynchronize to a fragment reached through back/forward
    pub fn on_history_pop(&mut self, fragment: &str) -> Vec<Effect> {
        let route = router::decode(fragment);

        let loaded = self.load_state == LoadState::Ready && self.pending.is_none();
        if loaded && router::same_folder(&route.path, &self.path) {
            self.current_image = route
                .image
                .as_deref()
                .and_then(|name| self.album.image_index(name));
            return match self.current_image {
                Some(_) => Vec::new(),
                None => vec![Effect::CancelPreload],
            };
        }

        self.path = route.path.clone();
        self.clear_listing();
        vec![
            Effect::CancelPreload,
            self.start_fetch(route.path, route.image),
        ]
    }

    pub fn go_back(&mut self) -> Vec<Effect> {
        match self.history.back().map(str::to_string) {
            Some(fragment) => self.on_history_pop(&fragment),
            None => Vec::new(),
        }
    }

    pub fn go_forward(&mut self) -> Vec<Effect> {
        match self.history.forward().map(str::to_string) {
            Some(fragment) => self.on_history_pop(&fragment),
            None => Vec::new(),
        }
    }

    /// Open the folder one breadcrumb level up
    pub fn navigate_up(&mut self) -> Result<Vec<Effect>, NavigationError> {
        let parent = parent_path(&self.album.location).to_string();
        if router::same_folder(&parent, &self.path) {
            return Ok(Vec::new());
        }
        self.navigate_to_folder(&parent)
    }

    /// Refetch the current folder in place (manual retry)
    pub fn refresh(&mut self) -> Vec<Effect> {
        let image = self.current_image().map(|image| image.name.clone());
        self.load_state = LoadState::Loading;
        vec![self.start_fetch(self.path.clone(), image)]
    }

    pub fn tile_count(&self) -> usize {
        self.album.folders.len() + self.album.images.len()
    }

    pub fn tile(&self, index: usize) -> Option<Tile<'_>> {
        let folders = self.album.folders.len();
        if index < folders {
            self.album.folders.get(index).map(Tile::Folder)
        } else {
            self.album.images.get(index - folders).map(Tile::Image)
        }
    }

    pub fn selected_tile(&self) -> Option<Tile<'_>> {
        self.tile(self.cursor)
    }

    pub fn move_cursor(&mut self, movement: GridMove, columns: usize) {
        self.cursor = move_cursor(self.cursor, self.tile_count(), columns, movement);
    }

    /// Open whatever the grid cursor points at
    pub fn activate_selected(&mut self) -> Result<Vec<Effect>, NavigationError> {
        match self.selected_tile() {
            Some(Tile::Folder(folder)) => {
                let path = folder.path.clone();
                self.navigate_to_folder(&path)
            }
            Some(Tile::Image(image)) => {
                let name = image.name.clone();
                self.select_image(&name)
            }
            None => Ok(Vec::new()),
        }
    }

    /// Breadcrumb segments as (label, path), starting with "Home"
    pub fn breadcrumb(&self) -> Vec<(&str, &str)> {
        breadcrumb_targets(&self.album.location)
    }

    pub fn focus_breadcrumb(&mut self) {
        self.focus = Focus::Breadcrumb;
        self.breadcrumb_cursor = self.breadcrumb().len().saturating_sub(1);
    }

    pub fn focus_grid(&mut self) {
        self.focus = Focus::Grid;
    }

    pub fn move_breadcrumb(&mut self, forward: bool) {
        let last = self.breadcrumb().len().saturating_sub(1);
        self.breadcrumb_cursor = if forward {
            (self.breadcrumb_cursor + 1).min(last)
        } else {
            self.breadcrumb_cursor.saturating_sub(1)
        };
    }

    /// Navigate to the highlighted breadcrumb segment
    pub fn activate_breadcrumb(&mut self) -> Result<Vec<Effect>, NavigationError> {
        let target = self
            .breadcrumb()
            .get(self.breadcrumb_cursor)
            .map(|(_, path)| path.to_string());
        self.focus = Focus::Grid;

        match target {
            Some(path) => self.navigate_to_folder(&path),
            None => Ok(Vec::new()),
        }
    }

    /// Current location fragment, as shown in the status bar
    pub fn location(&self) -> &str {
        self.history.current()
    }

    /// Title for the terminal window
    pub fn window_title(&self) -> &str {
        &self.album.name
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    fn start_fetch(&mut self, path: String, image: Option<String>) -> Effect {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.load_state = LoadState::Loading;
        self.pending = Some(PendingFetch {
            request_id,
            path: path.clone(),
            image,
        });
        Effect::Fetch { request_id, path }
    }

    /// Keep an in-flight refetch of the shown folder pointed at the image the
    /// user has selected since, so the response restores that one
    fn track_pending_selection(&mut self) {
        let selected = self.current_image().map(|image| image.name.clone());
        if let Some(pending) = self.pending.as_mut() {
            if router::same_folder(&pending.path, &self.path) {
                pending.image = selected;
            }
        }
    }

    fn preload_next(&self) -> Vec<Effect> {
        match self.next_image() {
            Some(next) => vec![Effect::SchedulePreload(next.clone())],
            None => Vec::new(),
        }
    }

    fn clear_listing(&mut self) {
        self.album.folders.clear();
        self.album.images.clear();
        self.reset_selection();
    }

    fn reset_selection(&mut self) {
        self.current_image = None;
        self.cursor = 0;
        self.focus = Focus::Grid;
        self.breadcrumb_cursor = 0;
    }
}
