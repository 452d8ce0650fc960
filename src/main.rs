use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    collections::HashMap,
    io,
    time::{Duration, Instant},
};
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use albumtui::{
    api::{Dimensions, GalleryClient},
    cache,
    config::{self, Config},
    model,
    services::{self, ImageLoader, ImagePreviewState, ImageUpdate, PreloadScheduler},
};

/// Terminal photo album browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/albumtui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Gallery server base URL (overrides the config file)
    #[arg(short, long)]
    url: Option<String>,

    /// Location to open, e.g. "2020/trip/" or "#2020/trip/a.jpg"
    #[arg(short, long)]
    location: Option<String>,
}

mod app;
mod handlers;
mod ui;
mod utils;

/// Fallback cell size in pixels when the terminal cannot be queried
const FALLBACK_FONT_SIZE: (u16, u16) = (8, 16);

pub struct App {
    pub model: model::Model,

    api_tx: tokio::sync::mpsc::UnboundedSender<services::ApiRequest>,
    api_rx: tokio::sync::mpsc::UnboundedReceiver<services::ApiResponse>,
    images: ImageLoader,
    image_update_rx: tokio::sync::mpsc::UnboundedReceiver<ImageUpdate>,
    preload: PreloadScheduler,

    base_url: String,
    screen_override: Option<Dimensions>,
    thumbnail_scale: f64,
    font_size: (u16, u16),
    terminal_cells: (u16, u16),

    // Decoded images (StatefulProtocol is not Clone, so kept out of the Model)
    image_state_map: HashMap<String, ImagePreviewState>,
}

impl App {
    fn new(config: Config, start_location: &str) -> Result<Self> {
        let client = GalleryClient::with_timeout(config.base_url.clone(), config.request_timeout())
            .context("Failed to build HTTP client")?;
        info!(base_url = %client.base_url(), "starting album browser");

        // Spawn API service worker
        let (api_tx, api_rx) = services::spawn_api_service(client.clone());

        let image_cache = cache::shared(config.image_cache_entries);

        // Initialize image protocol picker
        let picker = if config.image_preview {
            let mut picker = match ratatui_image::picker::Picker::from_query_stdio() {
                Ok(p) => p,
                Err(e) => {
                    warn!(error = %e, "failed to detect terminal graphics, using halfblock fallback");
                    ratatui_image::picker::Picker::from_fontsize(FALLBACK_FONT_SIZE)
                }
            };

            match config.image_protocol.to_lowercase().as_str() {
                "auto" => debug!("image protocol auto-detected"),
                "iterm2" => picker.set_protocol_type(ratatui_image::picker::ProtocolType::Iterm2),
                "kitty" => picker.set_protocol_type(ratatui_image::picker::ProtocolType::Kitty),
                "sixel" => picker.set_protocol_type(ratatui_image::picker::ProtocolType::Sixel),
                "halfblocks" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Halfblocks)
                }
                unknown => warn!(protocol = unknown, "unknown image protocol, using auto-detect"),
            }
            Some(picker)
        } else {
            debug!("image rendering disabled in config");
            None
        };
        let font_size = picker
            .as_ref()
            .map(|p| p.font_size())
            .unwrap_or(FALLBACK_FONT_SIZE);

        // Create channel for image updates
        let (image_update_tx, image_update_rx) = tokio::sync::mpsc::unbounded_channel();
        let images = ImageLoader::new(client.clone(), image_cache.clone(), picker, image_update_tx);
        let preload = PreloadScheduler::new(client, image_cache, config.preload_delay());

        let mut app = App {
            model: model::Model::new(),
            api_tx,
            api_rx,
            images,
            image_update_rx,
            preload,
            base_url: config.base_url.clone(),
            screen_override: config.screen_override(),
            thumbnail_scale: config.thumbnail_scale,
            font_size,
            terminal_cells: (80, 24),
            image_state_map: HashMap::new(),
        };

        let effects = app.model.navigation.initialize(start_location);
        app.run_effects(effects);

        Ok(app)
    }
}

/// Write tracing output to the debug log file; returns the guard that flushes it
fn init_logging(debug: bool) -> Option<WorkerGuard> {
    if !debug {
        return None;
    }

    let appender =
        tracing_appender::rolling::never(utils::get_debug_log_dir(), utils::DEBUG_LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("albumtui=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    let _log_guard = init_logging(args.debug);
    if args.debug {
        info!(log = %utils::get_debug_log_path().display(), "debug mode enabled");
    }

    // Load configuration, falling back to defaults when no file exists
    let mut config = match config::find_config_path(args.config.as_deref())? {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Config::load(&path)?
        }
        None => Config::default(),
    };

    // Override config with CLI flags
    if let Some(url) = args.url {
        config.base_url = url;
    }
    let start_location = args
        .location
        .unwrap_or_else(|| config.start_location.clone());

    // Initialize app
    let mut app = App::new(config, &start_location)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Stop background timers before tearing down
    app.preload.cancel();
    app.model.ui.stop_slideshow();

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let size = terminal.size()?;
        app.set_terminal_cells(size.width, size.height);

        // Start downloads for whatever the lightbox or preview pane shows
        app.request_visible_images();

        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Keep the terminal title in sync with the album name
        let title = app.model.navigation.window_title().to_string();
        if let Some(title) = app.model.ui.title_update(&title) {
            execute!(io::stdout(), SetTitle(title))?;
        }

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            handlers::handle_api_response(app, response);
        }

        // Process image updates from background loading tasks (non-blocking)
        while let Ok((url, image_state)) = app.image_update_rx.try_recv() {
            app.store_image_state(url, image_state);
        }

        app.tick_slideshow(Instant::now());

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handlers::handle_key(app, key);
                }
            }
        }
    }

    Ok(())
}
