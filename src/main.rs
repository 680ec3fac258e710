// Clippy configuration: enable pedantic but allow overly strict lints
#![allow(clippy::missing_errors_doc)] // Internal functions don't need # Errors docs
#![allow(clippy::missing_panics_doc)] // Internal functions don't need # Panics docs
#![allow(clippy::must_use_candidate)] // Not all getters need #[must_use]
#![allow(clippy::module_name_repetitions)] // e.g., DashboardConfig in config module is fine
#![allow(clippy::doc_markdown)] // Don't require backticks around TOML, JSON, etc.
#![allow(clippy::too_many_lines)] // Some functions are naturally long
#![allow(clippy::cast_possible_truncation)] // We're careful with our casts
#![allow(clippy::cast_sign_loss)] // Percentages are never negative
#![allow(clippy::cast_precision_loss)] // Chart values are small integers
#![allow(clippy::redundant_closure_for_method_calls)] // Sometimes closures are clearer
#![allow(clippy::match_same_arms)] // Explicit arms are clearer than combined patterns

//! grs-dashboard - GRS certification reference for garment factories
//!
//! A single Rust binary that provides both:
//! - TUI mode: metric cards, charts, and selectable topics with a detail modal
//! - Report mode: plain-text/JSON access to the same topic table
//!
//! Usage:
//!   grs-dashboard              # Start TUI (default)
//!   grs-dashboard topics       # List topic keys
//!   grs-dashboard show tc      # Print one topic

mod action;
mod app;
mod cli;
mod config;
mod content;
mod dashboard;
mod errors;
mod event;
mod modal;
mod tui;
mod ui;

use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use config::DashboardConfig;
use content::ContentStore;
use ratatui::layout::Rect;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Get the log directory path
fn get_log_dir() -> PathBuf {
    directories::BaseDirs::new().map_or_else(
        || PathBuf::from("/tmp/grs-dashboard/logs"),
        |dirs| dirs.cache_dir().join("grs-dashboard").join("logs"),
    )
}

/// Load the topic table and check every list item resolves against it
fn load_content(config: &DashboardConfig) -> Result<ContentStore> {
    let content = ContentStore::load(config).wrap_err("Failed to load topic table")?;
    content
        .ensure_covers(dashboard::topic_keys())
        .wrap_err("Topic table is missing entries used by the dashboard")?;
    Ok(content)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Parse CLI arguments
    let cli = Cli::parse();

    let config = cli
        .config
        .clone()
        .map_or_else(DashboardConfig::load, DashboardConfig::load_from_path);

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            cli::print_completions(shell);
            return Ok(());
        }
        Some(Commands::Config) => {
            print!("{}", DashboardConfig::example());
            return Ok(());
        }
        Some(Commands::Topics) => {
            print!("{}", cli::format_topics(&load_content(&config)?));
            return Ok(());
        }
        Some(Commands::Show { key, json }) => {
            let content = load_content(&config)?;
            let entry = content.lookup(&key)?;
            println!("{}", cli::format_entry(entry, json)?);
            return Ok(());
        }
        Some(Commands::Export) => {
            println!("{}", cli::export_json(&load_content(&config)?)?);
            return Ok(());
        }
        None => {}
    }

    // Setup file logging with rotation
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "grs-dashboard.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let log_filter = format!("grs_dashboard={}", cli.log_level);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(non_blocking),
        )
        .init();

    tracing::info!("Starting grs-dashboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {:?}", log_dir);

    let content = load_content(&config)?;
    tracing::info!(topics = content.len(), "Topic table ready");

    let mut ui_config = config.ui.clone();
    if cli.no_mouse {
        ui_config.mouse = false;
    }

    run_tui(App::new(content, ui_config), cli.frame_rate).await
}

/// Render cap bounds; anything outside (including NaN and infinity) is pulled into range
const MIN_FRAME_RATE: f64 = 1.0;
const MAX_FRAME_RATE: f64 = 240.0;

/// Time between frames for a requested FPS cap
fn frame_interval(frame_rate: f64) -> std::time::Duration {
    let frame_rate = if frame_rate.is_nan() {
        MIN_FRAME_RATE
    } else {
        frame_rate.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE)
    };
    std::time::Duration::from_secs_f64(1.0 / frame_rate)
}

async fn run_tui(mut app: App, frame_rate: f64) -> Result<()> {
    use std::time::Instant;
    use tokio_util::sync::CancellationToken;

    let frame_duration = frame_interval(frame_rate);

    tracing::info!("TUI starting: {:.1} FPS cap, mouse = {}", frame_rate, app.ui.mouse);

    // Initialize terminal (raw mode, alternate screen, optional mouse capture)
    let mut terminal = tui::init(app.ui.mouse)?;

    // RAII guard ensures terminal is restored on panic or early return
    let _guard = tui::TerminalGuard;

    let size = terminal.size()?;
    app.viewport = Rect::new(0, 0, size.width, size.height);

    // Create event channel and cancellation token for graceful shutdown
    let (event_tx, mut event_rx) = mpsc::channel(100);
    let cancel = CancellationToken::new();

    // Spawn input event handler with cancellation support
    let input_cancel = cancel.clone();
    let input_handle = tokio::spawn(async move {
        event::input::listen(event_tx, input_cancel).await;
    });

    // First frame immediately, then rate limited
    terminal.draw(|f| ui::render(f, &app))?;
    app.rendered();
    let mut last_frame = Instant::now();

    loop {
        // Frame rate limiting with dirty flag check
        let now = Instant::now();
        if app.needs_render && now.duration_since(last_frame) >= frame_duration {
            terminal.draw(|f| ui::render(f, &app))?;
            app.rendered();
            last_frame = now;
        }

        // Wake at least once per frame so a pending render is flushed
        tokio::select! {
            Some(event) = event_rx.recv() => {
                app.handle_event(event);
            }
            () = tokio::time::sleep(frame_duration) => {}
        }

        if app.should_quit {
            break;
        }
    }

    // Graceful shutdown: signal input listener to stop
    tracing::debug!("Shutting down input listener");
    cancel.cancel();
    input_handle.abort();

    // Restore terminal (guard will also restore on drop, but explicit is cleaner)
    tui::restore()?;
    terminal.show_cursor()?;

    Ok(())
}
