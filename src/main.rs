use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{Event, KeyEventKind};
use tokio::sync::{mpsc, watch};

use tick_board::config::Config;
use tick_board::event::ScreenEvent;
use tick_board::screen::TradeScreen;
use tick_board::ui::{self, ViewState};
use tick_board::ui_handlers::{handle_key, KeyOutcome};

const EVENT_QUEUE_CAPACITY: usize = 256;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {:#}", e);
            std::process::exit(1);
        }
    };

    // Log to file so output doesn't interfere with the TUI
    let log_file = std::fs::File::create("tick-board.log").context("failed to create log file")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::try_new(&config.logging.level)
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
            }),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .json()
        .init();

    tracing::info!(
        interval = %config.feed.interval,
        utc_offset_hours = config.feed.utc_offset_hours,
        seeded = config.feed.seed.is_some(),
        "Starting tick-board"
    );

    let (app_tx, mut app_rx) = mpsc::channel::<ScreenEvent>(EVENT_QUEUE_CAPACITY);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let mut screen = TradeScreen::new(config.feed.clone()).context("invalid feed config")?;
    screen
        .start_feed(app_tx.clone())
        .context("failed to start tick feed")?;
    let mut view = ViewState::new();

    // Ctrl+C handler
    let ctrl_c_shutdown = shutdown_tx.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        tracing::info!("Ctrl+C received");
        let _ = ctrl_c_shutdown.send(true);
    });

    let mut terminal = ratatui::init();
    let refresh = Duration::from_millis(config.ui.refresh_rate_ms);
    let result: Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| ui::render(frame, &screen, &view)) {
            break Err(e.into());
        }

        match crossterm::event::poll(refresh) {
            Ok(true) => match crossterm::event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if handle_key(&key.code, &mut screen, &mut view) == KeyOutcome::Quit {
                        tracing::info!("User quit");
                        break Ok(());
                    }
                }
                Ok(_) => {}
                Err(e) => break Err(e.into()),
            },
            Ok(false) => {}
            Err(e) => break Err(e.into()),
        }

        // Drain timer events queued since the last frame
        while let Ok(evt) = app_rx.try_recv() {
            screen.apply(evt);
        }
        view.clamp_selection(screen.tick_count());

        if *shutdown_rx.borrow() {
            break Ok(());
        }
    };

    ratatui::restore();
    screen.stop_feed();
    tracing::info!(ticks = screen.tick_count(), "Shutdown complete");
    result
}
