mod app;
mod config;
mod logging;
mod maplink;
mod registry;
mod snapshot;
mod stations;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::snapshot::{watcher, Snapshot};
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // A valid configuration is required before anything renders
    let cfg = match config::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {e:#}");
            eprintln!();
            eprintln!("Example configuration:\n{}", config::EXAMPLE_CONFIG);
            std::process::exit(1);
        }
    };

    logging::init(&cfg.logging);

    // Register the card type with the host-facing registry; a second
    // registration in the same process is a no-op.
    if !registry::register(
        registry::CARD_TYPE,
        registry::CardInfo {
            name: "Fuel Stations List",
            description: "List of nearby fuel stations with sorting and map links",
        },
    ) {
        info!("card type {} already registered", registry::CARD_TYPE);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, cfg).await;

    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::CardConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(cfg.clone());

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task (1s, drives the "updated Ns ago" readout)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial snapshot, then watch the file for changes
    match Snapshot::load(&cfg.snapshot_path) {
        Ok(snapshot) => state.apply_snapshot(&snapshot),
        Err(e) => {
            info!(error = %format!("{e:#}"), "no snapshot at startup");
            state.set_status(format!("{e:#}"));
        }
    }
    watcher::spawn(
        cfg.snapshot_path.clone(),
        Duration::from_secs(cfg.poll_interval_secs.max(1)),
        event_tx.clone(),
    );

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;
    state.dirty = false;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::OpenMap { url } => match maplink::open(&url) {
                    Ok(()) => info!(%url, "opened map link"),
                    Err(e) => {
                        error!(error = %format!("{e:#}"), "map link failed");
                        state.set_status(format!("{e:#}"));
                    }
                },
                Action::Reload => match Snapshot::load(&state.config.snapshot_path) {
                    Ok(snapshot) => {
                        let _ = event_tx.send(AppEvent::SnapshotLoaded { snapshot });
                    }
                    Err(e) => state.set_status(format!("{e:#}")),
                },
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
