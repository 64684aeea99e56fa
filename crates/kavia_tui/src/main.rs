//! Kavia TicTacToe terminal front end.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::Cli;
use config::TuiConfig;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli)?;

    let mut config = TuiConfig::load(&cli.config).context("Failed to load settings")?;
    if cli.no_hints {
        config = config.without_hints();
    }

    info!("Starting Kavia TicTacToe");

    let res = {
        let _guard = TerminalGuard;
        let mut terminal = ratatui::try_init().context("Failed to set up terminal")?;
        run_app(&mut terminal, App::new(), &config)
    };

    info!("Exiting");
    res
}

/// Puts the terminal back into cooked mode on the main screen when dropped.
///
/// Created before the terminal is touched, so every exit path restores it,
/// including a setup that fails partway and an unwinding panic.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

fn init_tracing(cli: &Cli) -> Result<()> {
    let file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("Failed to open log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Draw, wait for a key, dispatch it; until the user quits.
#[instrument(skip_all)]
fn run_app(
    terminal: &mut DefaultTerminal,
    mut app: App,
    config: &TuiConfig,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app, config))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
