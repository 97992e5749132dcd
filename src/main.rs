//! notes-setup binary entry point

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use notes_setup::{
    config::SetupConfig,
    handoff, logging, script,
    setup_tui::App,
    SetupOutcome,
};

mod cli;

use cli::Cli;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = SetupConfig::from_env()?;
    cli.apply(&mut config);

    let _log_guard = logging::init_logging(&config.log_file)?;
    info!("Starting notes-setup");

    let mut app = App::new(&config);

    let outcome = match config.script_keys.as_deref() {
        Some(raw) => script::run_script(&mut app, script::parse_script(raw)?)?,
        None => run_terminal(&mut app)?,
    };

    // Returning lets the log guard drop and flush buffered lines
    Ok(ExitCode::from(report(outcome, cli.format)?))
}

/// Print the hand-off for a confirmed form and pick the exit status
fn report(outcome: SetupOutcome, format: handoff::OutputFormat) -> Result<u8> {
    match outcome {
        SetupOutcome::Confirmed(credentials) => {
            println!("{}", handoff::render(&credentials, format)?.trim_end());
            info!("Credentials handed off as {}", format.as_str());
            Ok(0)
        }
        SetupOutcome::Cancelled => {
            eprintln!("Setup cancelled");
            Ok(1)
        }
    }
}

/// Present the setup screen on the terminal and restore it afterwards.
/// The screen is drawn on stderr so stdout only carries the hand-off.
fn run_terminal(app: &mut App) -> Result<SetupOutcome> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!("Setup screen encountered an error: {}", e);
    }
    result
}
