//! Terminal client entry point.
use anyhow::Result;
use client_frontend_cli::{CliApp, CliConfig, QuitRequested, logging, presentation::terminal};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _log_guard = logging::setup_logging(&config.log_dir)?;
    tracing::info!("isekai client starting");

    let mut terminal = terminal::init()?;
    let _guard = terminal::TerminalGuard;

    let result = CliApp::new(&mut terminal, config).and_then(CliApp::run);
    terminal::restore()?;

    match result {
        Err(err) if err.is::<QuitRequested>() => {
            tracing::info!("player quit");
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "client failed");
            Err(err)
        }
        Ok(()) => {
            tracing::info!("isekai client exiting");
            Ok(())
        }
    }
}
