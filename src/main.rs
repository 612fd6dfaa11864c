//! agentmap - Main entry point
//!
//! Launches the roadmap presentation TUI, or runs one of the headless
//! subcommands (`show`, `matrix`, `export`) for scripted use.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use agentmap::app::App;
use agentmap::cli::{Cli, Commands};
use agentmap::config_file::SessionConfig;
use agentmap::content::Catalog;
use agentmap::error::AgentmapError;
use agentmap::export::export;
use agentmap::matrix::render_matrix;
use agentmap::render::render;
use agentmap::types::{Audience, Language, Version};

/// Initialize tracing with appropriate settings.
///
/// Reads `RUST_LOG`, defaults to `warn`. Output goes to stderr so it never
/// mixes with rendered documents on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("agentmap starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    let catalog = Catalog::new();

    match cli.command {
        Some(Commands::Show {
            version,
            audience,
            lang,
            config,
        }) => {
            let (version, audience, language) = match config {
                Some(path) => selection_from_config(&path)?,
                None => parse_selection(&version, &audience, &lang)?,
            };
            let document = render(&catalog, version, audience, language)?;
            println!("{document}");
        }
        Some(Commands::Matrix { lang }) => {
            let language = Language::parse_token(&lang)?;
            let table = render_matrix(&catalog, language)?;
            println!("{table}");
        }
        Some(Commands::Export {
            version,
            audience,
            lang,
            out,
        }) => {
            let (version, audience, language) = parse_selection(&version, &audience, &lang)?;
            let document = render(&catalog, version, audience, language)?;
            let path = export(&document, &out)?;
            info!(path = %path.display(), "export complete");
            println!("✓ Exported roadmap to {}", path.display());
        }
        None => {
            info!("No command specified, launching TUI");
            run_tui(catalog)?;
        }
    }

    Ok(())
}

/// Parse the three canonical selection tokens
fn parse_selection(
    version: &str,
    audience: &str,
    lang: &str,
) -> Result<(Version, Audience, Language), AgentmapError> {
    Ok((
        Version::parse_token(version)?,
        Audience::parse_token(audience)?,
        Language::parse_token(lang)?,
    ))
}

/// Load and validate a saved session, returning its selection triple
fn selection_from_config(
    path: &Path,
) -> Result<(Version, Audience, Language), Box<dyn std::error::Error>> {
    info!("Loading session from: {:?}", path);
    let session = SessionConfig::load_from_file(path)?;
    session.validate()?;
    Ok((session.version, session.audience, session.language))
}

/// Run the TUI presentation shell
fn run_tui(catalog: Catalog) -> Result<(), Box<dyn std::error::Error>> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| AgentmapError::terminal(format!("Failed to enable raw mode: {e}")))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| AgentmapError::terminal(format!("Failed to enter alternate screen: {e}")))?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AgentmapError::terminal(format!("Failed to create terminal: {e}")))?;

    let mut app = App::new(catalog, SessionConfig::default());
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if the app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    if let Err(ref e) = result {
        error!("TUI exited with error: {e}");
    }

    result
}
