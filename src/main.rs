//! ticket-desk - Support ticket tracker
//!
//! This is the main entry point for the ticket-desk CLI application.
//! It loads configuration, seeds the in-memory store and dispatches to the
//! appropriate command handler.

use clap::Parser;
use std::process;
use ticket_desk::cli::handlers::{
    handle_list_command, handle_script_command, handle_session_command,
};
use ticket_desk::cli::{Cli, Commands, OutputFormatter};
use ticket_desk::config::Config;
use ticket_desk::error::{Result, TicketDeskError};
use ticket_desk::storage::TicketStore;
use tracing_subscriber::EnvFilter;

/// Main entry point for the ticket-desk CLI
fn main() {
    let cli = Cli::parse();

    // Configuration errors are reported with flag-only formatting
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let formatter = OutputFormatter::new(cli.json, cli.no_color);
            handle_error(&e, &formatter);
            process::exit(1);
        },
    };

    let formatter = OutputFormatter::new(
        cli.json || config.ui.json,
        cli.no_color || !config.ui.color,
    );

    if let Err(e) = run(cli, &config, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the CLI application with the parsed arguments
///
/// # Errors
///
/// Returns any error that occurs during command execution
fn run(cli: Cli, config: &Config, formatter: &OutputFormatter) -> Result<()> {
    init_logging(cli.verbose, &config.log_level);
    tracing::debug!(
        seed = config.seed.len(),
        log_level = %config.log_level,
        "Configuration loaded"
    );

    let mut store = TicketStore::new();
    let seeded = store.seed(config.seed_entries());
    tracing::debug!(count = seeded.len(), "Seeded initial tickets");

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => handle_session_command(&mut store, formatter),
        Commands::Script { file, strict } => {
            handle_script_command(&mut store, file.as_deref(), strict, formatter)
        },
        Commands::List => handle_list_command(&store, formatter),
    }
}

/// Install the tracing subscriber on stderr
///
/// `--verbose` forces debug output; otherwise `RUST_LOG` wins over the
/// configured level.
fn init_logging(verbose: bool, configured: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Handle errors and display them to the user
fn handle_error(error: &TicketDeskError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        eprintln!("\nSuggestions:");
        for suggestion in &suggestions {
            eprintln!("  • {suggestion}");
        }
    }

    // In JSON mode, output error as JSON
    if formatter.is_json() {
        let _ = formatter.json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
            "is_config_error": error.is_config_error(),
        }));
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}
