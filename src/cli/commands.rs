use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ticket-desk - Track support tickets from creation to rating
#[derive(Parser, Debug)]
#[command(name = "ticket-desk", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long, global = true, env = "TICKET_DESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start an interactive session (default)
    Session,

    /// Run line commands from a file or stdin
    ///
    /// One command per line: `create <title> | <description>`,
    /// `edit <ref> | <title> | <description>`, `start <ref>`,
    /// `complete <ref>`, `status <ref> <status>`, `rate <ref> <1-5>`,
    /// `remove <ref>`, `list`. `<ref>` is a list position (1 = newest)
    /// or a ticket id.
    Script {
        /// Script file; reads stdin when omitted or `-`
        file: Option<PathBuf>,

        /// Stop at the first rejected command
        #[arg(long)]
        strict: bool,
    },

    /// Print the initial ticket list
    List,
}
