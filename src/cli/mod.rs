//! Terminal front-end
//!
//! A thin presentation layer: it turns user input into store calls and
//! re-renders the ticket list after every action.

mod commands;
pub mod handlers;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::OutputFormatter;
