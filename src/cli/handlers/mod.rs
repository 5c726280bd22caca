//! Command handlers for the ticket-desk front-end
//!
//! Each handler drives the store through [`TicketRepository`] and renders
//! the updated snapshot through the [`OutputFormatter`].
//!
//! [`TicketRepository`]: crate::storage::TicketRepository
//! [`OutputFormatter`]: crate::cli::output::OutputFormatter

pub mod actions;
mod list;
pub mod script;
pub mod session;

pub use actions::{Action, Outcome, TicketRef, execute};
pub use list::handle_list_command;
pub use script::{handle_script_command, parse_line, run_script};
pub use session::handle_session_command;
