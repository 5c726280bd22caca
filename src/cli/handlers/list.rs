//! `list` command handler

use crate::cli::output::OutputFormatter;
use crate::error::Result;
use crate::storage::TicketRepository;

/// Print the current snapshot, newest first
pub fn handle_list_command<R>(store: &R, formatter: &OutputFormatter) -> Result<()>
where
    R: TicketRepository + ?Sized,
{
    tracing::debug!(tickets = store.len(), "Listing tickets");
    formatter.print_tickets(store.list())
}
