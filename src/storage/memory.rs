//! In-memory ticket store
//!
//! `TicketStore` exclusively owns the ticket collection for the lifetime of
//! the process. Nothing is persisted.

use super::TicketRepository;
use crate::core::{
    Clock, IdGenerator, Rating, Status, SystemClock, Ticket, TicketBuilder, TicketId, TicketPatch,
    TimeRandomIdGenerator,
};
use tracing::debug;

/// Ordered ticket collection, newest first
#[derive(Debug)]
pub struct TicketStore<G = TimeRandomIdGenerator, C = SystemClock> {
    tickets: Vec<Ticket>,
    ids: G,
    clock: C,
}

impl TicketStore {
    /// Store using random time-based ids and the local clock
    pub fn new() -> Self {
        Self::with_sources(TimeRandomIdGenerator, SystemClock)
    }
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator, C: Clock> TicketStore<G, C> {
    pub const fn with_sources(ids: G, clock: C) -> Self {
        Self {
            tickets: Vec::new(),
            ids,
            clock,
        }
    }

    /// Creates the initial ticket set, in order, as ordinary `create` calls
    ///
    /// The last entry ends up at the head of the list. Entries with an empty
    /// title or description are skipped.
    pub fn seed<I, S>(&mut self, entries: I) -> Vec<TicketId>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        entries
            .into_iter()
            .filter_map(|(title, description)| self.create(title.as_ref(), description.as_ref()))
            .collect()
    }

    fn find_mut(&mut self, id: &TicketId) -> Option<&mut Ticket> {
        self.tickets.iter_mut().find(|ticket| &ticket.id == id)
    }
}

impl<G: IdGenerator, C: Clock> TicketRepository for TicketStore<G, C> {
    fn create(&mut self, title: &str, description: &str) -> Option<TicketId> {
        let title = title.trim();
        let description = description.trim();
        if title.is_empty() || description.is_empty() {
            debug!("Ignoring ticket with empty title or description");
            return None;
        }

        let ticket = TicketBuilder::new()
            .id(self.ids.next_id())
            .title(title)
            .description(description)
            .status(Status::Created)
            .created_at(self.clock.now())
            .build();
        let id = ticket.id.clone();

        self.tickets.insert(0, ticket);
        debug!(id = %id, total = self.tickets.len(), "Ticket created");
        Some(id)
    }

    fn update(&mut self, id: &TicketId, patch: TicketPatch) -> bool {
        let Some(ticket) = self.find_mut(id) else {
            debug!(id = %id, "Update for unknown ticket ignored");
            return false;
        };

        let mut applied = false;
        if let Some(title) = patch.title.as_deref().and_then(non_blank) {
            ticket.title = title;
            applied = true;
        }
        if let Some(description) = patch.description.as_deref().and_then(non_blank) {
            ticket.description = description;
            applied = true;
        }
        if let Some(status) = patch.status {
            ticket.status = status;
            applied = true;
        }

        if applied {
            debug!(id = %id, status = %ticket.status, "Ticket updated");
        } else {
            debug!(id = %id, "Update carried no usable fields");
        }
        applied
    }

    fn remove(&mut self, id: &TicketId) -> bool {
        let before = self.tickets.len();
        self.tickets.retain(|ticket| &ticket.id != id);
        let removed = self.tickets.len() != before;
        debug!(id = %id, removed, "Ticket remove");
        removed
    }

    fn set_status(&mut self, id: &TicketId, status: Status) -> bool {
        match self.find_mut(id) {
            Some(ticket) => {
                debug!(id = %id, from = %ticket.status, to = %status, "Status changed");
                ticket.status = status;
                true
            },
            None => false,
        }
    }

    fn set_rating(&mut self, id: &TicketId, rating: Rating) -> bool {
        match self.find_mut(id) {
            Some(ticket) => {
                ticket.rating = Some(rating);
                debug!(id = %id, rating = rating.value(), "Rating recorded");
                true
            },
            None => false,
        }
    }

    fn list(&self) -> &[Ticket] {
        &self.tickets
    }
}

/// Trimmed text, or `None` when nothing is left
fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
