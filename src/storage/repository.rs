use crate::core::{Rating, Status, Ticket, TicketId, TicketPatch};

/// Repository trait for ticket mutation and snapshot operations
///
/// This is the surface the presentation layer talks to. None of the
/// operations fail: invalid input on `create` yields `None`, and every
/// operation addressing an unknown id is a silent no-op. The boolean
/// results only tell the caller whether anything changed.
pub trait TicketRepository {
    /// Creates a ticket and places it at the head of the list
    ///
    /// Returns `None` without creating anything when the trimmed title or
    /// description is empty.
    fn create(&mut self, title: &str, description: &str) -> Option<TicketId>;

    /// Overwrites the fields present in `patch`
    ///
    /// Text fields are trimmed and skipped when blank, so a ticket never
    /// ends up with an empty title or description. No content-edit gating
    /// and no lifecycle ordering is enforced here.
    fn update(&mut self, id: &TicketId, patch: TicketPatch) -> bool;

    /// Removes a ticket, keeping the order of the rest
    fn remove(&mut self, id: &TicketId) -> bool;

    /// Overwrites the status without checking the transition
    fn set_status(&mut self, id: &TicketId, status: Status) -> bool;

    /// Overwrites the rating, whether or not one is already set
    fn set_rating(&mut self, id: &TicketId, rating: Rating) -> bool;

    /// All tickets, newest first
    fn list(&self) -> &[Ticket];

    /// Looks up a ticket by ID
    fn get(&self, id: &TicketId) -> Option<&Ticket> {
        self.list().iter().find(|ticket| &ticket.id == id)
    }

    /// Checks if a ticket exists by ID
    fn exists(&self, id: &TicketId) -> bool {
        self.get(id).is_some()
    }

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}
