//! Ticket storage
//!
//! The in-memory [`TicketStore`] owns every ticket; the presentation layer
//! drives it through the [`TicketRepository`] trait and the policy
//! [`guards`].

pub mod guards;
mod memory;
mod repository;

pub use memory::TicketStore;
pub use repository::TicketRepository;
