//! Ticket entity model and the policies governing its mutation

mod builders;
pub mod clock;
pub mod id;
pub mod lifecycle;
pub mod rating;
mod ticket;

pub use builders::TicketBuilder;
pub use clock::{Clock, FixedClock, SystemClock, format_timestamp};
pub use id::{IdGenerator, TimeRandomIdGenerator};
pub use lifecycle::{LifecycleAction, available_actions, can_edit_content, is_forward_step};
pub use rating::{Rating, RatingPolicy};
pub use ticket::{Status, Ticket, TicketId, TicketPatch};
