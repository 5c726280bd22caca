//! Ticket ratings and the policy deciding when one may be attached
//!
//! The policy is advisory. `TicketStore::set_rating` overwrites whatever is
//! there; callers that want the "rate once, only when completed" behavior
//! run `RatingPolicy::check` first (see `storage::guards::rate`).

use super::{Status, Ticket};
use crate::error::{Result, TicketDeskError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Satisfaction rating in `1..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Create a rating, rejecting values outside `1..=5`
    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TicketDeskError::InvalidRating {
                value: i64::from(value),
            })
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Star rendering used by the terminal front-end, e.g. `★★★☆☆`
    pub fn stars(self) -> String {
        let filled = usize::from(self.0);
        let empty = usize::from(Self::MAX) - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

impl TryFrom<u8> for Rating {
    type Error = TicketDeskError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Rating {
    type Error = TicketDeskError;

    fn try_from(value: i64) -> Result<Self> {
        u8::try_from(value)
            .map_err(|_| TicketDeskError::InvalidRating { value })
            .and_then(Self::new)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// When a rating control is offered and what it accepts
pub struct RatingPolicy;

impl RatingPolicy {
    /// Rating is enabled only for completed, not yet rated tickets
    pub const fn can_rate(ticket: &Ticket) -> bool {
        matches!(ticket.status, Status::Completed) && ticket.rating.is_none()
    }

    /// Validate a rating attempt against the ticket's current state
    pub fn check(ticket: &Ticket, value: i64) -> Result<Rating> {
        if let Some(existing) = ticket.rating {
            return Err(TicketDeskError::AlreadyRated {
                rating: existing.value(),
            });
        }
        if ticket.status != Status::Completed {
            return Err(TicketDeskError::RatingNotAllowed {
                status: ticket.status,
            });
        }
        Rating::try_from(value)
    }
}
