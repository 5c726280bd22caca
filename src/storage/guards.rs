//! Policy-enforcing wrappers around the permissive store operations
//!
//! The store accepts any status or rating write. These helpers apply the
//! lifecycle, content-edit and rating policies first and only then call
//! through to the store. Unlike the store, they report why an action was
//! refused.

use super::TicketRepository;
use crate::core::{
    LifecycleAction, RatingPolicy, Status, Ticket, TicketId, TicketPatch, can_edit_content,
    is_forward_step,
};
use crate::error::{Result, TicketDeskError};
use tracing::warn;

/// Moves a ticket one forward step, rejecting anything else
///
/// Returns `Ok(None)` for unknown ids, keeping the store's forgiving
/// behavior for stale references.
pub fn transition<R>(store: &mut R, id: &TicketId, to: Status) -> Result<Option<Status>>
where
    R: TicketRepository + ?Sized,
{
    let Some(from) = store.get(id).map(|ticket| ticket.status) else {
        return Ok(None);
    };

    if !is_forward_step(from, to) {
        warn!(id = %id, %from, %to, "Rejected lifecycle transition");
        return Err(TicketDeskError::LifecycleViolation { from, to });
    }

    store.set_status(id, to);
    Ok(Some(to))
}

/// Runs a named forward action (`start` or `complete`)
///
/// Unlike [`transition`], an unknown id is reported as `TicketNotFound`.
pub fn apply_action<R>(store: &mut R, id: &TicketId, action: LifecycleAction) -> Result<Status>
where
    R: TicketRepository + ?Sized,
{
    let current = require(&*store, id)?.status;
    let target = action.apply(current).inspect_err(|_| {
        warn!(id = %id, %action, status = %current, "Action not available");
    })?;
    store.set_status(id, target);
    Ok(target)
}

/// Edits title and/or description while the ticket is still `Created`
///
/// An unknown id is reported as `TicketNotFound`.
pub fn edit<R>(
    store: &mut R,
    id: &TicketId,
    title: Option<&str>,
    description: Option<&str>,
) -> Result<()>
where
    R: TicketRepository + ?Sized,
{
    let status = require(&*store, id)?.status;
    if !can_edit_content(status) {
        return Err(TicketDeskError::EditNotAllowed { status });
    }

    let mut patch = TicketPatch::new();
    if let Some(title) = title {
        patch = patch.title(non_empty("Title", title)?);
    }
    if let Some(description) = description {
        patch = patch.description(non_empty("Description", description)?);
    }

    if !patch.is_empty() {
        store.update(id, patch);
    }
    Ok(())
}

/// Records a rating if the rating policy allows it
///
/// An unknown id is reported as `TicketNotFound`.
pub fn rate<R>(store: &mut R, id: &TicketId, value: i64) -> Result<()>
where
    R: TicketRepository + ?Sized,
{
    let rating = RatingPolicy::check(require(&*store, id)?, value)?;
    store.set_rating(id, rating);
    Ok(())
}

fn require<'a, R>(store: &'a R, id: &TicketId) -> Result<&'a Ticket>
where
    R: TicketRepository + ?Sized,
{
    store.get(id).ok_or_else(|| TicketDeskError::TicketNotFound {
        id: id.to_string(),
    })
}

fn non_empty(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(TicketDeskError::EmptyField { field })
    } else {
        Ok(trimmed.to_string())
    }
}
