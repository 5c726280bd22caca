//! User actions and their execution against the store
//!
//! Both the interactive session and script mode turn user input into an
//! [`Action`] and run it through [`execute`], so the two front-ends share
//! one set of rules: named actions and edits go through the policy guards,
//! `status` is the raw store write.

use crate::core::{LifecycleAction, Status, TicketId};
use crate::error::{Result, TicketDeskError};
use crate::storage::{TicketRepository, guards};
use std::fmt;
use std::str::FromStr;

/// How the user points at a ticket
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketRef {
    /// 1-based position in the current list, newest first
    Position(usize),
    Id(TicketId),
}

impl TicketRef {
    /// Resolve against the current snapshot
    ///
    /// Positions must be in range; ids are passed through untouched so
    /// stale ids reach the store and become no-ops there.
    pub fn resolve<R>(&self, store: &R) -> Result<TicketId>
    where
        R: TicketRepository + ?Sized,
    {
        match self {
            Self::Position(position) => position
                .checked_sub(1)
                .and_then(|index| store.list().get(index))
                .map(|ticket| ticket.id.clone())
                .ok_or_else(|| TicketDeskError::TicketNotFound {
                    id: format!("#{position}"),
                }),
            Self::Id(id) => Ok(id.clone()),
        }
    }
}

impl FromStr for TicketRef {
    type Err = TicketDeskError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().trim_start_matches('#');
        if s.is_empty() {
            return Err(TicketDeskError::InvalidInput(
                "Missing ticket reference".to_string(),
            ));
        }
        Ok(s.parse::<usize>()
            .map_or_else(|_| Self::Id(TicketId::new(s)), Self::Position))
    }
}

impl fmt::Display for TicketRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(position) => write!(f, "#{position}"),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

/// A single user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Create {
        title: String,
        description: String,
    },
    Edit {
        target: TicketRef,
        title: Option<String>,
        description: Option<String>,
    },
    Lifecycle {
        target: TicketRef,
        action: LifecycleAction,
    },
    SetStatus {
        target: TicketRef,
        status: Status,
    },
    Rate {
        target: TicketRef,
        value: i64,
    },
    Remove {
        target: TicketRef,
    },
    List,
}

/// What an action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(TicketId),
    Changed(String),
    /// Accepted, but nothing in the store changed
    Unchanged(String),
    Listed,
}

impl Outcome {
    pub fn message(&self) -> String {
        match self {
            Self::Created(id) => format!("Created ticket {}", id.short()),
            Self::Changed(message) | Self::Unchanged(message) => message.clone(),
            Self::Listed => String::new(),
        }
    }
}

/// Run one action against the store
pub fn execute<R>(store: &mut R, action: &Action) -> Result<Outcome>
where
    R: TicketRepository + ?Sized,
{
    match action {
        Action::Create { title, description } => store
            .create(title, description)
            .map(Outcome::Created)
            .ok_or_else(|| {
                TicketDeskError::InvalidInput("Title and description are required".to_string())
            }),
        Action::Edit {
            target,
            title,
            description,
        } => {
            let id = target.resolve(&*store)?;
            guards::edit(store, &id, title.as_deref(), description.as_deref())?;
            Ok(Outcome::Changed(format!("Updated ticket {}", id.short())))
        },
        Action::Lifecycle { target, action } => {
            let id = target.resolve(&*store)?;
            let status = guards::apply_action(store, &id, *action)?;
            Ok(Outcome::Changed(format!(
                "Ticket {} is now {status}",
                id.short()
            )))
        },
        Action::SetStatus { target, status } => {
            let id = target.resolve(&*store)?;
            Ok(if store.set_status(&id, *status) {
                Outcome::Changed(format!("Ticket {} is now {status}", id.short()))
            } else {
                Outcome::Unchanged(format!("No ticket {id}; nothing changed"))
            })
        },
        Action::Rate { target, value } => {
            let id = target.resolve(&*store)?;
            guards::rate(store, &id, *value)?;
            Ok(Outcome::Changed(format!(
                "Rated ticket {} with {value}/5",
                id.short()
            )))
        },
        Action::Remove { target } => {
            let id = target.resolve(&*store)?;
            Ok(if store.remove(&id) {
                Outcome::Changed(format!("Deleted ticket {}", id.short()))
            } else {
                Outcome::Unchanged(format!("No ticket {id}; nothing changed"))
            })
        },
        Action::List => Ok(Outcome::Listed),
    }
}
