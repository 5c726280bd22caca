//! ticket-desk - A single-user support ticket tracker
//!
//! Tickets are created, moved through a small lifecycle and rated once
//! resolved:
//! - `Created → UnderAssistance → Completed`
//! - Title and description are editable only while a ticket is `Created`
//! - A completed ticket can be rated once, from 1 to 5
//!
//! The [`storage::TicketStore`] owns every ticket and never fails: invalid
//! input and stale ids are silent no-ops. The policies above live in
//! [`core`] and are enforced by the wrappers in [`storage::guards`], which
//! the terminal front-end in [`cli`] uses.

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Example
//!
//! ```rust
//! use ticket_desk::core::Status;
//! use ticket_desk::storage::{TicketRepository, TicketStore, guards};
//!
//! let mut store = TicketStore::new();
//! let id = store.create("Login bug", "Button unresponsive").unwrap();
//!
//! guards::transition(&mut store, &id, Status::UnderAssistance).unwrap();
//! guards::transition(&mut store, &id, Status::Completed).unwrap();
//! guards::rate(&mut store, &id, 5).unwrap();
//!
//! assert_eq!(store.list()[0].rating.map(|r| r.value()), Some(5));
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{Result, TicketDeskError};
