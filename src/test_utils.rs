//! Test utilities for ticket-desk
//!
//! This module provides common test fixtures and utilities to reduce
//! duplication in test code across the codebase.

#![cfg(test)]

use crate::core::{FixedClock, IdGenerator, Rating, Status, TicketId};
use crate::storage::{TicketRepository, TicketStore};
use std::cell::Cell;

/// Fixed timestamp used by fixture stores
pub const FIXTURE_TIMESTAMP: &str = "2024-05-01 09:30";

/// Deterministic ids: `t1`, `t2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: Cell<u32>,
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> TicketId {
        let next = self.counter.get() + 1;
        self.counter.set(next);
        TicketId::new(format!("t{next}"))
    }
}

pub type TestStore = TicketStore<SequentialIds, FixedClock>;

/// Empty store with sequential ids and a fixed clock
pub fn sequential_store() -> TestStore {
    TicketStore::with_sources(SequentialIds::default(), FixedClock::new(FIXTURE_TIMESTAMP))
}

/// Store holding one ticket already moved to `status`
pub fn store_with_ticket_in(status: Status) -> (TestStore, TicketId) {
    let mut store = sequential_store();
    let id = store
        .create("Fixture", "Fixture description")
        .expect("Fixture ticket should be created");
    store.set_status(&id, status);
    (store, id)
}

/// Store with three tickets, one per status (newest: completed)
pub fn store_with_sample_tickets() -> TestStore {
    let mut store = sequential_store();
    let tickets = [
        ("Login bug", "Button unresponsive", Status::Created),
        ("Printer jam", "Tray 2 is stuck", Status::UnderAssistance),
        ("VPN drops", "Disconnects every hour", Status::Completed),
    ];

    for (title, description, status) in tickets {
        let id = store
            .create(title, description)
            .expect("Sample ticket should be created");
        store.set_status(&id, status);
    }

    store
}

pub fn rating(value: u8) -> Rating {
    Rating::new(value).expect("Fixture rating must be in range")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIds::default();
        assert_eq!(ids.next_id().as_str(), "t1");
        assert_eq!(ids.next_id().as_str(), "t2");
    }

    #[test]
    fn test_sample_tickets() {
        let store = store_with_sample_tickets();
        let statuses: Vec<_> = store.list().iter().map(|t| t.status).collect();
        assert_eq!(
            statuses,
            vec![Status::Completed, Status::UnderAssistance, Status::Created]
        );
        assert!(store.list().iter().all(|t| t.created_at == FIXTURE_TIMESTAMP));
    }
}
