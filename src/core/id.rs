//! Ticket identifier generation
//!
//! Identifiers combine the current time in milliseconds with a random
//! suffix, so ids produced within the same millisecond still differ.
//! Uniqueness is only meaningful within one process.

use super::TicketId;
use chrono::Utc;
use uuid::Uuid;

const SUFFIX_LEN: usize = 9;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Source of fresh ticket identifiers
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator {
    fn next_id(&self) -> TicketId;
}

/// Millisecond timestamp plus random base-36 suffix
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeRandomIdGenerator;

impl IdGenerator for TimeRandomIdGenerator {
    fn next_id(&self) -> TicketId {
        let millis = u128::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        let random = to_base36(Uuid::new_v4().as_u128());
        let suffix = &random[random.len().saturating_sub(SUFFIX_LEN)..];
        TicketId::new(format!(
            "{}{suffix:0>width$}",
            to_base36(millis),
            width = SUFFIX_LEN
        ))
    }
}

fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}
