//! Creation timestamps

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

/// Display format for creation timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Source of creation timestamps
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Current instant formatted as `YYYY-MM-DD HH:MM`
    fn now(&self) -> String;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        format_timestamp(&Local::now())
    }
}

/// Always returns the same timestamp
#[derive(Debug, Clone)]
pub struct FixedClock(String);

impl FixedClock {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(timestamp.into())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}

/// Format an instant as a zero-padded, 24-hour `YYYY-MM-DD HH:MM`
pub fn format_timestamp<Tz>(instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.format(TIMESTAMP_FORMAT).to_string()
}
