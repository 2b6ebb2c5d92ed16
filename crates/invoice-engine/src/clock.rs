//! Time source abstraction for the injected `create-date` parameter

use chrono::{DateTime, Local};

/// Format for the injected `create-date` value: long en-US style with a
/// 12-hour clock and numeric offset, e.g.
/// `August 30, 2026 at 2:05:07 PM +00:00`.
pub const CREATE_DATE_FORMAT: &str = "%B %-d, %Y at %-I:%M:%S %p %:z";

/// A source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock pinned to a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Render an instant in the `create-date` wire format.
pub fn format_create_date(instant: DateTime<Local>) -> String {
    instant.format(CREATE_DATE_FORMAT).to_string()
}
