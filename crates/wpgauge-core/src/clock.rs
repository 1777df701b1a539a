//! Wall clock and the "was this today?" comparator.
//!
//! Timestamps are RFC3339 strings written in the configured timezone's
//! offset. "Today" is decided by day-of-month alone: month and year are
//! ignored, so a stamp from the same day of last month still counts as today.

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use chrono_tz::Tz;

/// Source of "now". Injected so tests can pin the date.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Day-of-month of the zero time value, used when a stamp fails to parse.
const ZERO_TIME_DAY: u32 = 1;

/// Render `now` in `tz` as RFC3339 with second precision (`Z` for UTC).
pub fn format_stamp(now: DateTime<Utc>, tz: Tz) -> String {
    now.with_timezone(&tz)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Day-of-month of a stored stamp, in the offset it was written with.
/// Unparseable stamps are logged and read as the zero time.
pub fn stamp_day(stamp: &str) -> u32 {
    match DateTime::parse_from_rfc3339(stamp) {
        Ok(t) => t.day(),
        Err(e) => {
            tracing::warn!(stamp = %stamp, error = %e, "unparseable gauge timestamp");
            ZERO_TIME_DAY
        }
    }
}

pub fn is_same_calendar_day_of_month(a: u32, b: u32) -> bool {
    a == b
}

/// True when `stamp` falls on the same day-of-month as `now` in `tz`.
pub fn is_today(stamp: &str, tz: Tz, now: DateTime<Utc>) -> bool {
    let today = now.with_timezone(&tz).day();
    is_same_calendar_day_of_month(stamp_day(stamp), today)
}
