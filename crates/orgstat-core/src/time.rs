// SPDX-License-Identifier: Apache-2.0

//! "Time ago" formatting for repository update timestamps.
//!
//! GitHub exposes update instants as `YYYY-MM-DDTHH:MM:SSZ` on
//! `<relative-time>` elements. This module turns them into the coarse
//! durations shown in the report (`"3 days"`, `"2 hours 5 minutes"`, ...).
//!
//! The current moment comes from a [`Clock`] so tests can pin it.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use regex::Regex;

use crate::error::OrgstatError;

static TIMESTAMP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})T([0-9]{2}):([0-9]{2}):([0-9]{2})Z")
        .expect("valid timestamp regex")
});

const SECONDS_PER_DAY: i64 = 86_400;

/// Source of the current wall-clock moment.
pub trait Clock: Send + Sync {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Parses a `YYYY-MM-DDTHH:MM:SSZ` timestamp.
///
/// Characters after the trailing `Z` are ignored. Fields must be fixed-width
/// digits and must form a real calendar instant from year 1 onwards.
///
/// # Examples
///
/// ```
/// use orgstat_core::time::parse_timestamp;
///
/// assert!(parse_timestamp("2021-01-11T12:24:25Z").is_ok());
/// assert!(parse_timestamp("2021-01-11T12:24:25").is_err());
/// ```
pub fn parse_timestamp(input: &str) -> crate::Result<DateTime<Utc>> {
    let caps = TIMESTAMP_PATTERN
        .captures(input)
        .ok_or_else(|| OrgstatError::parse("timestamp", input))?;

    let field = |i: usize| -> crate::Result<u32> {
        caps[i]
            .parse::<u32>()
            .map_err(|_| OrgstatError::parse("timestamp", input))
    };

    let year = i32::try_from(field(1)?)
        .ok()
        .filter(|year| *year >= 1)
        .ok_or_else(|| OrgstatError::parse("timestamp", input))?;
    NaiveDate::from_ymd_opt(year, field(2)?, field(3)?)
        .and_then(|date| date.and_hms_opt(field(4).ok()?, field(5).ok()?, field(6).ok()?))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| OrgstatError::parse("timestamp", input))
}

/// Formats an elapsed duration.
///
/// Whole days win over everything else; below a day, hours and minutes;
/// below an hour, minutes and seconds. Negative durations count as zero.
#[must_use]
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let total = elapsed.num_seconds().max(0);
    let days = total / SECONDS_PER_DAY;
    let hours = (total % SECONDS_PER_DAY) / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if days > 0 {
        format!("{days} days")
    } else if hours > 0 {
        format!("{hours} hours {minutes} minutes")
    } else {
        format!("{minutes} minutes {seconds} seconds")
    }
}

/// Formats timestamps relative to a [`Clock`].
#[derive(Debug, Clone, Default)]
pub struct TimeFormatter<C = SystemClock> {
    clock: C,
}

impl<C: Clock> TimeFormatter<C> {
    /// Creates a formatter reading "now" from `clock`.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Duration from `instant` to now.
    #[must_use]
    pub fn since(&self, instant: DateTime<Utc>) -> String {
        format_elapsed(self.clock.now().signed_duration_since(instant))
    }

    /// Parses `timestamp` and formats the time elapsed since then.
    pub fn time_ago(&self, timestamp: &str) -> crate::Result<String> {
        parse_timestamp(timestamp).map(|instant| self.since(instant))
    }
}
