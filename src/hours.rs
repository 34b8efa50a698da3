//! Opening-hours evaluation.
//!
//! Store hours arrive as a map of lowercase three-letter day codes to an
//! `[open, close]` pair of `HH:MM` strings:
//!
//! ```json
//! { "mon": ["09:00", "17:00"], "fri": ["22:00", "02:00"] }
//! ```
//!
//! A store is open when the time of day falls inside `[open, close]`, both
//! ends inclusive, at minute granularity. When `close < open` the window
//! wraps past midnight: the store is open from `open` to the end of the day
//! and from the start of the day until `close`. A day with no entry is closed.
//!
//! Times are read the way the browser reads them: split on `:`, the first
//! two fields are hours and minutes, later fields are ignored, and values
//! are not range-checked (`"24:00"` is minute 1440, `"09:00:00"` is 540).
//!
//! The live "Open Now" badge on city pages is computed in the browser by
//! `assets/js/hours.js` using the same rule. This module is the Rust side of
//! that contract, used by `check` to flag schedules the browser would ignore.

use chrono::{NaiveTime, Timelike, Weekday};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum HoursError {
    #[error("hours must be an object keyed by day code")]
    NotAnObject,
    #[error("unknown day code '{0}'")]
    UnknownDay(String),
    #[error("'{day}' must be an [open, close] pair")]
    NotAPair { day: String },
    #[error("'{day}' has invalid time '{value}' (expected HH:MM)")]
    BadTime { day: String, value: String },
}

/// A single day's `[open, close]` window in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub open: u32,
    pub close: u32,
}

impl Window {
    pub fn is_overnight(&self) -> bool {
        self.close < self.open
    }

    pub fn contains(&self, minute: u32) -> bool {
        if self.is_overnight() {
            minute >= self.open || minute <= self.close
        } else {
            minute >= self.open && minute <= self.close
        }
    }
}

/// A parsed weekly schedule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpeningHours {
    days: BTreeMap<u8, Window>,
}

impl OpeningHours {
    /// Parse the raw JSON schedule. Any malformed entry fails the whole
    /// schedule, mirroring the browser script which skips the card.
    pub fn parse(value: &serde_json::Value) -> Result<Self, HoursError> {
        let map = value.as_object().ok_or(HoursError::NotAnObject)?;
        let mut days = BTreeMap::new();
        for (day, entry) in map {
            let weekday =
                day_from_code(day).ok_or_else(|| HoursError::UnknownDay(day.clone()))?;
            let pair = entry
                .as_array()
                .filter(|a| a.len() == 2)
                .ok_or_else(|| HoursError::NotAPair { day: day.clone() })?;
            let open = parse_minutes(day, &pair[0])?;
            let close = parse_minutes(day, &pair[1])?;
            days.insert(weekday.num_days_from_sunday() as u8, Window { open, close });
        }
        Ok(Self { days })
    }

    pub fn window(&self, weekday: Weekday) -> Option<Window> {
        self.days.get(&(weekday.num_days_from_sunday() as u8)).copied()
    }

    /// Whether the store is open at `time` on `weekday`.
    ///
    /// Only the current day's window is consulted; the early-morning tail of
    /// an overnight window belongs to the day it started on.
    pub fn is_open_at(&self, weekday: Weekday, time: NaiveTime) -> bool {
        let minute = time.hour() * 60 + time.minute();
        self.window(weekday).is_some_and(|w| w.contains(minute))
    }
}

/// Map a `sun`..`sat` day code to a weekday.
pub fn day_from_code(code: &str) -> Option<Weekday> {
    match code {
        "sun" => Some(Weekday::Sun),
        "mon" => Some(Weekday::Mon),
        "tue" => Some(Weekday::Tue),
        "wed" => Some(Weekday::Wed),
        "thu" => Some(Weekday::Thu),
        "fri" => Some(Weekday::Fri),
        "sat" => Some(Weekday::Sat),
        _ => None,
    }
}

fn parse_minutes(day: &str, value: &serde_json::Value) -> Result<u32, HoursError> {
    let bad = || HoursError::BadTime {
        day: day.to_string(),
        value: value.to_string().trim_matches('"').to_string(),
    };
    let text = value.as_str().ok_or_else(bad)?;
    let mut fields = text.split(':');
    let hour = fields.next().and_then(time_field).ok_or_else(bad)?;
    let minute = fields.next().and_then(time_field).ok_or_else(bad)?;
    hour.checked_mul(60)
        .and_then(|h| h.checked_add(minute))
        .ok_or_else(bad)
}

/// One `:`-separated field. Blank counts as zero.
fn time_field(field: &str) -> Option<u32> {
    let field = field.trim();
    if field.is_empty() {
        Some(0)
    } else {
        field.parse().ok()
    }
}
