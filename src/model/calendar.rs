//! Calendar days as seen by the user.
//!
//! Timestamps arrive in UTC, but "today" and "past" are judged on the
//! user's own calendar, so every day computation goes through a [`DayZone`].

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, Utc};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Offset used to turn an instant into a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum DayZone {
    /// The system's local time zone, including daylight saving changes.
    #[default]
    Local,
    /// A fixed offset from UTC.
    Fixed(FixedOffset),
}

impl DayZone {
    /// Zero offset.
    pub fn utc() -> Self {
        DayZone::Fixed(Utc.fix())
    }

    /// `at` on this zone's wall clock.
    pub fn localize(self, at: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            DayZone::Local => at.with_timezone(&Local).fixed_offset(),
            DayZone::Fixed(offset) => at.with_timezone(&offset),
        }
    }

    /// Calendar day containing `at`.
    pub fn day_of(self, at: DateTime<Utc>) -> NaiveDate {
        self.localize(at).date_naive()
    }

    /// The current calendar day.
    pub fn today(self) -> NaiveDate {
        self.day_of(Utc::now())
    }
}

impl fmt::Display for DayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayZone::Local => f.write_str("local"),
            DayZone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

/// Zone name that is neither `local`, `utc` nor a `+HH:MM` offset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown day zone '{0}' (expected local, utc or an offset like +10:00)")]
pub struct UnknownDayZone(pub String);

impl FromStr for DayZone {
    type Err = UnknownDayZone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "local" => return Ok(DayZone::Local),
            "utc" | "z" => return Ok(DayZone::utc()),
            _ => {}
        }
        parse_offset(trimmed)
            .map(DayZone::Fixed)
            .ok_or_else(|| UnknownDayZone(s.to_string()))
    }
}

impl TryFrom<String> for DayZone {
    type Error = UnknownDayZone;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// `+HH:MM`, `-HH:MM` or `+HH`.
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let (hours, minutes) = rest.split_once(':').unwrap_or((rest, "0"));
    if hours.is_empty() || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || !(0..60).contains(&minutes) {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
