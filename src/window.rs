// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Reference time and calendar windows.
//!
//! Every calendar question ("is this today?", "is this in the current
//! month?") is answered relative to an explicit [`Reference`] instead of the
//! ambient system clock and timezone.

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Offset, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub now: DateTime<Utc>,
    pub offset: FixedOffset,
}

impl Reference {
    pub fn new(now: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { now, offset }
    }

    pub fn utc(now: DateTime<Utc>) -> Self {
        Self::new(now, Utc.fix())
    }

    /// Calendar date of `ts` in the reference timezone.
    pub fn local_date(&self, ts: &DateTime<Utc>) -> NaiveDate {
        ts.with_timezone(&self.offset).date_naive()
    }

    pub fn today(&self) -> NaiveDate {
        self.local_date(&self.now)
    }

    pub fn yesterday(&self) -> NaiveDate {
        self.today() - Duration::days(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Self::System => Utc::now(),
            Self::Fixed(at) => *at,
        }
    }

    pub fn reference(&self, offset: FixedOffset) -> Reference {
        Reference::new(self.now(), offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Today,
    ThisWeek,
    ThisMonth,
    All,
}

impl Window {
    pub fn contains(self, ts: &DateTime<Utc>, reference: &Reference) -> bool {
        match self {
            Self::Today => reference.local_date(ts) == reference.today(),
            Self::ThisWeek => {
                reference.local_date(ts).iso_week() == reference.today().iso_week()
            }
            Self::ThisMonth => {
                let d = reference.local_date(ts);
                let today = reference.today();
                d.year() == today.year() && d.month() == today.month()
            }
            Self::All => true,
        }
    }
}

pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("Invalid timestamp '{}', expected RFC 3339", s))
}

/// Parses offsets written as `+05:00`, `-03:30` or `Z`.
pub fn parse_offset(s: &str) -> Result<FixedOffset> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }
    let (sign, rest) = match s.chars().next() {
        Some('+') => (1, &s[1..]),
        Some('-') => (-1, &s[1..]),
        _ => return Err(anyhow::anyhow!("Invalid UTC offset '{}', expected +HH:MM", s)),
    };
    let invalid = || anyhow::anyhow!("Invalid UTC offset '{}', expected +HH:MM", s);
    let (h, m) = rest.split_once(':').ok_or_else(invalid)?;
    let h = offset_part(h, 23).ok_or_else(invalid)?;
    let m = offset_part(m, 59).ok_or_else(invalid)?;
    FixedOffset::east_opt(sign * (h * 3600 + m * 60))
        .with_context(|| format!("UTC offset '{}' out of range", s))
}

/// One or two ASCII digits, at most `max`.
fn offset_part(part: &str, max: i32) -> Option<i32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok().filter(|v| *v <= max)
}
