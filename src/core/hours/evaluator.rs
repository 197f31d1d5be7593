//! Open/closed evaluation and 12-hour display formatting.

use crate::core::hours::clock::Clock;
use crate::core::hours::parser::{parse_strict_24h, to_seconds_of_day};
use crate::errors::{AppError, AppResult};
use crate::models::time_range::TimeRange;
use chrono::{NaiveTime, TimeDelta};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenStatus {
    Open,
    Closed,
}

impl OpenStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OpenStatus::Open => "Open Now",
            OpenStatus::Closed => "Closed",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, OpenStatus::Open)
    }
}

/// Whether the clock's current instant lies in `[start, end]` today.
///
/// Both bounds are anchored to today's local midnight; a range whose end is
/// before its start never matches (no wrap past midnight). A missing or
/// unparsable bound counts as closed.
pub fn is_now_within<C: Clock + ?Sized>(range: &TimeRange, clock: &C) -> bool {
    let (Some(start), Some(end)) = (
        to_seconds_of_day(range.start()),
        to_seconds_of_day(range.end()),
    ) else {
        return false;
    };

    let now = clock.now();
    let midnight = now.date().and_time(NaiveTime::MIN);
    let start_at = midnight + TimeDelta::seconds(i64::from(start));
    let end_at = midnight + TimeDelta::seconds(i64::from(end));

    now >= start_at && now <= end_at
}

/// Badge status, or `None` when either bound is missing (nothing to show).
pub fn open_status<C: Clock + ?Sized>(range: &TimeRange, clock: &C) -> Option<OpenStatus> {
    if !range.is_complete() {
        return None;
    }

    Some(if is_now_within(range, clock) {
        OpenStatus::Open
    } else {
        OpenStatus::Closed
    })
}

/// `"17:00:00"` → `"5 PM"`, `"17:30:00"` → `"5:30 PM"`. Seconds are dropped.
///
/// Input must already be canonical 24-hour text.
pub fn format_point(canonical: &str) -> AppResult<String> {
    let t = parse_strict_24h(canonical)
        .ok_or_else(|| AppError::MalformedCanonicalTime(canonical.to_string()))?;

    let h12 = match t.hour() % 12 {
        0 => 12,
        h => h,
    };
    let meridiem = if t.hour() < 12 { "AM" } else { "PM" };

    if t.minute() == 0 {
        Ok(format!("{} {}", h12, meridiem))
    } else {
        Ok(format!("{}:{:02} {}", h12, t.minute(), meridiem))
    }
}

/// `"9 AM - 5 PM"`, or `"-"` unless both sides are present.
pub fn format_range(range: &TimeRange) -> AppResult<String> {
    match (range.start(), range.end()) {
        (Some(start), Some(end)) => Ok(format!(
            "{} - {}",
            format_point(start)?,
            format_point(end)?
        )),
        _ => Ok("-".to_string()),
    }
}

/// Operating-hours line of a facility card.
///
/// `exact` shows the full range; otherwise "Open until …" while open and
/// "Opens at …" while closed. `None` when either bound is missing.
pub fn operating_hours<C: Clock + ?Sized>(
    range: &TimeRange,
    exact: bool,
    clock: &C,
) -> AppResult<Option<String>> {
    let (Some(opens_at), Some(closes_at)) = (range.start(), range.end()) else {
        return Ok(None);
    };

    let line = if exact {
        format_range(range)?
    } else if is_now_within(range, clock) {
        format!("Open until {}", format_point(closes_at)?)
    } else {
        format!("Opens at {}", format_point(opens_at)?)
    };

    Ok(Some(line))
}
