//! Canonical 24-hour time of day (`HH:MM:SS`).

use crate::core::hours::parser;
use crate::errors::AppError;
use chrono::NaiveTime;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const SECONDS_PER_DAY: u32 = 86_400;

/// A wall-clock time of day, always 24-hour and zero-padded when displayed.
///
/// Components are guaranteed in range (`hour < 24`, `minute < 60`, `second < 60`),
/// so the value maps to exactly one second in `[0, 86399]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalTime {
    hour: u32,
    minute: u32,
    second: u32,
}

impl CanonicalTime {
    pub fn new(hour: u32, minute: u32, second: u32) -> Option<Self> {
        if hour < 24 && minute < 60 && second < 60 {
            Some(Self {
                hour,
                minute,
                second,
            })
        } else {
            None
        }
    }

    pub fn from_seconds_of_day(secs: u32) -> Option<Self> {
        if secs >= SECONDS_PER_DAY {
            return None;
        }
        Self::new(secs / 3600, (secs % 3600) / 60, secs % 60)
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    pub fn seconds_of_day(&self) -> u32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second).unwrap_or_default()
    }
}

impl fmt::Display for CanonicalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Accepts both the 24-hour and the 12-hour (AM/PM) notations.
impl FromStr for CanonicalTime {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_to_canonical(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))
    }
}

impl Serialize for CanonicalTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
