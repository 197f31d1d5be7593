//! Time parsing: 24-hour `HH:MM[:SS]` and 12-hour `H:MM[:SS] AM/PM` notations,
//! normalized to `CanonicalTime`.

use crate::models::time_of_day::CanonicalTime;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_TIME_24: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])(?::([0-5][0-9]))?$")
        .expect("24h time pattern must compile")
});

static RE_TIME_12: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(0?[1-9]|1[0-2]):([0-5][0-9])(?::([0-5][0-9]))?\s*([AP])\.?M\.?$")
        .expect("12h time pattern must compile")
});

fn number(caps: &Captures, idx: usize) -> Option<u32> {
    match caps.get(idx) {
        Some(m) => m.as_str().parse().ok(),
        None => Some(0),
    }
}

fn match_24h(text: &str) -> Option<CanonicalTime> {
    let caps = RE_TIME_24.captures(text)?;
    CanonicalTime::new(number(&caps, 1)?, number(&caps, 2)?, number(&caps, 3)?)
}

fn match_12h(text: &str) -> Option<CanonicalTime> {
    let caps = RE_TIME_12.captures(text)?;
    let h12 = number(&caps, 1)?;
    let pm = caps.get(4)?.as_str().eq_ignore_ascii_case("p");
    let h24 = (h12 % 12) + if pm { 12 } else { 0 };
    CanonicalTime::new(h24, number(&caps, 2)?, number(&caps, 3)?)
}

/// Parse a free-form time. Surrounding whitespace is ignored; the 24-hour
/// grammar is tried first, then the 12-hour one.
///
/// ```
/// use rfacility::core::hours::parser::parse_to_canonical;
///
/// assert_eq!(parse_to_canonical("12:00 AM").unwrap().to_string(), "00:00:00");
/// assert_eq!(parse_to_canonical("1:05pm").unwrap().to_string(), "13:05:00");
/// assert!(parse_to_canonical("24:00").is_none());
/// ```
pub fn parse_to_canonical(text: &str) -> Option<CanonicalTime> {
    let t = text.trim();
    match_24h(t).or_else(|| match_12h(t))
}

/// Strict 24-hour match, no trimming and no AM/PM. Used where a value is
/// expected to be canonical already.
pub fn parse_strict_24h(text: &str) -> Option<CanonicalTime> {
    match_24h(text)
}

/// Seconds since midnight; `None` for an absent or empty value and for
/// unparsable text.
pub fn to_seconds_of_day(value: Option<&str>) -> Option<u32> {
    let v = value.filter(|v| !v.is_empty())?;
    parse_to_canonical(v).map(|t| t.seconds_of_day())
}
