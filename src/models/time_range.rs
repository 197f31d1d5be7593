use crate::core::hours::parser;
use serde::{Deserialize, Serialize};

/// An opening/closing pair as entered or stored.
///
/// Each side is kept as raw text: a form must be able to hold a half-typed or
/// reversed range while the user is still editing. Ordering and format are
/// checked by `core::hours::validator`, never here. An empty string is the
/// same as an absent side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl TimeRange {
    pub fn new(start: Option<String>, end: Option<String>) -> Self {
        Self {
            start: start.filter(|s| !s.is_empty()),
            end: end.filter(|s| !s.is_empty()),
        }
    }

    pub fn from_raw(start: &str, end: &str) -> Self {
        Self::new(Some(start.to_string()), Some(end.to_string()))
    }

    pub fn unset() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<&str> {
        self.start.as_deref().filter(|s| !s.is_empty())
    }

    pub fn end(&self) -> Option<&str> {
        self.end.as_deref().filter(|s| !s.is_empty())
    }

    pub fn is_complete(&self) -> bool {
        self.start().is_some() && self.end().is_some()
    }

    /// Rewrites every parsable side into `HH:MM:SS`; unparsable text is kept as is.
    pub fn canonicalized(&self) -> Self {
        let canon = |side: Option<&str>| {
            side.map(|raw| match parser::parse_to_canonical(raw) {
                Some(t) => t.to_string(),
                None => raw.to_string(),
            })
        };

        Self {
            start: canon(self.start()),
            end: canon(self.end()),
        }
    }
}
