use serde::Serialize;

/// Result of checking one side of a time range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ValidationOutcome {
    #[default]
    None,
    InvalidTime,
    MinTime,
    MaxTime,
    Step,
    /// Only ever reported on the end side.
    InvalidRange,
    ShouldDisableTime,
}

impl ValidationOutcome {
    pub fn is_none(&self) -> bool {
        matches!(self, ValidationOutcome::None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationOutcome::None => "none",
            ValidationOutcome::InvalidTime => "invalidTime",
            ValidationOutcome::MinTime => "minTime",
            ValidationOutcome::MaxTime => "maxTime",
            ValidationOutcome::Step => "step",
            ValidationOutcome::InvalidRange => "invalidRange",
            ValidationOutcome::ShouldDisableTime => "shouldDisableTime",
        }
    }

    /// Inline message shown under the offending input; `None` renders nothing.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ValidationOutcome::None => None,
            ValidationOutcome::InvalidTime => Some("Invalid time"),
            ValidationOutcome::MinTime => Some("Before minimum time"),
            ValidationOutcome::MaxTime => Some("After maximum time"),
            ValidationOutcome::Step => Some("Not aligned to step"),
            ValidationOutcome::InvalidRange => Some("End must be after start"),
            ValidationOutcome::ShouldDisableTime => Some("Time not allowed"),
        }
    }
}

/// Outcomes for (start, end).
pub type ValidationPair = (ValidationOutcome, ValidationOutcome);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Start,
    End,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Start => "start",
            Side::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Hours,
    Minutes,
    Seconds,
}
