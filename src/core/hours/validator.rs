//! Validation of an opening/closing pair against step, bounds and a
//! per-component disable predicate.

use crate::core::hours::parser::to_seconds_of_day;
use crate::models::time_range::TimeRange;
use crate::models::validation::{Side, TimeUnit, ValidationOutcome, ValidationPair};

/// `(value, unit, side)`: value is 0–23 for hours, 0–59 for minutes and seconds.
pub type DisablePredicate<'a> = Box<dyn Fn(u32, TimeUnit, Side) -> bool + 'a>;

/// Constraints applied to both sides of a range.
///
/// `min_time` only bounds the start, `max_time` only bounds the end. Bounds
/// that do not parse are ignored.
#[derive(Default)]
pub struct Constraints<'a> {
    pub min_time: Option<String>,
    pub max_time: Option<String>,
    pub minutes_step: Option<f64>,
    /// Overrides `minutes_step` when set.
    pub seconds_step: Option<f64>,
    pub should_disable_time: Option<DisablePredicate<'a>>,
}

impl<'a> Constraints<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_time(mut self, t: impl Into<String>) -> Self {
        self.min_time = Some(t.into());
        self
    }

    pub fn with_max_time(mut self, t: impl Into<String>) -> Self {
        self.max_time = Some(t.into());
        self
    }

    pub fn with_minutes_step(mut self, minutes: f64) -> Self {
        self.minutes_step = Some(minutes);
        self
    }

    pub fn with_seconds_step(mut self, seconds: f64) -> Self {
        self.seconds_step = Some(seconds);
        self
    }

    pub fn with_disabled<F>(mut self, predicate: F) -> Self
    where
        F: Fn(u32, TimeUnit, Side) -> bool + 'a,
    {
        self.should_disable_time = Some(Box::new(predicate));
        self
    }

    pub fn step_seconds(&self) -> u32 {
        resolve_step_seconds(self.minutes_step, self.seconds_step)
    }
}

/// Step granularity in seconds, never below 1.
pub fn resolve_step_seconds(minutes_step: Option<f64>, seconds_step: Option<f64>) -> u32 {
    let raw = match seconds_step {
        Some(secs) => secs.floor(),
        None => (minutes_step.unwrap_or(1.0) * 60.0).floor(),
    };

    if raw.is_finite() { raw.max(1.0) as u32 } else { 1 }
}

fn check_side(
    raw: Option<&str>,
    secs: Option<u32>,
    side: Side,
    bound: Option<u32>,
    step: u32,
    disabled: Option<&DisablePredicate<'_>>,
) -> ValidationOutcome {
    let Some(secs) = secs else {
        // empty is "unset", only non-empty garbage is an error
        return if raw.is_some() {
            ValidationOutcome::InvalidTime
        } else {
            ValidationOutcome::None
        };
    };

    match (side, bound) {
        (Side::Start, Some(min)) if secs < min => return ValidationOutcome::MinTime,
        (Side::End, Some(max)) if secs > max => return ValidationOutcome::MaxTime,
        _ => {}
    }

    if secs % step != 0 {
        return ValidationOutcome::Step;
    }

    if let Some(is_disabled) = disabled
        && (is_disabled(secs / 3600, TimeUnit::Hours, side)
            || is_disabled((secs % 3600) / 60, TimeUnit::Minutes, side)
            || is_disabled(secs % 60, TimeUnit::Seconds, side))
    {
        return ValidationOutcome::ShouldDisableTime;
    }

    ValidationOutcome::None
}

/// Validate each side independently, then the ordering.
///
/// Ordering (`start > end` → `InvalidRange` on the end side) is only reported
/// when neither side already has an error.
pub fn validate(range: &TimeRange, constraints: &Constraints<'_>) -> ValidationPair {
    let step = constraints.step_seconds();
    let min = to_seconds_of_day(constraints.min_time.as_deref());
    let max = to_seconds_of_day(constraints.max_time.as_deref());
    let disabled = constraints.should_disable_time.as_ref();

    let start_secs = to_seconds_of_day(range.start());
    let end_secs = to_seconds_of_day(range.end());

    let start = check_side(range.start(), start_secs, Side::Start, min, step, disabled);
    let end = check_side(range.end(), end_secs, Side::End, max, step, disabled);

    if start.is_none()
        && end.is_none()
        && let (Some(s), Some(e)) = (start_secs, end_secs)
        && s > e
    {
        return (start, ValidationOutcome::InvalidRange);
    }

    (start, end)
}

/// Keeps the last computed pair and calls the error observer whenever it
/// changes. The first observation always notifies.
pub struct ValidationWatch<'a> {
    constraints: Constraints<'a>,
    last: Option<ValidationPair>,
    on_error: Option<Box<dyn FnMut(ValidationPair) + 'a>>,
}

impl<'a> ValidationWatch<'a> {
    pub fn new(constraints: Constraints<'a>) -> Self {
        Self {
            constraints,
            last: None,
            on_error: None,
        }
    }

    pub fn on_error<F>(mut self, observer: F) -> Self
    where
        F: FnMut(ValidationPair) + 'a,
    {
        self.on_error = Some(Box::new(observer));
        self
    }

    pub fn last(&self) -> Option<ValidationPair> {
        self.last
    }

    pub fn observe(&mut self, range: &TimeRange) -> ValidationPair {
        let pair = validate(range, &self.constraints);

        if self.last != Some(pair) {
            self.last = Some(pair);
            if let Some(observer) = self.on_error.as_mut() {
                observer(pair);
            }
        }

        pair
    }
}
