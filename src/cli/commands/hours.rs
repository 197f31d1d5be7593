use crate::cli::parser::{Commands, HoursCommands};
use crate::core::hours::clock::{Clock, FixedClock, SystemClock};
use crate::core::hours::evaluator::{format_range, open_status, operating_hours};
use crate::core::hours::parser::parse_to_canonical;
use crate::core::hours::validator::{Constraints, validate};
use crate::errors::{AppError, AppResult};
use crate::models::time_range::TimeRange;
use crate::models::validation::{Side, TimeUnit, ValidationOutcome};
use crate::utils::colors::{badge, colorize_outcome};
use chrono::Local;

/// Canonical form of one side; empty stays unset.
fn canonical_side(raw: &str) -> AppResult<Option<String>> {
    if raw.is_empty() {
        return Ok(None);
    }
    parse_to_canonical(raw)
        .map(|t| Some(t.to_string()))
        .ok_or_else(|| AppError::InvalidTime(raw.to_string()))
}

fn canonical_range(start: &str, end: &str) -> AppResult<TimeRange> {
    Ok(TimeRange::new(canonical_side(start)?, canonical_side(end)?))
}

fn describe(outcome: ValidationOutcome) -> String {
    match outcome.message() {
        Some(msg) => colorize_outcome(&format!("{} [{}]", msg, outcome.as_str()), true),
        None => colorize_outcome("ok", false),
    }
}

pub fn handle(cmd: &Commands) -> AppResult<()> {
    let Commands::Hours { action } = cmd else {
        return Ok(());
    };

    match action {
        HoursCommands::Parse { text } => {
            if text.is_empty() {
                println!("(unset)");
                return Ok(());
            }
            let t = parse_to_canonical(text).ok_or_else(|| AppError::InvalidTime(text.clone()))?;
            println!("{}  ({} s)", t, t.seconds_of_day());
        }

        HoursCommands::Check {
            start,
            end,
            min_time,
            max_time,
            minutes_step,
            seconds_step,
            disable_hours,
            disable_minutes,
            disable_seconds,
            json,
        } => {
            let mut constraints = Constraints::new();
            constraints.min_time = min_time.clone();
            constraints.max_time = max_time.clone();
            constraints.minutes_step = *minutes_step;
            constraints.seconds_step = *seconds_step;

            if !(disable_hours.is_empty() && disable_minutes.is_empty() && disable_seconds.is_empty())
            {
                constraints = constraints.with_disabled(|value, unit, _side| match unit {
                    TimeUnit::Hours => disable_hours.contains(&value),
                    TimeUnit::Minutes => disable_minutes.contains(&value),
                    TimeUnit::Seconds => disable_seconds.contains(&value),
                });
            }

            let range = TimeRange::from_raw(start, end);
            let (start_outcome, end_outcome) = validate(&range, &constraints);

            if *json {
                let out = serde_json::json!({
                    "start": start_outcome,
                    "end": end_outcome,
                    "stepSeconds": constraints.step_seconds(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
                return Ok(());
            }

            for (side, raw, outcome) in [
                (Side::Start, range.start(), start_outcome),
                (Side::End, range.end(), end_outcome),
            ] {
                println!(
                    "{:<5}  {:<12}  {}",
                    side.as_str(),
                    raw.unwrap_or("-"),
                    describe(outcome)
                );
            }
        }

        HoursCommands::Format { start, end } => {
            let range = canonical_range(start, end)?;
            println!("{}", format_range(&range)?);
        }

        HoursCommands::Status { start, end, at } => {
            let range = canonical_range(start, end)?;

            let clock: Box<dyn Clock> = match at {
                Some(at) => {
                    let t = parse_to_canonical(at).ok_or_else(|| AppError::InvalidTime(at.clone()))?;
                    let today = Local::now().date_naive();
                    Box::new(FixedClock(today.and_time(t.to_naive_time())))
                }
                None => Box::new(SystemClock),
            };

            match open_status(&range, clock.as_ref()) {
                Some(status) => {
                    let hours = operating_hours(&range, false, clock.as_ref())?.unwrap_or_default();
                    println!("{}  {}", badge(status.label(), status.is_open()), hours);
                }
                None => println!("- (opening hours incomplete)"),
            }
        }
    }

    Ok(())
}
