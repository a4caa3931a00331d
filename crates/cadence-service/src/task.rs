//! Date policy for tasks being created, edited, or marked done.
//!
//! These helpers decide which date a task should be stored with. They never
//! touch storage, the caller persists the outcome.

use cadence_rule::{CalendarDate, parse_date, parse_rule};

use crate::error::ServiceResult;
use crate::recurrence::next_date;

/// Literal accepted in place of a date to mean the reference day.
pub const TODAY: &str = "today";

/// What happens to a task when it is marked done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// One-off task: delete it.
    Remove,
    /// Recurring task: keep it and move it to the given date.
    Reschedule(CalendarDate),
}

/// ## Summary
/// Picks the stored date for a task being created or edited.
///
/// An absent or empty `requested` date, or the literal `today`, means
/// `today`. A date in the past moves to `today` for one-off tasks and to the
/// next occurrence for recurring ones. Dates from `today` on are kept.
///
/// ## Errors
/// Returns `InvalidDateFormat` for a malformed date and the rule parser's
/// error for a malformed non-empty `repeat`, even when the date is kept.
/// Returns `ServiceError::InvariantViolation` if the next occurrence is past
/// year 9999.
pub fn schedule_date(
    today: CalendarDate,
    requested: Option<&str>,
    repeat: &str,
) -> ServiceResult<CalendarDate> {
    let date = match requested {
        None | Some("" | TODAY) => today,
        Some(text) => parse_date(text)?,
    };

    if repeat.is_empty() {
        return Ok(date.max(today));
    }

    let rule = parse_rule(repeat)?;
    if date < today {
        next_date(today, date, &rule)
    } else {
        Ok(date)
    }
}

/// ## Summary
/// Decides the outcome of marking a task done on `today`.
///
/// ## Errors
/// For recurring tasks, returns `InvalidDateFormat` if `task_date` is
/// malformed and the rule parser's error if `repeat` is. Returns
/// `ServiceError::InvariantViolation` if the next occurrence is past year 9999.
pub fn complete(today: CalendarDate, task_date: &str, repeat: &str) -> ServiceResult<Completion> {
    if repeat.is_empty() {
        return Ok(Completion::Remove);
    }

    let anchor = parse_date(task_date)?;
    let rule = parse_rule(repeat)?;
    let next = next_date(today, anchor, &rule)?;
    tracing::debug!(%anchor, %next, "Rescheduling completed task");
    Ok(Completion::Reschedule(next))
}
