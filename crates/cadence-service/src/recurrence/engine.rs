//! Public entry points of the recurrence engine.

use cadence_rule::{CalendarDate, ParseError, ParseErrorKind, RecurrenceRule, parse_date, parse_rule};

use super::advance::advance;
use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Computes the next occurrence of a recurring task from wire-format inputs.
///
/// `now` and `anchor` are `YYYYMMDD` dates, `rule` is the task's repeat rule.
/// Returns the next date in the same `YYYYMMDD` form.
///
/// ## Errors
/// - `EmptyRule` if `rule` is empty, whatever the dates are
/// - `InvalidDateFormat` if `now` or `anchor` is malformed
/// - the rule parser's error for a malformed rule
/// - `ServiceError::InvariantViolation` from [`next_date`]
pub fn next_occurrence(now: &str, anchor: &str, rule: &str) -> ServiceResult<String> {
    if rule.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyRule).into());
    }

    let now = parse_date(now)?;
    let anchor = parse_date(anchor)?;
    let rule = parse_rule(rule)?;

    Ok(next_date(now, anchor, &rule)?.to_string())
}

/// ## Summary
/// Computes the next occurrence of a parsed rule.
///
/// Every date this returns can be written as `YYYYMMDD`.
///
/// ## Errors
/// Returns `ServiceError::InvariantViolation` if the calendar search cannot
/// complete, see [`advance`], or if the result is past year 9999.
pub fn next_date(
    now: CalendarDate,
    anchor: CalendarDate,
    rule: &RecurrenceRule,
) -> ServiceResult<CalendarDate> {
    let next = advance(rule, anchor, now)?;
    if !next.is_representable() {
        tracing::warn!(%now, %anchor, %rule, %next, "Next occurrence is past year 9999");
        return Err(ServiceError::InvariantViolation(
            "next occurrence is past year 9999",
        ));
    }
    tracing::trace!(%now, %anchor, %rule, %next, "Computed next occurrence");
    Ok(next)
}
