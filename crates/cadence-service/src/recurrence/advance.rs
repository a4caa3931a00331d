//! Calendar algorithms for each recurrence rule form.

use cadence_rule::{CalendarDate, DayInterval, MonthDays, MonthSet, RecurrenceRule, WeekdaySet};
use chrono::{Datelike, Days, NaiveDate};

use crate::error::{ServiceError, ServiceResult};

/// Days in one 400-year Gregorian cycle, after which weekdays and leap years
/// repeat exactly.
const GREGORIAN_CYCLE_DAYS: u32 = 146_097;

/// Months in one 400-year Gregorian cycle.
const GREGORIAN_CYCLE_MONTHS: u32 = 400 * 12;

const OUT_OF_RANGE: ServiceError =
    ServiceError::InvariantViolation("recurrence left the supported calendar range");

/// ## Summary
/// Computes the next date on which a task with `rule` should reappear.
///
/// `anchor` is the task's scheduled date and `now` the caller's reference
/// date. Daily rules count from `anchor` and may return `now` itself; the
/// other forms return a date strictly after `max(anchor, now)`.
///
/// ## Errors
/// Returns `ServiceError::InvariantViolation` only if the search leaves the
/// supported calendar range or cannot terminate. User input errors are caught
/// earlier by the rule parser.
pub fn advance(
    rule: &RecurrenceRule,
    anchor: CalendarDate,
    now: CalendarDate,
) -> ServiceResult<CalendarDate> {
    let start = anchor.max(now);

    match rule {
        RecurrenceRule::Daily(interval) => advance_daily(*interval, anchor, now),
        RecurrenceRule::Yearly => advance_yearly(anchor, start),
        RecurrenceRule::Weekly(weekdays) => advance_weekly(weekdays, anchor, start),
        RecurrenceRule::Monthly { days, months } => advance_monthly(days, months, start),
    }
}

/// Smallest `anchor + k * interval` (k >= 1) that is not earlier than `now`.
fn advance_daily(
    interval: DayInterval,
    anchor: CalendarDate,
    now: CalendarDate,
) -> ServiceResult<CalendarDate> {
    let step = i64::from(interval.days());
    let gap = now.naive().signed_duration_since(anchor.naive()).num_days();
    let steps = if gap > step { (gap + step - 1) / step } else { 1 };

    let offset = steps
        .checked_mul(step)
        .and_then(|days| u64::try_from(days).ok())
        .ok_or(OUT_OF_RANGE)?;

    anchor
        .naive()
        .checked_add_days(Days::new(offset))
        .map(CalendarDate::from)
        .ok_or(OUT_OF_RANGE)
}

/// Adds whole years to `anchor` until the date passes `start`.
fn advance_yearly(anchor: CalendarDate, start: CalendarDate) -> ServiceResult<CalendarDate> {
    let mut date = anchor.naive();
    while date <= start.naive() {
        date = add_one_year(date).ok_or(OUT_OF_RANGE)?;
    }
    Ok(date.into())
}

/// Same month and day one year later. February 29 moves forward to March 1
/// when the target year has no leap day.
fn add_one_year(date: NaiveDate) -> Option<NaiveDate> {
    let year = date.year().checked_add(1)?;
    if date.month() == 2 && date.day() == 29 && !is_leap_year(year) {
        NaiveDate::from_ymd_opt(year, 3, 1)
    } else {
        NaiveDate::from_ymd_opt(year, date.month(), date.day())
    }
}

/// Steps day by day from `start` to the first listed weekday whose day of the
/// year is past the anchor's.
fn advance_weekly(
    weekdays: &WeekdaySet,
    anchor: CalendarDate,
    start: CalendarDate,
) -> ServiceResult<CalendarDate> {
    let anchor_ordinal = anchor.ordinal();
    let mut date = start.naive();

    for _ in 0..GREGORIAN_CYCLE_DAYS {
        // Compares day-of-year only, ignoring the year. Stored schedules
        // depend on this, so a late-December anchor skips matching days in
        // early January.
        if weekdays.contains(date.weekday()) && date.ordinal() > anchor_ordinal {
            return Ok(date.into());
        }
        date = date.succ_opt().ok_or(OUT_OF_RANGE)?;
    }

    tracing::warn!(%anchor, %start, "Weekly recurrence found no qualifying day");
    Err(ServiceError::InvariantViolation(
        "weekly recurrence found no day past the anchor's day of year",
    ))
}

/// Walks month by month from `start` and returns the earliest resolved day
/// strictly after it.
fn advance_monthly(
    days: &MonthDays,
    months: &MonthSet,
    start: CalendarDate,
) -> ServiceResult<CalendarDate> {
    // Months before the start date's month hold no candidate after it.
    let (mut year, mut month) = (start.year(), start.month());

    for _ in 0..2 * GREGORIAN_CYCLE_MONTHS {
        if !months.admits(month) {
            if let Some(next) = months.next_on_or_after(month) {
                month = next;
            } else {
                year = year.checked_add(1).ok_or(OUT_OF_RANGE)?;
                month = months.first().ok_or(ServiceError::InvariantViolation(
                    "monthly recurrence has an empty month filter",
                ))?;
            }
            continue;
        }

        let last_day = last_day_of_month(year, month).ok_or(OUT_OF_RANGE)?;
        let candidate = days
            .iter()
            .filter_map(|spec| resolve_day(spec, last_day))
            .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
            .filter(|&date| date > start.naive())
            .min();
        if let Some(date) = candidate {
            return Ok(date.into());
        }

        (year, month) = if month == 12 {
            (year.checked_add(1).ok_or(OUT_OF_RANGE)?, 1)
        } else {
            (year, month + 1)
        };
    }

    tracing::warn!(%start, "Monthly recurrence found no qualifying day");
    Err(ServiceError::InvariantViolation(
        "monthly recurrence found no day that fits its months",
    ))
}

/// Resolves a day-of-month specifier against a month of `last_day` days.
///
/// Positive values are taken as-is, negative ones count back from the end
/// (`-1` is `last_day`). Returns `None` if the month is too short.
fn resolve_day(spec: i8, last_day: u32) -> Option<u32> {
    let magnitude = u32::from(spec.unsigned_abs());
    if magnitude > last_day {
        None
    } else if spec > 0 {
        Some(magnitude)
    } else {
        Some(last_day - magnitude + 1)
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?
        .pred_opt()
        .map(|date| date.day())
}

const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
