//! Recurrence rule parser.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::values::{parse_interval, parse_month_days, parse_months, parse_weekdays};
use crate::rule::{MonthDays, MonthSet, RecurrenceRule};

/// Parses rule text into a validated [`RecurrenceRule`].
///
/// Forms are recognised by their leading keyword:
/// - `d <n>`: daily, `n` in 1..=400
/// - `y`: yearly
/// - `w <d,d,...>`: weekly, ISO weekdays 1 (Monday) ..= 7 (Sunday)
/// - `m <d,d,...>[ <m,m,...>]`: monthly, days in -31..=-1 or 1..=31, months
///   in 1..=12
///
/// ## Errors
/// Returns `EmptyRule` for empty text, the range error of the matched form for
/// bad arguments, and `UnsupportedRule` for anything else.
pub fn parse_rule(text: &str) -> ParseResult<RecurrenceRule> {
    if text.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyRule));
    }

    let (keyword, args) = match text.split_once(' ') {
        Some((keyword, args)) => (keyword, Some(args)),
        None => (text, None),
    };

    match (keyword, args) {
        ("d", args) => Ok(RecurrenceRule::Daily(parse_interval(
            args.unwrap_or_default(),
        )?)),
        ("y", None) => Ok(RecurrenceRule::Yearly),
        ("w", args) => Ok(RecurrenceRule::Weekly(parse_weekdays(
            args.unwrap_or_default(),
        )?)),
        ("m", args) => parse_monthly(args.unwrap_or_default()),
        _ => Err(ParseError::new(ParseErrorKind::UnsupportedRule).with_context(text)),
    }
}

/// Parses the arguments of `m <days>[ <months>]`.
fn parse_monthly(args: &str) -> ParseResult<RecurrenceRule> {
    let mut lists = args.split_whitespace();

    let days = parse_month_days(lists.next().unwrap_or_default())?;
    let months = match lists.next() {
        Some(list) => parse_months(list)?,
        None => MonthSet::every(),
    };
    if let Some(extra) = lists.next() {
        return Err(ParseError::new(ParseErrorKind::UnsupportedRule).with_context(extra));
    }

    ensure_reachable(&days, &months, args)?;

    Ok(RecurrenceRule::Monthly { days, months })
}

/// Rejects day lists that cannot land in any admitted month, such as
/// `m 31 2,4` or `m 30 2`.
fn ensure_reachable(days: &MonthDays, months: &MonthSet, args: &str) -> ParseResult<()> {
    if months.admitted().any(|m| days.fits_within(longest_month(m))) {
        Ok(())
    } else {
        Err(ParseError::new(ParseErrorKind::InvalidMonthDay).with_context(args.trim()))
    }
}

/// Length of `month` in a leap year.
const fn longest_month(month: u32) -> u32 {
    match month {
        2 => 29,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
