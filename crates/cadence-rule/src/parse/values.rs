//! Value parsers for dates and rule argument lists.

use chrono::NaiveDate;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::date::CalendarDate;
use crate::rule::{DayInterval, MonthDays, MonthSet, WeekdaySet};

/// Parses a DATE value.
///
/// Format: YYYYMMDD (e.g., "20240229")
///
/// ## Errors
/// Returns `InvalidDateFormat` if the string is not exactly eight ASCII digits
/// naming a real calendar day.
pub fn parse_date(s: &str) -> ParseResult<CalendarDate> {
    let invalid = || ParseError::new(ParseErrorKind::InvalidDateFormat).with_context(s);

    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let year = s[0..4].parse::<i32>().map_err(|_err| invalid())?;
    let month = s[4..6].parse::<u32>().map_err(|_err| invalid())?;
    let day = s[6..8].parse::<u32>().map_err(|_err| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day)
        .map(CalendarDate::from_naive)
        .ok_or_else(invalid)
}

/// Parses the argument of a daily rule (`d <n>`).
pub(super) fn parse_interval(s: &str) -> ParseResult<DayInterval> {
    let s = s.trim();
    s.parse::<u16>()
        .ok()
        .and_then(DayInterval::new)
        .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidInterval).with_context(s))
}

/// Parses the argument of a weekly rule (`w <d,d,...>`).
pub(super) fn parse_weekdays(s: &str) -> ParseResult<WeekdaySet> {
    let numbers = parse_list(s.trim(), ParseErrorKind::InvalidWeekday, |n: u8| {
        (1..=7).contains(&n)
    })?;
    WeekdaySet::from_iso(numbers)
        .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidWeekday).with_context(s))
}

/// Parses the day list of a monthly rule.
pub(super) fn parse_month_days(s: &str) -> ParseResult<MonthDays> {
    let days = parse_list(s, ParseErrorKind::InvalidMonthDay, |d: i8| {
        d != 0 && (-MonthDays::LIMIT..=MonthDays::LIMIT).contains(&d)
    })?;
    MonthDays::new(days)
        .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidMonthDay).with_context(s))
}

/// Parses the optional month list of a monthly rule.
pub(super) fn parse_months(s: &str) -> ParseResult<MonthSet> {
    let months = parse_list(s, ParseErrorKind::InvalidMonth, |m: u8| {
        (1..=12).contains(&m)
    })?;
    MonthSet::new(months)
        .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidMonth).with_context(s))
}

/// Parses a comma-separated list, reporting the first token that is not a
/// number or fails `in_range`.
fn parse_list<T>(
    s: &str,
    kind: ParseErrorKind,
    in_range: impl Fn(T) -> bool,
) -> ParseResult<Vec<T>>
where
    T: std::str::FromStr + Copy,
{
    s.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<T>()
                .ok()
                .filter(|&v| in_range(v))
                .ok_or_else(|| ParseError::new(kind).with_context(token))
        })
        .collect()
}
