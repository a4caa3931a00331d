//! Recurrence rule value types.
//!
//! Every parameter type here has private fields and is built only by
//! [`crate::parse::parse_rule`], so holding a `RecurrenceRule` means holding a
//! rule that already passed validation.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;

use crate::parse::error::ParseError;

/// How a task repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceRule {
    /// `d <n>`: every `n` days after the anchor.
    Daily(DayInterval),
    /// `y`: every year on the anchor's month and day.
    Yearly,
    /// `w <d,...>`: on the listed weekdays.
    Weekly(WeekdaySet),
    /// `m <d,...>[ <m,...>]`: on the listed days of the listed months.
    Monthly { days: MonthDays, months: MonthSet },
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily(interval) => write!(f, "d {interval}"),
            Self::Yearly => f.write_str("y"),
            Self::Weekly(weekdays) => write!(f, "w {weekdays}"),
            Self::Monthly { days, months } => {
                write!(f, "m {days}")?;
                if !months.is_empty() {
                    write!(f, " {months}")?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for RecurrenceRule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_rule(s)
    }
}

/// Number of days between daily occurrences (1 to 400).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayInterval(u16);

impl DayInterval {
    pub const MIN: u16 = 1;
    pub const MAX: u16 = 400;

    pub(crate) fn new(days: u16) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&days).then_some(Self(days))
    }

    #[must_use]
    pub const fn days(self) -> u16 {
        self.0
    }
}

impl fmt::Display for DayInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty set of weekdays, ordered Monday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdaySet(Vec<Weekday>);

impl WeekdaySet {
    /// Builds the set from ISO weekday numbers (1 = Monday .. 7 = Sunday).
    pub(crate) fn from_iso(mut numbers: Vec<u8>) -> Option<Self> {
        numbers.sort_unstable();
        numbers.dedup();
        let days = numbers
            .into_iter()
            .map(weekday_from_iso)
            .collect::<Option<Vec<_>>>()?;
        (!days.is_empty()).then_some(Self(days))
    }

    #[must_use]
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.0.contains(&weekday)
    }

    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: Vec<_> = self
            .0
            .iter()
            .map(|day| day.number_from_monday().to_string())
            .collect();
        f.write_str(&s.join(","))
    }
}

fn weekday_from_iso(number: u8) -> Option<Weekday> {
    Some(match number {
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        7 => Weekday::Sun,
        _ => return None,
    })
}

/// Non-empty, sorted list of day-of-month specifiers.
///
/// Positive values count from the first day of the month, negative values
/// from the last (`-1` is the last day). Zero never appears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthDays(Vec<i8>);

impl MonthDays {
    pub const LIMIT: i8 = 31;

    pub(crate) fn new(mut days: Vec<i8>) -> Option<Self> {
        days.sort_unstable();
        days.dedup();
        let valid = !days.is_empty()
            && days
                .iter()
                .all(|&d| d != 0 && (-Self::LIMIT..=Self::LIMIT).contains(&d));
        valid.then_some(Self(days))
    }

    pub fn iter(&self) -> impl Iterator<Item = i8> + '_ {
        self.0.iter().copied()
    }

    /// Returns `true` if at least one specifier fits in a month of
    /// `month_len` days.
    #[must_use]
    pub fn fits_within(&self, month_len: u32) -> bool {
        self.0
            .iter()
            .any(|d| u32::from(d.unsigned_abs()) <= month_len)
    }
}

impl fmt::Display for MonthDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: Vec<_> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&s.join(","))
    }
}

/// Sorted set of months (1 to 12). Empty means every month.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthSet(Vec<u8>);

impl MonthSet {
    pub(crate) fn new(mut months: Vec<u8>) -> Option<Self> {
        months.sort_unstable();
        months.dedup();
        months
            .iter()
            .all(|m| (1..=12).contains(m))
            .then_some(Self(months))
    }

    /// The filter that admits every month.
    #[must_use]
    pub const fn every() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if `month` passes the filter.
    #[must_use]
    pub fn admits(&self, month: u32) -> bool {
        self.0.is_empty() || self.0.iter().any(|&m| u32::from(m) == month)
    }

    /// Earliest listed month that is `>= month`.
    #[must_use]
    pub fn next_on_or_after(&self, month: u32) -> Option<u32> {
        self.0
            .iter()
            .map(|&m| u32::from(m))
            .find(|&m| m >= month)
    }

    /// Earliest listed month.
    #[must_use]
    pub fn first(&self) -> Option<u32> {
        self.0.first().map(|&m| u32::from(m))
    }

    /// Months the filter admits, in calendar order.
    pub fn admitted(&self) -> impl Iterator<Item = u32> + '_ {
        (1..=12u32).filter(|&m| self.admits(m))
    }
}

impl fmt::Display for MonthSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: Vec<_> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&s.join(","))
    }
}
