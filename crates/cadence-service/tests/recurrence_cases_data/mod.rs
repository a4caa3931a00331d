// Shared by the unit and integration suites. The including module must have
// `next_occurrence` in scope.
use cadence_rule::ParseErrorKind;

pub enum Expected {
    Date(&'static str),
    Error(ParseErrorKind),
}

pub struct RecurrenceCase {
    pub name: &'static str,
    pub now: &'static str,
    pub anchor: &'static str,
    pub rule: &'static str,
    pub expected: Expected,
}

const fn ok(
    name: &'static str,
    now: &'static str,
    anchor: &'static str,
    rule: &'static str,
    date: &'static str,
) -> RecurrenceCase {
    RecurrenceCase {
        name,
        now,
        anchor,
        rule,
        expected: Expected::Date(date),
    }
}

const fn err(
    name: &'static str,
    now: &'static str,
    anchor: &'static str,
    rule: &'static str,
    kind: ParseErrorKind,
) -> RecurrenceCase {
    RecurrenceCase {
        name,
        now,
        anchor,
        rule,
        expected: Expected::Error(kind),
    }
}

pub fn recurrence_cases() -> Vec<RecurrenceCase> {
    vec![
        ok("daily_next_day", "20240126", "20240126", "d 1", "20240127"),
        ok("daily_catches_up", "20240126", "20240113", "d 5", "20240128"),
        ok("daily_may_land_on_now", "20240115", "20240101", "d 7", "20240115"),
        ok("daily_future_anchor", "20240101", "20240201", "d 3", "20240204"),
        ok("daily_max_interval", "20240101", "20240101", "d 400", "20250204"),
        ok("yearly_leap_day", "20240229", "20240229", "y", "20250301"),
        ok("yearly_same_day", "20230301", "20230301", "y", "20240301"),
        ok("yearly_catches_up", "20230101", "20200229", "y", "20230301"),
        ok("yearly_future_anchor", "20240101", "20250615", "y", "20260615"),
        ok("weekly_monday_sunday", "20240101", "20240101", "w 1,7", "20240107"),
        ok("weekly_from_now", "20240111", "20240101", "w 3", "20240117"),
        ok("weekly_year_boundary", "20231229", "20231229", "w 1", "20241230"),
        ok("monthly_last_day_leap", "20240201", "20240201", "m -1", "20240229"),
        ok("monthly_last_day_common", "20230201", "20230201", "m -1", "20230228"),
        ok("monthly_second_to_last", "20240101", "20240101", "m -2", "20240130"),
        ok("monthly_unordered_days", "20240110", "20240110", "m 20,5", "20240120"),
        ok(
            "monthly_month_filter",
            "20240201",
            "20231215",
            "m -1,15 3,6,9",
            "20240315",
        ),
        ok("monthly_skips_short_month", "20240131", "20240131", "m 31 1,2", "20250131"),
        ok("monthly_wraps_year", "20240710", "20240710", "m 5 3,6", "20250305"),
        ok("monthly_leap_only", "20240301", "20240301", "m 29 2", "20280229"),
        err("empty_rule", "20240101", "20240101", "", ParseErrorKind::EmptyRule),
        err("empty_rule_beats_bad_dates", "nope", "nope", "", ParseErrorKind::EmptyRule),
        err("bad_now", "2024-01-01", "20240101", "d 1", ParseErrorKind::InvalidDateFormat),
        err("bad_anchor", "20240101", "20240230", "d 1", ParseErrorKind::InvalidDateFormat),
        err("daily_zero", "20240101", "20240101", "d 0", ParseErrorKind::InvalidInterval),
        err("daily_too_long", "20240101", "20240101", "d 401", ParseErrorKind::InvalidInterval),
        err("weekly_eight", "20240101", "20240101", "w 8", ParseErrorKind::InvalidWeekday),
        err("monthly_zero", "20240101", "20240101", "m 0", ParseErrorKind::InvalidMonthDay),
        err("monthly_day_32", "20240101", "20240101", "m 32", ParseErrorKind::InvalidMonthDay),
        err("monthly_month_13", "20240101", "20240101", "m 1 13", ParseErrorKind::InvalidMonth),
        err(
            "monthly_unreachable_day",
            "20240101",
            "20240101",
            "m 31 2,4",
            ParseErrorKind::InvalidMonthDay,
        ),
        err("yearly_with_args", "20240101", "20240101", "y 2", ParseErrorKind::UnsupportedRule),
        err("unknown_keyword", "20240101", "20240101", "k 34", ParseErrorKind::UnsupportedRule),
    ]
}

pub fn assert_case(case: &RecurrenceCase) {
    let result = next_occurrence(case.now, case.anchor, case.rule);

    match (&case.expected, result) {
        (Expected::Date(expected), Ok(actual)) => {
            assert_eq!(actual, *expected, "Case {} did not match", case.name);
        }
        (Expected::Error(expected), Err(err)) => {
            assert_eq!(
                err.kind(),
                Some(*expected),
                "Case {} failed with the wrong error: {err}",
                case.name
            );
        }
        (Expected::Date(expected), Err(err)) => {
            panic!("Case {} expected {expected}, got error: {err}", case.name);
        }
        (Expected::Error(expected), Ok(actual)) => {
            panic!("Case {} expected {expected:?}, got {actual}", case.name);
        }
    }
}
