//! Calendar dates and the compact recurrence rule grammar used by Cadence
//! tasks (`d 7`, `y`, `w 1,3,5`, `m -1,15 3,6,9`).

pub mod date;
pub mod parse;
pub mod rule;

pub use date::CalendarDate;
pub use parse::error::{ParseError, ParseErrorKind, ParseResult};
pub use parse::{parse_date, parse_rule};
pub use rule::{DayInterval, MonthDays, MonthSet, RecurrenceRule, WeekdaySet};
