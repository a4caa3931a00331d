//! Parsers for `YYYYMMDD` dates and recurrence rule text.

pub mod error;
mod parser;
mod values;

pub use parser::parse_rule;
pub use values::parse_date;
