//! Rule and date parsing error types.

use std::fmt;

/// Result type for rule and date parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type for rule and date parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Kind of error.
    pub kind: ParseErrorKind,
    /// The offending token or text, when there is one.
    pub context: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(ref ctx) = self.context {
            write!(f, ": '{ctx}'")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Kinds of parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A date is not eight digits naming a real `YYYYMMDD` day.
    InvalidDateFormat,
    /// The rule text is empty.
    EmptyRule,
    /// Daily interval missing, non-numeric, or outside 1..=400.
    InvalidInterval,
    /// Weekday token non-numeric or outside 1..=7, or the list is empty.
    InvalidWeekday,
    /// Day-of-month token non-numeric, zero, outside -31..=31, or unable to
    /// fall in any allowed month.
    InvalidMonthDay,
    /// Month token non-numeric or outside 1..=12.
    InvalidMonth,
    /// The text matches none of the rule forms.
    UnsupportedRule,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDateFormat => write!(f, "invalid date format"),
            Self::EmptyRule => write!(f, "the repetition rule is empty"),
            Self::InvalidInterval => write!(f, "invalid day interval"),
            Self::InvalidWeekday => write!(f, "invalid day of week"),
            Self::InvalidMonthDay => write!(f, "invalid day of month"),
            Self::InvalidMonth => write!(f, "invalid month"),
            Self::UnsupportedRule => write!(f, "unsupported repetition rule"),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
