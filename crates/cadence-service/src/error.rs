use cadence_rule::{ParseError, ParseErrorKind};
use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

impl ServiceError {
    /// The user-facing error kind, or `None` for internal failures.
    #[must_use]
    pub fn kind(&self) -> Option<ParseErrorKind> {
        match self {
            Self::ParseError(err) => Some(err.kind),
            Self::InvariantViolation(_) => None,
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
