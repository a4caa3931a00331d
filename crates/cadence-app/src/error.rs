use cadence_rule::ParseErrorKind;
use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] cadence_service::error::ServiceError),

    #[error(transparent)]
    ParseError(#[from] cadence_rule::ParseError),
}

impl AppError {
    /// The kind of a user input error, `None` when the server is at fault.
    #[must_use]
    pub fn kind(&self) -> Option<ParseErrorKind> {
        match self {
            Self::ServiceError(err) => err.kind(),
            Self::ParseError(err) => Some(err.kind),
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
