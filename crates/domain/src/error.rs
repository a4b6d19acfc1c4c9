/// Outcome of validating caller input or a session lifecycle operation.
/// Every failure is recoverable and leaves the receiver unchanged.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyIdentifier(&'static str),
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("{field} must be {requirement}")]
    InvalidRange {
        field: &'static str,
        requirement: &'static str,
    },
    #[error("{field} must be one of {expected} (got `{value}`)")]
    InvalidEnum {
        field: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("{0} is required for strength exercises")]
    MissingField(&'static str),
    #[error("{0} must not be set for cardio exercises")]
    UnexpectedField(&'static str),
    #[error("session has already been started")]
    AlreadyStarted,
    #[error("session has not been started")]
    NotStarted,
    #[error("session has already been finished")]
    AlreadyClosed,
    #[error("session has no exercises")]
    NoExercises,
    #[error("session is still open")]
    SessionStillOpen,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("conflict")]
    Conflict,
    #[error("not found")]
    NotFound,
}
