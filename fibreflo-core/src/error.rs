use itertools::Itertools;
use thiserror::Error;

/// A single field-level problem with user input.
///
/// Validators collect every applicable error instead of stopping at the
/// first one, so a form layer can surface all of them at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("work item type is not on the rate card: {0:?}")]
    InvalidWorkItemType(String),
    #[error("quantity must be a whole number greater than zero")]
    InvalidQuantity,
    #[error("work area is required")]
    MissingWorkArea,
    #[error("notes are required")]
    MissingNotes,
    #[error("unknown work provider: {0:?}")]
    InvalidWorkProvider(String),
    #[error("date of work is missing, malformed, or in the future")]
    InvalidDate,
    #[error("at least one engineer must be assigned")]
    MissingEngineers,
}

/// A work provider name that does not match any recognized provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown work provider: {0:?}")]
pub struct UnknownProvider(pub String);

/// Errors surfaced by a [`TimesheetRepository`](crate::TimesheetRepository)
/// implementation.
///
/// Failures are terminal for the operation in progress; the core performs
/// no retries.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("{0}")]
    Unknown(String),
}

impl RepositoryError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::Unknown(msg.into())
    }
}

/// Error surface of the timesheet use cases.
#[derive(Debug, Error)]
pub enum TimesheetError {
    #[error("validation failed: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors.iter().join("; ")
}
