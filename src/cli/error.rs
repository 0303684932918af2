//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::NoLineageFile => crate::exitcode::USAGE,
                ApplicationError::VampireNotFound(_) => crate::exitcode::DATAERR,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Domain(d) => match d {
                    DomainError::FileNotFound(_) => crate::exitcode::NOINPUT,
                    DomainError::InvalidLineageFile { .. }
                    | DomainError::UnknownCreator { .. }
                    | DomainError::AmbiguousCreator(_) => crate::exitcode::DATAERR,
                    DomainError::UnknownVampire(_) => crate::exitcode::SOFTWARE,
                },
            },
        }
    }
}
