//! Domain-level errors

use std::path::PathBuf;

use generational_arena::Index;
use thiserror::Error;

/// Domain errors represent violations of the bloodline's contract.
/// These are independent of configuration and CLI concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("unknown vampire handle: {0:?}")]
    UnknownVampire(Index),

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("invalid lineage file {path}: {message}")]
    InvalidLineageFile { path: PathBuf, message: String },

    #[error("creator '{name}' of '{vampire}' is not declared before it")]
    UnknownCreator { name: String, vampire: String },

    #[error("creator name is ambiguous, declared more than once: {0}")]
    AmbiguousCreator(String),
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;
