//! Repository error types.
//!
//! Only the strict lookup fails; a plain lookup with no match is `None`.

use thiserror::Error;

/// Errors returned by [`crate::PersonRepository::get_by_id_strict`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Not found: no person with id {id}")]
    NotFound { id: i32 },
    #[error("Ambiguous: {count} persons share id {id}")]
    Ambiguous { id: i32, count: usize },
}
