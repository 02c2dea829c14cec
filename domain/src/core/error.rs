//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The decision logic itself is total: once a catalog is constructed,
/// quote selection and streak evaluation cannot fail. Errors only arise
/// while building the fixed tables.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Quote category '{0}' has no quotes")]
    EmptyCategory(String),

    #[error("Quote catalog has no '{0}' fallback category")]
    MissingDefaultCategory(String),
}
