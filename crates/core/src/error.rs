//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// missing records, stock shortfalls). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a non-positive sale count).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A requested product was not found in the catalog.
    #[error("product not found")]
    NotFound,

    /// A sale requested more units than are on hand.
    #[error("insufficient stock of {name}: requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        requested: i64,
        available: i64,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn insufficient_stock(name: impl Into<String>, requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            name: name.into(),
            requested,
            available,
        }
    }
}
