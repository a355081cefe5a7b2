//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing adapters to use String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A serialized character carried a discriminator no variant answers to
    #[error("Unsupported character variant: {0}")]
    UnsupportedVariant(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when domain invariants are violated:
    /// - Required fields are empty or missing
    /// - Values are outside allowed ranges
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::validation("Character name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an unsupported variant error for an unknown `$type` tag
    pub fn unsupported_variant(tag: impl Into<String>) -> Self {
        Self::UnsupportedVariant(tag.into())
    }

    /// Check if this is an unsupported variant error.
    pub fn is_unsupported_variant(&self) -> bool {
        matches!(self, Self::UnsupportedVariant(_))
    }
}
