//! Error types for port operations.

/// Repository operation errors with context for debugging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoError {
    /// Entity not found - includes entity type and key for actionable error messages.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// An entity with the same name is already stored.
    #[error("{entity_type} already exists: {name}")]
    DuplicateName {
        entity_type: &'static str,
        name: String,
    },
}

impl RepoError {
    /// Create a NotFound error with entity type and key context.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create a DuplicateName error with entity type and name context.
    pub fn duplicate(entity_type: &'static str, name: impl ToString) -> Self {
        Self::DuplicateName {
            entity_type,
            name: name.to_string(),
        }
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a DuplicateName error.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateName { .. })
    }
}
