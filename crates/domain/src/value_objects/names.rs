//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for a character name
const MAX_NAME_LENGTH: usize = 200;

// ============================================================================
// CharacterName
// ============================================================================

/// A validated character name (non-empty, <=200 chars, trimmed)
///
/// Names key the character context and never change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterName(String);

impl CharacterName {
    /// Create a new validated character name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Character name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Character name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CharacterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CharacterName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl TryFrom<String> for CharacterName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CharacterName> for String {
    fn from(name: CharacterName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let name = CharacterName::new("  Hero  ").expect("valid name");
        assert_eq!(name.as_str(), "Hero");
    }

    #[test]
    fn rejects_empty_and_blank_names() {
        assert!(matches!(
            CharacterName::new(""),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            CharacterName::new("   \t"),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn rejects_overlong_names() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        let err = CharacterName::new(long).expect_err("too long");
        assert!(err.to_string().contains("200"));

        let exact = "x".repeat(MAX_NAME_LENGTH);
        assert!(CharacterName::new(exact).is_ok());
    }

    #[test]
    fn serde_uses_plain_string() {
        let name = CharacterName::new("Grunt").expect("valid name");
        let json = serde_json::to_string(&name).expect("serialize");
        assert_eq!(json, "\"Grunt\"");

        let err = serde_json::from_str::<CharacterName>("\"  \"");
        assert!(err.is_err());
    }
}
