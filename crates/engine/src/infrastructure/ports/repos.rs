//! Repository port traits for character storage.

use skirmish_domain::Character;

use super::error::RepoError;

// =============================================================================
// Character Context
// =============================================================================

/// Ordered store of every character taking part in a run.
///
/// Names are the key: `update_character` and `delete_character` match on them,
/// and insertion order is the order `characters` returns.
#[cfg_attr(test, mockall::automock)]
pub trait CharacterContext: Send + Sync {
    /// Snapshot of all characters in insertion order.
    fn characters(&self) -> Vec<Character>;

    fn get(&self, name: &str) -> Option<Character>;

    /// Replace the whole collection. Rejects batches with repeated names.
    fn seed(&self, characters: Vec<Character>) -> Result<(), RepoError>;

    fn add_character(&self, character: Character) -> Result<(), RepoError>;

    /// Replace the stored character with the same name, keeping its position.
    fn update_character(&self, character: Character) -> Result<(), RepoError>;

    fn delete_character(&self, name: &str) -> Result<(), RepoError>;
}
