//! In-memory character context.
//!
//! Holds the run's characters in a `Vec` so insertion order doubles as
//! iteration order. Lives only as long as the process.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use skirmish_domain::Character;

use crate::infrastructure::ports::{CharacterContext, RepoError};

const ENTITY: &str = "Character";

/// A thread-safe, ordered character store.
#[derive(Debug, Default)]
pub struct InMemoryContext {
    characters: RwLock<Vec<Character>>,
}

impl InMemoryContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context pre-populated with `characters`.
    pub fn with_characters(characters: Vec<Character>) -> Result<Self, RepoError> {
        let context = Self::new();
        context.seed(characters)?;
        Ok(context)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Plain values: a poisoned lock still guards a consistent Vec.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Character>> {
        self.characters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Character>> {
        self.characters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn position(characters: &[Character], name: &str) -> Option<usize> {
    characters.iter().position(|c| c.name().as_str() == name)
}

impl CharacterContext for InMemoryContext {
    fn characters(&self) -> Vec<Character> {
        self.read().clone()
    }

    fn get(&self, name: &str) -> Option<Character> {
        let guard = self.read();
        position(&guard, name).map(|index| guard[index].clone())
    }

    fn seed(&self, characters: Vec<Character>) -> Result<(), RepoError> {
        {
            let mut seen = HashSet::with_capacity(characters.len());
            if let Some(repeated) = characters.iter().find(|c| !seen.insert(c.name().as_str())) {
                tracing::warn!(name = %repeated.name(), "Rejected seed with repeated character name");
                return Err(RepoError::duplicate(ENTITY, repeated.name()));
            }
        }

        tracing::debug!(count = characters.len(), "Seeding character context");
        *self.write() = characters;
        Ok(())
    }

    fn add_character(&self, character: Character) -> Result<(), RepoError> {
        let mut guard = self.write();
        if position(&guard, character.name().as_str()).is_some() {
            tracing::warn!(name = %character.name(), "Rejected duplicate character");
            return Err(RepoError::duplicate(ENTITY, character.name()));
        }

        tracing::debug!(name = %character.name(), variant = %character.variant_kind(), "Adding character");
        guard.push(character);
        Ok(())
    }

    fn update_character(&self, character: Character) -> Result<(), RepoError> {
        let mut guard = self.write();
        let Some(index) = position(&guard, character.name().as_str()) else {
            tracing::warn!(name = %character.name(), "Cannot update unknown character");
            return Err(RepoError::not_found(ENTITY, character.name()));
        };

        tracing::debug!(name = %character.name(), "Updating character");
        guard[index] = character;
        Ok(())
    }

    fn delete_character(&self, name: &str) -> Result<(), RepoError> {
        let mut guard = self.write();
        let Some(index) = position(&guard, name) else {
            tracing::warn!(name, "Cannot delete unknown character");
            return Err(RepoError::not_found(ENTITY, name));
        };

        tracing::debug!(name, "Deleting character");
        guard.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_domain::{CharacterName, Loot};

    fn name(s: &str) -> CharacterName {
        CharacterName::new(s).expect("valid name")
    }

    fn names(context: &InMemoryContext) -> Vec<String> {
        context
            .characters()
            .iter()
            .map(|c| c.name().to_string())
            .collect()
    }

    fn roster() -> Vec<Character> {
        vec![
            Character::player(name("Hero"), 0),
            Character::goblin(name("Grunt"), Some("Amulet")),
            Character::ghost(name("Wisp"), None),
        ]
    }

    #[test]
    fn characters_preserve_insertion_order() {
        let context = InMemoryContext::new();
        for character in roster() {
            context.add_character(character).expect("add");
        }

        assert_eq!(names(&context), ["Hero", "Grunt", "Wisp"]);
        assert_eq!(context.len(), 3);
    }

    #[test]
    fn add_rejects_duplicate_names() {
        let context = InMemoryContext::with_characters(roster()).expect("seed");

        let err = context
            .add_character(Character::ghost(name("Grunt"), None))
            .expect_err("duplicate");

        assert!(err.is_duplicate());
        assert_eq!(context.len(), 3);
    }

    #[test]
    fn seed_rejects_repeated_names_and_keeps_previous_state() {
        let context = InMemoryContext::with_characters(roster()).expect("seed");

        let err = context
            .seed(vec![
                Character::player(name("Twin"), 0),
                Character::player(name("Twin"), 5),
            ])
            .expect_err("repeated");

        assert_eq!(err, RepoError::duplicate("Character", "Twin"));
        assert_eq!(names(&context), ["Hero", "Grunt", "Wisp"]);
    }

    #[test]
    fn update_replaces_in_place() {
        let context = InMemoryContext::with_characters(roster()).expect("seed");

        context
            .update_character(Character::goblin(name("Grunt"), None).with_level(4))
            .expect("update");

        let grunt = context.get("Grunt").expect("stored");
        assert_eq!(grunt.level(), 4);
        assert_eq!(grunt.loot(), Some(&Loot::empty()));
        assert_eq!(names(&context), ["Hero", "Grunt", "Wisp"]);
    }

    #[test]
    fn update_unknown_is_not_found() {
        let context = InMemoryContext::with_characters(roster()).expect("seed");

        let err = context
            .update_character(Character::player(name("Nobody"), 0))
            .expect_err("missing");

        assert!(err.is_not_found());
    }

    #[test]
    fn delete_unknown_is_not_found() {
        let context = InMemoryContext::new();
        let err = context.delete_character("Nobody").expect_err("missing");
        assert_eq!(err, RepoError::not_found("Character", "Nobody"));
    }

    #[test]
    fn add_then_delete_restores_original_state() {
        let context = InMemoryContext::with_characters(roster()).expect("seed");
        let before = context.characters();

        context
            .add_character(Character::player(name("Visitor"), 3))
            .expect("add");
        context.delete_character("Visitor").expect("delete");

        assert_eq!(context.characters(), before);
    }

    #[test]
    fn delete_keeps_order_of_the_rest() {
        let context = InMemoryContext::with_characters(roster()).expect("seed");

        context.delete_character("Hero").expect("delete");

        assert_eq!(names(&context), ["Grunt", "Wisp"]);
        assert!(context.get("Hero").is_none());
    }
}
