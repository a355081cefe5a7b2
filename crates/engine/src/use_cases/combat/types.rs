//! Result and error types for the combat use case.

use crate::infrastructure::ports::RepoError;

/// How a combat run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunReport {
    /// The full script ran.
    Completed { player_gold: u32 },
    /// No player or no goblin was available; nothing happened.
    NotInitialized,
}

impl RunReport {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CombatError {
    /// A combatant could not be read back or written to the context.
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
