//! Application state and composition.
//!
//! Plain constructor wiring: build the context, seed it, then hand the ports to
//! the use cases. No service locator.

use std::sync::Arc;

use skirmish_domain::Character;

use crate::infrastructure::{
    memory::InMemoryContext,
    ports::{CharacterContext, NarratorPort, RepoError},
};
use crate::use_cases::CombatEngine;

/// Main application state.
pub struct App {
    pub context: Arc<dyn CharacterContext>,
    pub combat: CombatEngine,
}

impl App {
    /// Wire an app over an existing context.
    ///
    /// The combat engine picks its combatants now, so the context must already
    /// be seeded.
    pub fn new(context: Arc<dyn CharacterContext>, narrator: Arc<dyn NarratorPort>) -> Self {
        let combat = CombatEngine::new(context.clone(), narrator);
        Self { context, combat }
    }

    /// Wire an app over a fresh in-memory context holding `roster`.
    pub fn with_roster(
        roster: Vec<Character>,
        narrator: Arc<dyn NarratorPort>,
    ) -> Result<Self, RepoError> {
        let context = Arc::new(InMemoryContext::with_characters(roster)?);
        tracing::info!(characters = context.len(), "Character context ready");
        Ok(Self::new(context, narrator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::console::ConsoleNarrator;
    use crate::infrastructure::seed::default_roster;
    use crate::use_cases::RunReport;
    use skirmish_domain::CharacterName;

    #[test]
    fn default_roster_runs_to_completion() {
        let narrator = Arc::new(ConsoleNarrator::new(Vec::new(), false));
        let app = App::with_roster(default_roster().expect("roster"), narrator).expect("app");

        assert_eq!(
            app.combat.run().expect("run"),
            RunReport::Completed { player_gold: 10 }
        );
        assert_eq!(app.context.characters().len(), 3);
    }

    #[test]
    fn duplicate_roster_is_rejected() {
        let twin = || Character::player(CharacterName::new("Twin").expect("valid name"), 0);
        let narrator = Arc::new(ConsoleNarrator::new(Vec::new(), false));

        let err = App::with_roster(vec![twin(), twin()], narrator)
            .err()
            .expect("duplicate names");

        assert!(err.is_duplicate());
    }
}
