//! Scripted combat run.
//!
//! Pits the first player against the first goblin in the context, then lets
//! every character show off its special action.

use std::sync::Arc;

use skirmish_domain::{AttackOutcome, Character, CharacterName, CombatEvent, VariantKind};

use super::types::{CombatError, RunReport};
use crate::infrastructure::ports::{CharacterContext, Narration, NarratorPort, RepoError, Section};

/// Runs one fixed exchange between a player and a goblin.
///
/// Depends only on the `CharacterContext` and `NarratorPort` abstractions.
/// Combatants are remembered by name; the context stays the sole owner of
/// every character and each step reads and writes through it.
pub struct CombatEngine {
    context: Arc<dyn CharacterContext>,
    narrator: Arc<dyn NarratorPort>,
    player: Option<CharacterName>,
    goblin: Option<CharacterName>,
}

impl CombatEngine {
    pub fn new(context: Arc<dyn CharacterContext>, narrator: Arc<dyn NarratorPort>) -> Self {
        let characters = context.characters();
        let first_of = |kind: VariantKind| {
            characters
                .iter()
                .find(|c| c.variant_kind() == kind)
                .map(|c| c.name().clone())
        };
        let player = first_of(VariantKind::Player);
        let goblin = first_of(VariantKind::Goblin);

        tracing::debug!(
            player = ?player.as_ref().map(CharacterName::as_str),
            goblin = ?goblin.as_ref().map(CharacterName::as_str),
            "Selected combatants"
        );

        Self {
            context,
            narrator,
            player,
            goblin,
        }
    }

    pub fn player(&self) -> Option<&CharacterName> {
        self.player.as_ref()
    }

    pub fn goblin(&self) -> Option<&CharacterName> {
        self.goblin.as_ref()
    }

    /// True when both a player and a goblin were found.
    pub fn is_ready(&self) -> bool {
        self.player.is_some() && self.goblin.is_some()
    }

    /// Run the script once.
    ///
    /// # Returns
    /// * `Ok(RunReport::Completed)` - the whole script ran
    /// * `Ok(RunReport::NotInitialized)` - a combatant was missing; only the
    ///   failure line was narrated
    /// * `Err(CombatError)` - a combatant vanished from the context mid-run
    pub fn run(&self) -> Result<RunReport, CombatError> {
        let span = tracing::info_span!("combat_run");
        let _enter = span.enter();

        let (Some(player), Some(goblin)) = (&self.player, &self.goblin) else {
            tracing::warn!(
                has_player = self.player.is_some(),
                has_goblin = self.goblin.is_some(),
                "Combat run skipped"
            );
            self.narrator.narrate(&Narration::InitFailed);
            return Ok(RunReport::NotInitialized);
        };

        self.report_gold(player)?;

        self.advance(goblin)?;
        self.attack(goblin, player)?;

        self.advance(player)?;
        self.attack(player, goblin)?;

        let player_gold = self.report_gold(player)?;

        self.narrator
            .narrate(&Narration::Section(Section::SpecialActions));
        self.special_action(player)?;
        self.special_action(goblin)?;

        self.narrator
            .narrate(&Narration::Section(Section::AllSpecialActions));
        for character in self.context.characters() {
            self.emit(character.perform_special_action());
        }

        tracing::info!(player_gold, "Combat run completed");
        Ok(RunReport::Completed { player_gold })
    }

    fn load(&self, name: &CharacterName) -> Result<Character, RepoError> {
        self.context
            .get(name.as_str())
            .ok_or_else(|| RepoError::not_found("Character", name))
    }

    fn emit(&self, event: CombatEvent) {
        tracing::debug!(event = event.event_type(), actor = %event.actor(), "Combat step");
        self.narrator.narrate(&Narration::Event(event));
    }

    fn report_gold(&self, player: &CharacterName) -> Result<u32, RepoError> {
        let gold = self.load(player)?.gold().unwrap_or_default();
        self.narrator.narrate(&Narration::PlayerGold(gold));
        Ok(gold)
    }

    fn advance(&self, name: &CharacterName) -> Result<(), RepoError> {
        let character = self.load(name)?;
        self.emit(character.advance());
        Ok(())
    }

    fn special_action(&self, name: &CharacterName) -> Result<(), RepoError> {
        let character = self.load(name)?;
        self.emit(character.perform_special_action());
        Ok(())
    }

    fn attack(
        &self,
        attacker_name: &CharacterName,
        target_name: &CharacterName,
    ) -> Result<AttackOutcome, RepoError> {
        let mut attacker = self.load(attacker_name)?;
        let mut target = self.load(target_name)?;

        let outcome = attacker.attack(&mut target);
        for event in outcome.events() {
            self.emit(event);
        }

        // Only a transfer mutates either side.
        if outcome.transferred() {
            self.context.update_character(attacker)?;
            self.context.update_character(target)?;
        }

        Ok(outcome)
    }
}
