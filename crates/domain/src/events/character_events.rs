//! Character-related domain events
//!
//! These types communicate what happened when character state was modified,
//! allowing callers to react appropriately.

use crate::events::CombatEvent;
use crate::value_objects::CharacterName;

/// Resources that changed hands during an attack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LootTransfer {
    /// The attacker took the target's treasure and cashed it in
    Treasure { treasure: String, gold_value: u32 },
    /// The attacker emptied the target's purse
    Gold { amount: u32 },
    /// Nothing was taken
    Nothing,
}

/// Outcome of one character attacking another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackOutcome {
    pub attacker: CharacterName,
    pub target: CharacterName,
    pub transfer: LootTransfer,
}

impl AttackOutcome {
    /// Returns true if any resource changed hands.
    pub fn transferred(&self) -> bool {
        !matches!(self.transfer, LootTransfer::Nothing)
    }

    /// The notifications produced by the attack, in the order they happened.
    pub fn events(&self) -> Vec<CombatEvent> {
        let mut events = vec![CombatEvent::Attacked {
            attacker: self.attacker.clone(),
            target: self.target.clone(),
        }];

        match &self.transfer {
            LootTransfer::Treasure { treasure, .. } => events.push(CombatEvent::TreasureTaken {
                attacker: self.attacker.clone(),
                target: self.target.clone(),
                treasure: treasure.clone(),
            }),
            LootTransfer::Gold { amount } => events.push(CombatEvent::GoldTaken {
                attacker: self.attacker.clone(),
                target: self.target.clone(),
                amount: *amount,
            }),
            LootTransfer::Nothing => {}
        }

        events
    }
}
