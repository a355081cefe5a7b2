//! Combat-related domain events
//!
//! These values communicate what happened during combat, allowing callers to
//! react appropriately. Their `Display` form is the narration line shown to the
//! player, and the wording is stable.

use std::fmt;

use crate::value_objects::CharacterName;

/// The signature move each variant performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialAction {
    /// Player
    SwordStrike,
    /// Goblin
    Backstab,
    /// Ghost
    PhaseThroughWalls,
}

/// A single thing that happened in combat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    Moved {
        name: CharacterName,
    },
    Attacked {
        attacker: CharacterName,
        target: CharacterName,
    },
    TreasureTaken {
        attacker: CharacterName,
        target: CharacterName,
        treasure: String,
    },
    GoldTaken {
        attacker: CharacterName,
        target: CharacterName,
        amount: u32,
    },
    SpecialAction {
        name: CharacterName,
        action: SpecialAction,
    },
    Flew {
        name: CharacterName,
    },
}

impl CombatEvent {
    /// Name of the character that caused the event.
    pub fn actor(&self) -> &CharacterName {
        match self {
            Self::Moved { name } | Self::SpecialAction { name, .. } | Self::Flew { name } => {
                name
            }
            Self::Attacked { attacker, .. }
            | Self::TreasureTaken { attacker, .. }
            | Self::GoldTaken { attacker, .. } => attacker,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Moved { .. } => "moved",
            Self::Attacked { .. } => "attacked",
            Self::TreasureTaken { .. } => "treasure_taken",
            Self::GoldTaken { .. } => "gold_taken",
            Self::SpecialAction { .. } => "special_action",
            Self::Flew { .. } => "flew",
        }
    }
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moved { name } => write!(f, "{name} moves."),
            Self::Attacked { attacker, target } => write!(f, "{attacker} attacks {target}"),
            Self::TreasureTaken {
                attacker,
                target,
                treasure,
            } => write!(f, "{attacker} takes {treasure} from {target}"),
            Self::GoldTaken {
                attacker, target, ..
            } => write!(f, "{attacker} takes gold from {target}"),
            Self::SpecialAction { name, action } => match action {
                SpecialAction::SwordStrike => {
                    write!(f, "{name} performs a powerful sword strike!")
                }
                SpecialAction::Backstab => write!(f, "{name} performs a sneaky backstab!"),
                SpecialAction::PhaseThroughWalls => write!(f, "{name} phases through the walls!"),
            },
            Self::Flew { name } => write!(f, "{name} flies rapidly through the air."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> CharacterName {
        CharacterName::new(s).expect("valid name")
    }

    #[test]
    fn renders_narration_lines() {
        let cases = [
            (CombatEvent::Moved { name: name("Grunt") }, "Grunt moves."),
            (
                CombatEvent::Attacked {
                    attacker: name("Hero"),
                    target: name("Grunt"),
                },
                "Hero attacks Grunt",
            ),
            (
                CombatEvent::TreasureTaken {
                    attacker: name("Hero"),
                    target: name("Grunt"),
                    treasure: "Amulet".into(),
                },
                "Hero takes Amulet from Grunt",
            ),
            (
                CombatEvent::GoldTaken {
                    attacker: name("Hero"),
                    target: name("Rival"),
                    amount: 20,
                },
                "Hero takes gold from Rival",
            ),
            (
                CombatEvent::SpecialAction {
                    name: name("Wisp"),
                    action: SpecialAction::PhaseThroughWalls,
                },
                "Wisp phases through the walls!",
            ),
            (
                CombatEvent::Flew { name: name("Wisp") },
                "Wisp flies rapidly through the air.",
            ),
        ];

        for (event, expected) in cases {
            assert_eq!(event.to_string(), expected);
        }
    }

    #[test]
    fn actor_is_the_initiator() {
        let event = CombatEvent::GoldTaken {
            attacker: name("Hero"),
            target: name("Rival"),
            amount: 5,
        };
        assert_eq!(event.actor().as_str(), "Hero");
        assert_eq!(event.event_type(), "gold_taken");
    }
}
